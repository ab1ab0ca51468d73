use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        jwt::JwtKeys,
        services::authenticate,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    // unreadable body -> missing credentials
    let payload = match payload {
        Ok(Json(p)) => p,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable login body");
            LoginRequest::default()
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let access_token = authenticate(
        state.credentials.as_ref(),
        &keys,
        payload.email.as_deref(),
        payload.password.as_deref(),
        state.config.distinct_auth_errors,
    )
    .await?;

    Ok(Json(LoginResponse { access_token }))
}

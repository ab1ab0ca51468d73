use axum::{extract::State, routing::get, Router};
use tracing::{info, instrument};

use super::client::RelayedResponse;
use crate::{auth::extractors::AuthUser, error::AppError, state::AppState};

pub fn sync_routes() -> Router<AppState> {
    Router::new().route("/sync", get(sync).post(sync))
}

#[instrument(skip(state))]
pub async fn sync(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<RelayedResponse, AppError> {
    let relayed = state.pipeline.relay().await?;
    info!(user_id = %user_id, status = %relayed.status, "pipeline sync relayed");
    Ok(relayed)
}

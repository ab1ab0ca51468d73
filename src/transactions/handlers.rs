use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{error, instrument, warn};

use super::{dto::ErrorBody, error::TransactionsError, reader::read_transactions};
use crate::config::TransactionsConfig;

pub fn transactions_routes() -> Router<Arc<TransactionsConfig>> {
    Router::new().route("/transactions", get(list_transactions))
}

#[instrument(skip(cfg))]
pub async fn list_transactions(State(cfg): State<Arc<TransactionsConfig>>) -> Response {
    let path = cfg.csv_path.clone();
    let normalize = cfg.normalize_values;
    let result = tokio::task::spawn_blocking(move || read_transactions(path, normalize))
        .await
        .unwrap_or_else(|e| Err(TransactionsError::Task(e.to_string())));

    match result {
        Ok(rows) => Json(rows).into_response(),
        Err(e @ TransactionsError::NotFound(_)) => {
            warn!(error = %e, "transactions file missing");
            let status = if cfg.missing_file_not_found {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(ErrorBody { error: e.to_string() })).into_response()
        }
        Err(e) => {
            error!(error = %e, "transactions read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: e.to_string() }),
            )
                .into_response()
        }
    }
}

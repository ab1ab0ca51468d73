mod client;
pub mod handlers;

pub use client::{PipelineClient, RelayedResponse};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::sync_routes()
}

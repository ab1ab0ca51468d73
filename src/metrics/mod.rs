mod dto;
pub mod handlers;
mod repo;

pub use dto::DailyMetric;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::metrics_routes()
}

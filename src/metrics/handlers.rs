use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use time::{macros::format_description, Date};
use tracing::{info, instrument};

use super::{
    dto::{DailyMetric, MetricsQuery},
    repo::{list_daily_metrics, DateRange},
};
use crate::{auth::extractors::AuthUser, error::AppError, state::AppState};

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(get_metrics))
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>, AppError> {
    match value.filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Date::parse(v, format_description!("[year]-[month]-[day]"))
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{field} must be YYYY-MM-DD"))),
    }
}

fn date_range(q: &MetricsQuery) -> Result<DateRange, AppError> {
    Ok(DateRange {
        start: parse_date("start_date", q.start_date.as_deref())?,
        end: parse_date("end_date", q.end_date.as_deref())?,
    })
}

#[instrument(skip(state))]
pub async fn get_metrics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> Result<Json<Vec<DailyMetric>>, AppError> {
    let Query(q) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let range = date_range(&q)?;
    let metrics = list_daily_metrics(&state.db, range).await?;
    info!(user_id = %user_id, rows = metrics.len(), "metrics served");
    Ok(Json(metrics))
}

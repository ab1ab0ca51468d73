use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `aggregated.daily_metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DailyMetric {
    pub date: String,
    pub total_revenue_approved: f64,
    pub total_revenue_pending: f64,
    pub total_revenue_cancelled: f64,
    pub count_approved: i64,
    pub count_pending: i64,
    pub count_cancelled: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

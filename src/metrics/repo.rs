use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::Date;

use super::dto::DailyMetric;

/// Date bounds are inclusive; either may be open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

fn daily_metrics_query(range: DateRange) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        r#"
        SELECT date::text AS date,
               total_revenue_approved::float8 AS total_revenue_approved,
               total_revenue_pending::float8 AS total_revenue_pending,
               total_revenue_cancelled::float8 AS total_revenue_cancelled,
               count_approved::int8 AS count_approved,
               count_pending::int8 AS count_pending,
               count_cancelled::int8 AS count_cancelled
        FROM aggregated.daily_metrics
        WHERE 1=1"#,
    );
    if let Some(start) = range.start {
        qb.push(" AND date >= ").push_bind(start);
    }
    if let Some(end) = range.end {
        qb.push(" AND date <= ").push_bind(end);
    }
    qb.push(" ORDER BY date ASC");
    qb
}

pub async fn list_daily_metrics(db: &PgPool, range: DateRange) -> anyhow::Result<Vec<DailyMetric>> {
    let mut qb = daily_metrics_query(range);
    let rows = qb
        .build_query_as::<DailyMetric>()
        .fetch_all(db)
        .await
        .context("list daily metrics")?;
    Ok(rows)
}

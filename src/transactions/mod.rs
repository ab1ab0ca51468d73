mod dto;
mod error;
pub mod handlers;
pub mod reader;

pub use dto::{Transaction, TransactionValue};
pub use error::TransactionsError;

use std::sync::Arc;

use axum::Router;

use crate::config::TransactionsConfig;

pub fn router() -> Router<Arc<TransactionsConfig>> {
    handlers::transactions_routes()
}

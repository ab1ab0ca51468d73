use serde::{Deserialize, Serialize};

/// Row as it appears in the source file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTransaction {
    pub order_id: String,
    pub created_at: String,
    pub status: String,
    pub value: String,
    pub payment_method: String,
}

/// `value` stays textual unless the whole column is numeric (or
/// normalization is enabled). Blank cells are `None`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TransactionValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    pub order_id: String,
    pub created_at: String,
    pub status: String,
    pub value: Option<TransactionValue>,
    pub payment_method: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

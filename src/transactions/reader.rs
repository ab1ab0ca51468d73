use std::path::Path;

use tracing::debug;

use super::{
    dto::{RawTransaction, Transaction, TransactionValue},
    error::TransactionsError,
};

/// Reads the `;`-delimited transactions file.
///
/// The `value` column is numeric only when every non-blank cell is a
/// dot-decimal number. Otherwise cells are returned as text, or converted
/// from comma-decimal when `normalize_values` is set. Blank cells are `null`.
pub fn read_transactions(
    path: impl AsRef<Path>,
    normalize_values: bool,
) -> Result<Vec<Transaction>, TransactionsError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TransactionsError::NotFound(path.display().to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_path(path)?;
    let rows = rdr
        .deserialize::<RawTransaction>()
        .collect::<Result<Vec<_>, _>>()?;

    let numeric = rows
        .iter()
        .filter(|r| !r.value.is_empty())
        .all(|r| r.value.parse::<f64>().is_ok());
    debug!(rows = rows.len(), numeric, normalize_values, "transactions file read");

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| -> Result<Transaction, TransactionsError> {
            let value = if row.value.is_empty() {
                None
            } else if numeric {
                Some(TransactionValue::Number(row.value.parse().unwrap_or_default()))
            } else if normalize_values {
                // header is line 1
                Some(comma_decimal(&row.value).ok_or_else(|| {
                    TransactionsError::InvalidValue {
                        line: i + 2,
                        value: row.value.clone(),
                    }
                })?)
            } else {
                Some(TransactionValue::Text(row.value))
            };
            Ok(Transaction {
                order_id: row.order_id,
                created_at: row.created_at,
                status: row.status,
                value,
                payment_method: row.payment_method,
            })
        })
        .collect()
}

fn comma_decimal(raw: &str) -> Option<TransactionValue> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .map(TransactionValue::Number)
}

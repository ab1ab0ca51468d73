#[derive(Debug, thiserror::Error)]
pub enum TransactionsError {
    #[error("csv file not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("could not convert value {value:?} on line {line} to float")]
    InvalidValue { line: usize, value: String },

    #[error("reader task failed: {0}")]
    Task(String),
}

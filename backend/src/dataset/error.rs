//! Error types for dataset loading.

use std::path::PathBuf;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while reading the launch dataset.
///
/// Every variant is fatal at startup: the dashboard has nothing to show without its data.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("invalid value in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        reason: String,
    },
}

impl DatasetError {
    pub fn invalid_value(row: usize, column: &str, reason: impl Into<String>) -> Self {
        DatasetError::InvalidValue {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

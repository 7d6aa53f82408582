//! Error types for dataset loading

use crate::error::AppError;

/// Result type for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors that make a dataset unusable
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Dataset file could not be opened
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Stream could not be decoded as delimited text
    #[error("Malformed dataset stream: {0}")]
    Csv(#[from] csv::Error),

    /// An admitted row carried a value that does not fit its column
    #[error("Invalid {field} {value:?} on line {line}: {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Ingestion(err.to_string())
    }
}

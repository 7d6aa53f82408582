//! Error types for analytics queries

use crate::error::AppError;

/// Result type for analytics queries
pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur when answering a query
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyticsError {
    /// Request exceeds what the dataset can satisfy
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Unrecognized or malformed query argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<validator::ValidationErrors> for AnalyticsError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalyticsError::InvalidArgument(err.to_string())
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::OutOfRange(msg) => AppError::OutOfRange(msg),
            AnalyticsError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
        }
    }
}

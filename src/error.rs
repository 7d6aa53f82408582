use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Dataset could not be read or parsed
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Query arguments outside the valid range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Unrecognized or malformed query argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Ingestion(_) => "INGESTION_ERROR",
            AppError::OutOfRange(_) => "OUT_OF_RANGE",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Process exit code used by the command-line driver
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidArgument(_) | AppError::OutOfRange(_) => 2,
            AppError::Configuration(_) => 3,
            AppError::Ingestion(_) | AppError::Io(_) => 4,
            AppError::Serialization(_) => 1,
        }
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Conversion from validator::ValidationErrors
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

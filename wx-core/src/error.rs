/// Error types for the forecast core
use thiserror::Error;

/// Main error type for forecast operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The request never produced an HTTP response
    #[error("Cannot reach forecast server: {0}")]
    Transport(String),

    /// The request body could not be encoded
    #[error("Failed to encode forecast request: {0}")]
    Encode(String),

    /// A 2xx response whose body is not a forecast
    #[error("Malformed forecast response: {0}")]
    Malformed(String),

    /// Date parsing failed
    #[error("Failed to parse date '{0}', expected YYYY-MM-DD")]
    DateParse(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Malformed(err.to_string())
    }
}

/// Type alias for Results using ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;

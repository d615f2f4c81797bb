//! Error types for episode sources

use podstream_core::AppError;
use thiserror::Error;

/// Result type for episode source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while talking to an episode source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Query was rejected before being sent
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Request failed at the transport level
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No episode with the requested id
    #[error("Episode not found: {0}")]
    NotFound(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::InvalidQuery(reason) => AppError::InvalidArgument {
                argument: "query".to_string(),
                reason,
            },
            SourceError::NetworkError(message) => AppError::NetworkError {
                message,
                source: None,
            },
            SourceError::HttpStatus { status, reason } => AppError::InvalidResponse {
                details: format!("HTTP {} {}", status, reason),
            },
            SourceError::ParseError(details) => AppError::InvalidResponse { details },
            SourceError::NotFound(id) => AppError::EpisodeNotFound { id },
        }
    }
}

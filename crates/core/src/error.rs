//! Error types for PodStream
//!
//! Errors are classified into two severity tiers:
//! - **Recoverable**: worth retrying (network timeouts, etc.)
//! - **Degraded**: the affected feature is unavailable but the app continues
//!
//! The player core itself never produces errors (invalid commands are
//! guarded no-ops); everything here originates at the data boundary.

use std::fmt;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Error can be automatically recovered from
    Recoverable,
    /// Feature degraded but app can continue
    Degraded,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
        }
    }
}

/// Main error type for PodStream
#[derive(Error, Debug)]
pub enum AppError {
    /// Network request failed
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network timeout
    #[error("Network timeout after {seconds}s: {operation}")]
    NetworkTimeout { operation: String, seconds: u64 },

    /// Invalid URL provided
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Invalid response from the episode server
    #[error("Invalid response from episode server: {details}")]
    InvalidResponse { details: String },

    /// Episode not found on the server
    #[error("Episode not found: {id}")]
    EpisodeNotFound { id: String },

    /// Invalid configuration
    #[error("Invalid configuration: {setting} = '{value}' ({reason})")]
    InvalidConfiguration {
        setting: String,
        value: String,
        reason: String,
    },

    /// Invalid argument provided
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NetworkError { .. } | Self::NetworkTimeout { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Degraded,
        }
    }

    /// Returns true if this error can be automatically retried
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Recoverable
    }

    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { .. } | Self::NetworkTimeout { .. } => {
                "Cannot reach the episode server. Please check your connection.".to_string()
            }
            Self::InvalidUrl { .. } => "The link provided is not valid.".to_string(),
            Self::InvalidResponse { .. } => {
                "Received invalid data from the episode server.".to_string()
            }
            Self::EpisodeNotFound { .. } => "The requested episode was not found.".to_string(),
            Self::InvalidConfiguration { setting, .. } => {
                format!("Invalid setting: {}. Please check your configuration.", setting)
            }
            Self::InvalidArgument { .. } => "Invalid input provided.".to_string(),
            Self::InternalError { .. } => "An unexpected error occurred. Please try again.".to_string(),
        }
    }

    /// Helper to create a network error from any error type
    pub fn network<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Recoverable < ErrorSeverity::Degraded);
    }

    #[test]
    fn test_network_error_severity() {
        let err = AppError::NetworkError {
            message: "Connection failed".to_string(),
            source: None,
        };
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_network_timeout_severity() {
        let err = AppError::NetworkTimeout {
            operation: "list episodes".to_string(),
            seconds: 30,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_not_found_severity() {
        let err = AppError::EpisodeNotFound {
            id: "missing".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Degraded);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_user_messages_are_friendly() {
        let err = AppError::NetworkError {
            message: "TCP connection refused".to_string(),
            source: None,
        };
        let msg = err.user_message();
        assert!(!msg.contains("TCP"));
        assert!(msg.contains("connection"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::EpisodeNotFound {
            id: "a-new-hope".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("Episode not found"));
        assert!(display.contains("a-new-hope"));
    }

    #[test]
    fn test_network_helper_preserves_source() {
        let inner = io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = AppError::network("Failed to connect", inner);

        assert!(matches!(err, AppError::NetworkError { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_configuration_message_names_setting() {
        let err = AppError::InvalidConfiguration {
            setting: "server.base_url".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        };
        assert!(err.user_message().contains("server.base_url"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(test_function().unwrap(), 42);
    }
}

//! Error types used throughout the application

use brick_common::{ErrorClassification, ErrorSeverity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for BRICK
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BrickError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorClassification for BrickError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Internal(_))
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Auth(_) | Self::Network(_) | Self::Internal(_) => ErrorSeverity::Warning,
            Self::Storage(_) | Self::NotFound(_) | Self::InvalidInput(_) => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Critical,
        }
    }
}

/// Result type alias for BRICK operations
pub type Result<T> = std::result::Result<T, BrickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_failures_are_retryable() {
        assert!(BrickError::Network("connection refused".into()).is_retryable());
        assert!(BrickError::Internal("upstream 500".into()).is_retryable());
        assert!(!BrickError::Auth("token expired".into()).is_retryable());
        assert!(!BrickError::InvalidInput("missing field".into()).is_retryable());
        assert!(!BrickError::Config("bad base url".into()).is_retryable());
    }

    #[test]
    fn config_errors_are_critical() {
        let err = BrickError::Config("BRICK_API_BASE_URL unset".into());
        assert!(err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(BrickError::Network("down".into()).severity(), ErrorSeverity::Warning);
        assert_eq!(BrickError::NotFound("missing".into()).severity(), ErrorSeverity::Error);
    }
}

//! API-specific error types
//!
//! Classifies transport failures by origin. The backend reports failures as
//! JSON `{"detail": "..."}` bodies; the detail string is extracted so the
//! session layer can surface it verbatim for auth and validation errors.

use std::time::Duration;

use brick_common::{ErrorClassification, ErrorSeverity};
use brick_domain::BrickError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors
    Network,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::NotFound(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Extract the FastAPI-style `detail` field from an error body, if any
    pub(crate) fn detail_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("detail")?
            .as_str()
            .map(String::from)
    }
}

impl ErrorClassification for ApiError {
    fn is_retryable(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Server | ApiErrorCategory::Network)
    }

    fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ApiErrorCategory::Authentication => ErrorSeverity::Warning,
            ApiErrorCategory::Network | ApiErrorCategory::Server => ErrorSeverity::Warning,
            ApiErrorCategory::Client => ErrorSeverity::Error,
            ApiErrorCategory::Config => ErrorSeverity::Critical,
        }
    }
}

impl From<ApiError> for BrickError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(msg) => BrickError::Auth(msg),
            ApiError::Client(msg) => BrickError::InvalidInput(msg),
            ApiError::NotFound(msg) => BrickError::NotFound(msg),
            ApiError::Server(msg) => BrickError::Internal(msg),
            ApiError::Network(msg) => BrickError::Network(msg),
            ApiError::Timeout(duration) => {
                BrickError::Network(format!("Request timed out after {duration:?}"))
            }
            ApiError::Config(msg) => BrickError::Config(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_json_body() {
        let body = r#"{"detail": "Incorrect email or password"}"#;
        assert_eq!(
            ApiError::detail_from_body(body).as_deref(),
            Some("Incorrect email or password")
        );
    }

    #[test]
    fn detail_is_none_for_non_json_or_missing_field() {
        assert_eq!(ApiError::detail_from_body("Internal Server Error"), None);
        assert_eq!(ApiError::detail_from_body(r#"{"error": "nope"}"#), None);
    }

    #[test]
    fn auth_errors_map_to_domain_auth() {
        let err: BrickError = ApiError::Auth("Incorrect email or password".into()).into();
        assert!(matches!(err, BrickError::Auth(_)));
    }

    #[test]
    fn network_and_server_failures_are_retryable() {
        assert!(ApiError::Network("connection refused".into()).is_retryable());
        assert!(ApiError::Server("500".into()).is_retryable());
        assert!(!ApiError::Client("422".into()).is_retryable());
        assert!(!ApiError::Auth("401".into()).is_retryable());
    }
}

//! Error classification infrastructure
//!
//! Every error type in the workspace implements [`ErrorClassification`] so
//! that logging and degradation decisions are made uniformly:
//!
//! - **`is_retryable()`**: may a *later, separately triggered* attempt
//!   succeed? No component re-issues a failed request; this only informs
//!   whether a failure is treated as degraded (poller) or terminal (UI
//!   surfaces an error and waits for the next user action).
//! - **`severity()`**: drives the log level an adapter reports at.
//! - **`is_critical()`**: requires immediate attention (invariant breaks,
//!   corrupted local state).

use std::fmt;

/// Standard interface for classifying errors by their characteristics
pub trait ErrorClassification {
    /// Check if a later attempt at the same operation could succeed
    ///
    /// Typically true for transient conditions such as network timeouts or
    /// server-side failures, false for validation and configuration errors.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for monitoring, alerting, and logging decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Transient;

    impl ErrorClassification for Transient {
        fn is_retryable(&self) -> bool {
            true
        }
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Warning
        }
    }

    #[test]
    fn severity_ordering_supports_threshold_checks() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn default_criticality_follows_severity() {
        assert!(!Transient.is_critical());
    }

    #[test]
    fn severity_display_matches_log_levels() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}

//! Background scheduling
//!
//! Holds the notification poller and the shared scheduler error type.

pub mod notification_poller;

use thiserror::Error;

/// Scheduler lifecycle errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Scheduler already running")]
    AlreadyRunning,

    #[error("Scheduler not running")]
    NotRunning,

    /// Stop waited this long for the task to finish and gave up
    #[error("Operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Task join failed: {0}")]
    TaskJoinFailed(String),
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;

//! # BRICK Common
//!
//! Cross-cutting utilities shared by every other crate in the workspace:
//! error classification for monitoring decisions and the backoff calculator
//! used by the notification poller.
//!
//! ## Architecture Principles
//! - No dependencies on other BRICK crates
//! - No I/O, no async runtime, no side effects

pub mod backoff;
pub mod error;

pub use backoff::BackoffStrategy;
pub use error::{ErrorClassification, ErrorSeverity};

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Notification polling
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const MAX_POLL_BACKOFF_MULTIPLIER: u32 = 8;

// HTTP client defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const API_PREFIX: &str = "/api";

// Gamification
pub const POINTS_PER_LEVEL: u32 = 100;

// Category filters use this sentinel to bypass the filter entirely
pub const CATEGORY_ALL: &str = "all";

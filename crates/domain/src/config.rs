//! Application configuration structures
//!
//! Loaded by the infra config loader from environment variables or a
//! `brick.toml`/`brick.json` file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub notifications: PollConfig,
}

/// REST API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api` prefix
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Durable session storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the file holding the persisted bearer token
    pub token_path: String,
}

/// Notification poller settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Base interval between notification fetches in seconds
    #[serde(default = "default_poll_interval_seconds")]
    pub interval_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_poll_interval_seconds() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_seconds: default_poll_interval_seconds() }
    }
}

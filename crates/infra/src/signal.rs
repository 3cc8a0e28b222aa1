//! Tracing-backed user signal sink
//!
//! Stands in for the toast layer of a graphical shell: every user-facing
//! message is emitted as a structured event so a headless run still shows
//! what the user would have seen.

use brick_core::UiSignal;
use tracing::{error, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSignal;

impl UiSignal for TracingSignal {
    fn success(&self, message: &str) {
        info!(kind = "success", "{message}");
    }

    fn info(&self, message: &str) {
        info!(kind = "info", "{message}");
    }

    fn error(&self, message: &str) {
        error!(kind = "error", "{message}");
    }
}

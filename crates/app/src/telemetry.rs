//! Tracing subscriber setup
//!
//! Honors `RUST_LOG`; defaults to info for the workspace crates and warn
//! for everything else.

use tracing_subscriber::EnvFilter;

pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,brick_app=info,brick_core=info,brick_infra=info")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! BRICK - social services case management client
//!
//! Headless entry point: loads configuration, wires up the context,
//! restores any persisted session and keeps the notification poller
//! running until interrupted.

use brick_app::{init_telemetry, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let config = brick_infra::config::load()?;
    let context = AppContext::new(config)?;

    context.startup().await?;

    let session = context.session.session();
    match session.user {
        Some(user) => tracing::info!(email = %user.email, role = %user.role, "Session restored"),
        None => tracing::info!("No persisted session, starting anonymous"),
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    context.shutdown().await?;
    Ok(())
}

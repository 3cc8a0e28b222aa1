//! # BRICK Application Layer
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Telemetry initialization
//! - Main entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Owns startup and shutdown ordering

pub mod context;
pub mod telemetry;

pub use context::AppContext;
pub use telemetry::init_telemetry;

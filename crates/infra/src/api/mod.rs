//! HTTP API adapters
//!
//! The shared [`client::ApiClient`] owns the connection pool, the base URL,
//! the timeout and bearer-token injection. Each gateway in [`gateways`]
//! wraps it to implement one core port.

pub mod client;
pub mod errors;
pub mod gateways;
pub mod token;

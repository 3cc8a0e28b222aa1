//! Session lifecycle: login, logout, and startup identity resolution

pub mod ports;
pub mod service;

pub use service::SessionService;

//! Durable client-side storage
//!
//! The bearer token is the only state persisted between runs.

pub mod token_file;

//! Bearer token access for the API client
//!
//! The client reads the token per request rather than caching it, so a
//! login or logout in another part of the app takes effect on the very next
//! request without any invalidation protocol.

use std::sync::Arc;

use async_trait::async_trait;
use brick_core::TokenStore;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// Returns `None` when no session exists; the client then sends the request
/// unauthenticated, which is what the public auth endpoints need.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Token provider reading through the durable [`TokenStore`]
pub struct StoreTokenProvider {
    store: Arc<dyn TokenStore>,
}

impl StoreTokenProvider {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for StoreTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        self.store
            .load()
            .await
            .map_err(|e| ApiError::Config(format!("Failed to read token store: {e}")))
    }
}

/// Fixed-token provider for tests and one-off tooling
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.clone())
    }
}

//! Port interfaces for session management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use brick_domain::{LoginRequest, RegisterRequest, Result, TokenResponse, User};

/// Durable storage for the bearer token
///
/// The token is the only client-side persisted state. Written by
/// login/logout, read at startup; there is never more than one writer.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    async fn load(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous value
    async fn save(&self, token: &str) -> Result<()>;

    /// Remove the persisted token
    async fn clear(&self) -> Result<()>;
}

/// Authentication endpoints of the backend
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse>;

    /// `GET /auth/me` with the currently stored token
    async fn me(&self) -> Result<User>;
}

/// Outbound user-facing signals (toasts in the original UI)
///
/// Injected explicitly into every service that surfaces feedback, so each
/// page's dependency on user messaging is visible in its constructor
/// instead of reaching into ambient context.
pub trait UiSignal: Send + Sync {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

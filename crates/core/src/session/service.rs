//! Session service - authentication state for the lifetime of the app

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use brick_domain::{BrickError, LoginRequest, RegisterRequest, Result, Session, User};
use tracing::{debug, info, warn};

use super::ports::{AuthGateway, TokenStore, UiSignal};

/// Tracks the current user and bearer token
///
/// The in-memory session mirrors the durable token store: login writes
/// both, logout clears both, and [`bootstrap`](SessionService::bootstrap)
/// reconciles them at startup via an identity check.
pub struct SessionService {
    store: Arc<dyn TokenStore>,
    auth: Arc<dyn AuthGateway>,
    signals: Arc<dyn UiSignal>,
    state: RwLock<Session>,
    loading: AtomicBool,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn TokenStore>,
        auth: Arc<dyn AuthGateway>,
        signals: Arc<dyn UiSignal>,
    ) -> Self {
        Self {
            store,
            auth,
            signals,
            state: RwLock::new(Session::anonymous()),
            loading: AtomicBool::new(true),
        }
    }

    /// Resolve identity at startup
    ///
    /// If a token exists in durable storage, issues the `/auth/me` identity
    /// check. Any failure silently demotes to an anonymous session: the
    /// token is cleared and no error reaches the user. This is the only
    /// suspension point before the authenticated/unauthenticated branch of
    /// the UI may render; [`is_loading`](Self::is_loading) stays true until
    /// it resolves.
    pub async fn bootstrap(&self) {
        let stored = match self.store.load().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read token store, starting anonymous");
                None
            }
        };

        let Some(token) = stored else {
            debug!("No persisted token, starting anonymous");
            self.loading.store(false, Ordering::Release);
            return;
        };

        // Token must be visible to the API client before the identity check
        self.set_state(Session { user: None, token: Some(token.clone()) });

        match self.auth.me().await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "Session restored");
                self.set_state(Session { user: Some(user), token: Some(token) });
            }
            Err(err) => {
                // Silent demotion: stale or invalid token, never surfaced
                debug!(error = %err, "Identity check failed, demoting to anonymous");
                if let Err(err) = self.store.clear().await {
                    warn!(error = %err, "Failed to clear stale token");
                }
                self.set_state(Session::anonymous());
            }
        }

        self.loading.store(false, Ordering::Release);
    }

    /// Establish a session from an already-obtained token and user
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted; the in-memory
    /// session is not established in that case.
    pub async fn login(&self, token: &str, user: User) -> Result<()> {
        if let Err(err) = self.store.save(token).await {
            self.signals.error("Login failed. Please try again.");
            return Err(err);
        }

        info!(user_id = %user.id, role = %user.role, "Logged in");
        self.set_state(Session { user: Some(user), token: Some(token.to_string()) });
        self.signals.success("Welcome to BRICK!");
        Ok(())
    }

    /// Authenticate with credentials via `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Surfaces the server-provided detail message when present, otherwise
    /// a generic failure message, and returns the underlying error.
    pub async fn login_with_credentials(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        let response = match self.auth.login(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.signals.error(&surface_message(&err, "Login failed. Please try again."));
                return Err(err);
            }
        };

        let user = response.user.clone();
        self.login(&response.access_token, response.user).await?;
        Ok(user)
    }

    /// Create an account via `POST /auth/register`
    ///
    /// New accounts default to the `user` role server-side.
    ///
    /// # Errors
    ///
    /// Same surfacing rules as [`login_with_credentials`](Self::login_with_credentials).
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let response = match self.auth.register(request).await {
            Ok(response) => response,
            Err(err) => {
                self.signals.error(&surface_message(&err, "Registration failed. Please try again."));
                return Err(err);
            }
        };

        let user = response.user.clone();
        self.login(&response.access_token, response.user).await?;
        Ok(user)
    }

    /// End the session: clear durable storage and in-memory state
    pub async fn logout(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "Failed to clear token store on logout");
        }
        self.set_state(Session::anonymous());
        info!("Logged out");
        self.signals.info("Logged out successfully");
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// True until [`bootstrap`](Self::bootstrap) has resolved
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    fn set_state(&self, session: Session) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = session;
    }
}

/// Pick the user-visible message for a failed auth call
///
/// Auth and validation errors carry the server's `detail` text; anything
/// else falls back to the caller's generic message.
fn surface_message(err: &BrickError, fallback: &str) -> String {
    match err {
        BrickError::Auth(detail) | BrickError::InvalidInput(detail) => detail.clone(),
        _ => fallback.to_string(),
    }
}

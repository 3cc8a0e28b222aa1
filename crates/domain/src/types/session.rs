//! In-memory authentication state

use serde::{Deserialize, Serialize};

use super::user::User;

/// Current authentication state
///
/// Created on login/register, destroyed on logout or a failed identity
/// check. The token is additionally persisted to durable storage so a
/// session survives restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Anonymous session with no token and no user
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// True when a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

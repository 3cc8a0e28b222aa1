//! User account types and authentication payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role assigned server-side
///
/// Roles are immutable from the client's perspective and gate which pages
/// are reachable. Modeled as a closed enum so route checks cannot drift on
/// string typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual client
    User,
    Caseworker,
    AgencyStaff,
    CleanupCrew,
    LegalAid,
}

impl Role {
    /// Stable wire name, matching the API's role strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Caseworker => "caseworker",
            Role::AgencyStaff => "agency_staff",
            Role::CleanupCrew => "cleanup_crew",
            Role::LegalAid => "legal_aid",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated account as returned by `/auth/me` and login/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub is_veteran: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_veteran: Option<bool>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of both auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

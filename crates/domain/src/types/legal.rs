//! Legal aid types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable legal form with filing instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalForm {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub form_url: Option<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

/// An open legal matter tracked for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalCase {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub next_hearing: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

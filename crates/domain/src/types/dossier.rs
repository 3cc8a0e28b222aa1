//! Dossier types
//!
//! The dossier is the categorized record of a client's disclosed
//! circumstances, built incrementally from chat, forms, and caseworker
//! input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One categorized dossier entry
///
/// Every item belongs to exactly one category (housing, legal, health,
/// employment, benefits). Source provenance is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /dossier`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierItemCreate {
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "manual".to_string()
}

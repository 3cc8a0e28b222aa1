//! Cleanup sweep types
//!
//! A sweep is a scheduled cleanup/relocation operation posted by cleanup
//! crew staff; affected clients learn about it through notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupSweep {
    pub id: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub scheduled_date: DateTime<Utc>,
    pub area_description: String,
    pub advance_notice_days: u32,
    pub posted_by: String,
    pub contact_info: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /cleanup/sweeps`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupSweepCreate {
    pub location: String,
    pub coordinates: Coordinates,
    /// ISO 8601 date string, passed through as entered
    pub scheduled_date: String,
    pub area_description: String,
    pub advance_notice_days: u32,
    pub contact_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

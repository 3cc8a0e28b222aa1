//! Caseworker and agency reporting types
//!
//! All percentages here are computed server-side; the client renders them
//! as-is to avoid drift between independent recomputations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// HUD compliance report from `GET /caseworker/hud-report`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudReport {
    pub report_date: DateTime<Utc>,
    pub reporting_period: String,
    pub organization: String,
    pub generated_by: String,

    // Point-in-time count
    pub total_clients: u32,
    pub veteran_clients: u32,
    pub veteran_percentage: f64,

    // Engagement & service utilization
    pub active_users_30_days: u32,
    pub engagement_rate: f64,
    pub users_with_case_files: u32,
    pub case_file_completion_rate: f64,

    // Service delivery
    pub workbook_tasks_completed: u32,
    pub documents_stored: u32,
    pub flashcard_completion_rate: f64,

    // Case notes by service area
    pub case_notes_by_category: HashMap<String, u32>,
    pub users_with_housing_information: u32,

    pub resources_available: u32,
    #[serde(default)]
    pub platform_features: Vec<String>,

    pub data_quality: HudDataQuality,
}

/// Annual Performance Report data-quality block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudDataQuality {
    pub complete_profiles: u32,
    pub incomplete_profiles: u32,
    pub data_completeness_percentage: f64,
}

/// Response of `GET /agency/clients/unified`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedClientList {
    pub total_clients: u32,
    pub clients: Vec<UnifiedClient>,
    #[serde(default)]
    pub data_sharing_enabled: bool,
    #[serde(default)]
    pub organization: Option<String>,
}

/// One client row in the unified cross-agency view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedClient {
    pub client_info: User,
    pub engagement: ClientEngagement,
    pub inter_agency_data: InterAgencyData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEngagement {
    pub dossier_entries: u32,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    /// Rendered as "completed/total", e.g. "3/12"
    pub workbook_completion: String,
    pub documents_uploaded: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterAgencyData {
    #[serde(default)]
    pub agencies_served_by: Vec<String>,
    pub caseworker_notes_count: u32,
    pub last_known_location: String,
}

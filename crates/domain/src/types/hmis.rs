//! HMIS intake and export types
//!
//! Demographic fields use HUD data-quality codes (1, 2, 8, 9, 99) rather
//! than free text; the backend validates them against the HUD FY standards.

use serde::{Deserialize, Serialize};

/// Body of `POST /hmis/client-profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmisClientProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    pub name_data_quality: u8,
    pub dob_data_quality: u8,
    /// Multi-select HUD race codes
    pub race: Vec<u8>,
    pub ethnicity: u8,
    /// Multi-select HUD gender codes
    pub gender: Vec<u8>,
    pub sex_at_birth: u8,
    pub veteran_status: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `POST /hmis/enrollments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmisEnrollment {
    pub prior_living_situation: u8,
    pub length_of_stay: u8,
    pub times_homeless_past_3_years: u8,
    pub months_homeless_past_3_years: u8,
}

/// Wire response of `GET /hmis/export/csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmisExportPayload {
    /// Base64-encoded archive bytes
    pub file_data: String,
    pub filename: String,
}

/// Decoded export handed to the caller for download handling
#[derive(Debug, Clone)]
pub struct HmisArchive {
    pub filename: String,
    pub bytes: Vec<u8>,
}

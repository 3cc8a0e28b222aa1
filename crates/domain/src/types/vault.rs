//! Document vault types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored document metadata
///
/// Known document types: dd214, ssn, id, birth_cert, medical, other. The
/// file payload itself is only carried at upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultDocument {
    pub id: String,
    pub document_type: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /vault/upload`
///
/// `file_data` is the base64-encoded file content; encoding happens in the
/// infra layer before the request is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub document_type: String,
    pub file_name: String,
    pub file_data: String,
}

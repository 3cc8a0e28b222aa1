//! AI caseworker chat exchange types
//!
//! The assistant itself is opaque to the client; only the request/response
//! shapes are modeled.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    /// True when the exchange added entries to the client's dossier
    #[serde(default)]
    pub dossier_updated: bool,
}

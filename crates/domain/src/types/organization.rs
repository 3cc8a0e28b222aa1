//! Partner organization directory types
//!
//! The directory is static data shipped with the client (an embedded JSON
//! file in infra), not fetched from the API. Only outbound messages to an
//! organization touch the network.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub services: Vec<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub website: String,
    /// Theming hint consumed by the UI shell
    pub color: String,
    /// Icon hint consumed by the UI shell
    pub icon: String,
    #[serde(default)]
    pub applications: Vec<String>,
}

/// Body of `POST /directory/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryMessage {
    pub organization_id: String,
    pub organization_name: String,
    pub message: String,
}

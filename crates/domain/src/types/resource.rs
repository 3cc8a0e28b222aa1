//! Resource map types

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a resource pin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A mapped service location (shelter, food, medical, legal, employment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub hours: Option<String>,
    pub services: Vec<String>,
    /// Live capacity indicator: available, full, or closed
    #[serde(default)]
    pub live_status: Option<String>,
}

//! Workbook task and generated workbook types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single gamified task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookTask {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub task_type: String,
    #[serde(default)]
    pub difficulty: u8,
    pub points: u32,
    pub completed: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Aggregate stats from `GET /workbook/stats`
///
/// `level` is authoritative here; the client only re-derives it for display
/// continuity when stats have not loaded yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkbookStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub total_points: u32,
    pub level: u32,
}

/// A generated workbook of lessons, exercises and action items
///
/// `progress` is a derived percentage recomputed by the backend after each
/// mutation; the client renders it as provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub lessons: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    #[serde(default)]
    pub completed_exercises: Vec<String>,
    #[serde(default)]
    pub completed_actions: Vec<String>,
}

/// Body of `PATCH /workbooks/{id}/progress`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookProgressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_lessons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_exercises: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_actions: Option<Vec<String>>,
}

//! Project model

use serde::{Deserialize, Serialize};

/// A named grouping of processing jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-status job counts, as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_counts: Option<serde_json::Value>,
}

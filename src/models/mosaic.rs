//! Mosaic and image models

use serde::{Deserialize, Serialize};

/// A named collection of georeferenced raster images.
///
/// Create responses may carry only the assigned `id`; every other field
/// tolerates absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mosaic {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Ordered tag list, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Total size of the member images.
    #[serde(default)]
    pub size_in_bytes: u64,
    /// Geographic extent in well-known-text form, when the service
    /// includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<String>,
}

/// A single raster file belonging to a mosaic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Server-assigned identifier.
    pub id: String,
    /// Original upload filename.
    #[serde(default)]
    pub filename: String,
    /// Where the raster content is served from.
    #[serde(default)]
    pub image_url: String,
    /// Geographic extent in well-known-text form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<String>,
}

/// Aggregate outcome of a batch upload.
///
/// `total == successful + failed` always holds, and `failed_files` lists
/// exactly the failed paths in the order they were processed.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    /// Number of files attempted.
    pub total: usize,
    /// Files accepted by the service.
    pub successful: usize,
    /// Files that failed validation, reading, or the remote call.
    pub failed: usize,
    /// The failed paths, in input order.
    pub failed_files: Vec<String>,
}

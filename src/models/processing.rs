//! Processing job models and the job-creation payload

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a processing job.
///
/// The service moves jobs `PENDING → RUNNING → {OK, FAILED}`; the client
/// only observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Accepted, not yet running.
    #[default]
    Pending,
    /// In progress.
    Running,
    /// Finished successfully; results are downloadable.
    Ok,
    /// Finished with errors; `messages` carries the reasons.
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Running => write!(f, "RUNNING"),
            Self::Ok => write!(f, "OK"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// A geoprocessing job as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processing {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: Status,
    /// Progress, 0-100.
    #[serde(default)]
    pub percent_completed: f64,
    /// Failure details, present when the job is `FAILED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<serde_json::Value>,
    /// Billing information, present in project listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<serde_json::Value>,
}

/// An optional workflow step, toggled on or off per job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Block name, one of the template's optional block names.
    pub name: String,
    /// Whether the step runs for this job.
    pub enabled: bool,
}

/// A workflow template ("work definition") offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDefinition {
    /// Template identifier, passed to job creation as `wdId`.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Human-readable summary.
    #[serde(default)]
    pub description: String,
    /// All steps of the template.
    #[serde(default)]
    pub blocks: Vec<WdBlock>,
}

impl WorkDefinition {
    /// Names of the steps a job may toggle; these are the valid entries for
    /// [`ProcessingRequest::blocks`].
    #[must_use]
    pub fn optional_blocks(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|block| block.optional)
            .map(|block| block.name.as_str())
            .collect()
    }
}

/// One step of a workflow template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WdBlock {
    /// Step name.
    pub name: String,
    /// Whether the step may be toggled per job.
    #[serde(default)]
    pub optional: bool,
}

/// The imagery a job runs against: exactly one image or one mosaic.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ImagerySource {
    /// A single image, referenced by id.
    Image {
        /// The one-element image id list the service expects.
        #[serde(rename = "imageIds")]
        image_ids: Vec<String>,
    },
    /// A whole mosaic, referenced by id.
    Mosaic {
        /// The mosaic id.
        #[serde(rename = "mosaicId")]
        mosaic_id: String,
    },
}

impl ImagerySource {
    /// Run against one image.
    #[must_use]
    pub fn image(id: impl Into<String>) -> Self {
        Self::Image {
            image_ids: vec![id.into()],
        }
    }

    /// Run against a mosaic.
    #[must_use]
    pub fn mosaic(id: impl Into<String>) -> Self {
        Self::Mosaic {
            mosaic_id: id.into(),
        }
    }
}

/// Job-creation payload.
///
/// The service treats key presence as significant: `projectId` and `blocks`
/// are omitted from the document entirely when unset, never sent as null or
/// empty placeholders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRequest {
    /// Job name.
    pub name: String,
    /// Target project; the service files the job under its default project
    /// when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Workflow template id.
    pub wd_id: String,
    /// Source imagery wrapper.
    pub params: JobParams,
    /// Optional blocks to enable; omitted when none were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    /// Area of interest.
    pub geometry: geojson::Geometry,
}

impl ProcessingRequest {
    /// Payload with the required fields; `project_id` and `blocks` start
    /// unset.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        wd_id: impl Into<String>,
        source: ImagerySource,
        geometry: geojson::Geometry,
    ) -> Self {
        Self {
            name: name.into(),
            project_id: None,
            wd_id: wd_id.into(),
            params: JobParams {
                source_params: SourceParams {
                    my_imagery: source,
                },
            },
            blocks: None,
            geometry,
        }
    }
}

/// `params` wrapper of the creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
    /// Source imagery wrapper.
    pub source_params: SourceParams,
}

/// `sourceParams` wrapper of the creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceParams {
    /// The imagery the job runs against.
    pub my_imagery: ImagerySource,
}

//! Output formatting for human and JSON modes
//!
//! Every command renders its result through one of the structs here, either
//! as field-per-line console text or machine-parseable JSON.

use serde::Serialize;

use crate::models::{Image, Mosaic, Processing, Project, Status, UploadReport, WorkDefinition};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Listing of mosaics
#[derive(Debug, Serialize)]
pub struct MosaicList {
    /// The mosaics returned by the service
    pub mosaics: Vec<Mosaic>,
}

impl MosaicList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for mosaic in &self.mosaics {
                    println!("id: {}", mosaic.id);
                    println!("name: {}", mosaic.name);
                    println!("tags: {:?}", mosaic.tags);
                    println!("sizeInBytes: {}", mosaic.size_in_bytes);
                    println!();
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Listing of the images in a mosaic
#[derive(Debug, Serialize)]
pub struct ImageList {
    /// The images returned by the service
    pub images: Vec<Image>,
}

impl ImageList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for image in &self.images {
                    println!("id: {}", image.id);
                    println!("filename: {}", image.filename);
                    println!("image_url: {}", image.image_url);
                    println!();
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Listing of the available workflow templates
#[derive(Debug, Serialize)]
pub struct ModelList {
    /// The templates returned by the service
    pub models: Vec<WorkDefinition>,
}

impl ModelList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for model in &self.models {
                    println!("id: {}", model.id);
                    println!("name: {}", model.name);
                    println!("description: {}", model.description);
                    println!("options: {:?}", model.optional_blocks());
                    println!();
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Current state of one processing job
#[derive(Debug, Serialize)]
pub struct ProcessingStatus {
    /// The job snapshot
    pub processing: Processing,
}

impl ProcessingStatus {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let processing = &self.processing;
                println!("id: {}", processing.id);
                println!("name: {}", processing.name);
                println!("status: {}", processing.status);
                println!("percentCompleted: {}", processing.percent_completed);
                if processing.status == Status::Failed {
                    if let Some(messages) = &processing.messages {
                        println!("error: {messages}");
                    }
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Listing of projects
#[derive(Debug, Serialize)]
pub struct ProjectList {
    /// The projects returned by the service
    pub projects: Vec<Project>,
}

impl ProjectList {
    /// Render the result based on output mode; empty fields are skipped
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for project in &self.projects {
                    println!("id: {}", project.id);
                    println!("name: {}", project.name);
                    if let Some(description) =
                        project.description.as_deref().filter(|d| !d.is_empty())
                    {
                        println!("description: {description}");
                    }
                    if let Some(counts) = &project.processing_counts {
                        println!("processingCounts: {counts}");
                    }
                    println!();
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Listing of the processings grouped under a project
#[derive(Debug, Serialize)]
pub struct ProjectProcessings {
    /// The jobs returned by the service
    pub processings: Vec<Processing>,
}

impl ProjectProcessings {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for processing in &self.processings {
                    println!("id: {}", processing.id);
                    println!("name: {}", processing.name);

                    let cost = processing
                        .cost
                        .as_ref()
                        .map_or_else(String::new, ToString::to_string);
                    println!(
                        "status: {} | percentCompleted: {} | cost: {cost}",
                        processing.status, processing.percent_completed
                    );
                    if processing.status == Status::Failed {
                        if let Some(messages) = &processing.messages {
                            println!("error: {messages}");
                        }
                    }
                    println!();
                }
            }
            OutputMode::Json => render_json(self),
        }
    }
}

/// Aggregate outcome of a batch upload
#[derive(Debug, Serialize)]
pub struct UploadSummary {
    /// The per-batch accounting
    pub report: UploadReport,
}

impl UploadSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let report = &self.report;
                println!("total: {}", report.total);
                println!("successful: {}", report.successful);
                println!("failed: {}", report.failed);
                println!("failed_files: {:?}", report.failed_files);
            }
            OutputMode::Json => render_json(&self.report),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

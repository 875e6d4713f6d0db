//! Data models for the platform's remote resources
//!
//! Core abstractions:
//! - Mosaic / Image: collections of georeferenced rasters and their members
//! - Processing: a geoprocessing job over one image or mosaic
//! - WorkDefinition: a workflow template with optional blocks
//! - Project: a grouping of processing jobs
//!
//! Every entity is created by the remote service; instances here are thin
//! snapshots of what the service returned, never authoritative copies.

mod mosaic;
mod processing;
mod project;

pub use mosaic::{Image, Mosaic, UploadReport};
pub use processing::{
    Block, ImagerySource, Processing, ProcessingRequest, Status, WdBlock, WorkDefinition,
};
pub use project::Project;

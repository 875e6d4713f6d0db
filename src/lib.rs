//! rasterflow - a CLI client for a remote raster-imagery processing platform
//!
//! This library provides the pieces behind the `rasterflow` binary: the HTTP
//! transport, the mosaic/processing/project resource operations, geometry
//! resolution for areas of interest, and console output rendering.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod output;
pub mod resources;

pub use error::{Error, Result};

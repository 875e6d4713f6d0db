//! Processing command handlers
//!
//! `start` carries the orchestration for job submission: resolve the area of
//! interest (an explicit GeoJSON file, or the footprint of the referenced
//! image/mosaic), shape the creation payload, and submit it.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use rasterflow::api::ApiClient;
use rasterflow::geometry;
use rasterflow::models::{Block, ImagerySource, ProcessingRequest};
use rasterflow::output::{ModelList, OutputMode, ProcessingStatus};
use rasterflow::resources::{Mosaics, Processings};

use crate::cli::app::ProcessingCommand;

/// Dispatch one processing operation.
pub fn processing(
    api: &ApiClient,
    command: ProcessingCommand,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let processings = Processings::new(api);

    match command {
        ProcessingCommand::Models => {
            if let Some(models) = processings.get_wds()? {
                ModelList { models }.render(mode);
            }
            Ok(())
        }
        ProcessingCommand::Status { processing_id } => {
            if let Some(current) = processings.get(&processing_id)? {
                ProcessingStatus {
                    processing: current,
                }
                .render(mode);
            }
            Ok(())
        }
        ProcessingCommand::Download {
            processing_id,
            path,
        } => download(&processings, &path, &processing_id),
        ProcessingCommand::Start {
            name,
            image_id,
            mosaic_id,
            wd_id,
            options,
            geometry,
            project_id,
        } => start(
            api,
            &processings,
            StartArgs {
                name,
                image_id,
                mosaic_id,
                wd_id,
                options,
                geometry,
                project_id,
            },
        ),
    }
}

/// Flag values of `processing start`.
struct StartArgs {
    name: String,
    image_id: Option<String>,
    mosaic_id: Option<String>,
    wd_id: String,
    options: Option<String>,
    geometry: Option<PathBuf>,
    project_id: Option<String>,
}

/// The imagery a new job is pointed at.
enum Source {
    Image(String),
    Mosaic(String),
}

fn start(
    api: &ApiClient,
    processings: &Processings<'_>,
    args: StartArgs,
) -> anyhow::Result<()> {
    let source = match (args.image_id, args.mosaic_id) {
        (Some(id), None) => Source::Image(id),
        (None, Some(id)) => Source::Mosaic(id),
        _ => bail!("either --image-id or --mosaic-id is required"),
    };

    let aoi = match &args.geometry {
        Some(path) => read_aoi_file(path)?,
        None => {
            // Derive the AOI from the source's footprint; a source that
            // cannot be fetched means no job is submitted
            let mosaics = Mosaics::new(api);
            let footprint = match &source {
                Source::Image(id) => {
                    let Some(image) = mosaics.get_image(id)? else {
                        return Ok(());
                    };
                    image.footprint
                }
                Source::Mosaic(id) => {
                    let Some(mosaic) = mosaics.get(id)? else {
                        return Ok(());
                    };
                    mosaic.footprint
                }
            };
            let footprint = footprint.context("the source record has no footprint")?;
            geometry::from_wkt(&footprint)?
        }
    };

    let blocks = args.options.as_deref().filter(|o| !o.is_empty()).map(|o| {
        o.split(", ")
            .map(|name| Block {
                name: name.to_string(),
                enabled: true,
            })
            .collect::<Vec<_>>()
    });

    let imagery = match source {
        Source::Image(id) => ImagerySource::image(id),
        Source::Mosaic(id) => ImagerySource::mosaic(id),
    };
    let mut request = ProcessingRequest::new(args.name, args.wd_id, imagery, aoi);
    request.project_id = args.project_id;
    request.blocks = blocks;

    processings.start(&request)?;
    Ok(())
}

fn read_aoi_file(path: &Path) -> anyhow::Result<geojson::Geometry> {
    if !path.exists() {
        bail!("no such file {}", path.display());
    }
    if path.is_dir() || path.extension().is_none() {
        bail!("a directory path was passed, only file paths are supported");
    }
    geometry::from_feature_file(path)
}

fn download(
    processings: &Processings<'_>,
    path: &Path,
    processing_id: &str,
) -> anyhow::Result<()> {
    if path.is_dir() || path.extension().is_none() {
        bail!("a directory path was passed, only file paths are supported");
    }
    processings.download_result(path, processing_id)?;
    Ok(())
}

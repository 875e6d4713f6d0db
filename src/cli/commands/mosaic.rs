//! Mosaic command handlers

use std::path::Path;

use anyhow::bail;

use rasterflow::api::ApiClient;
use rasterflow::output::{ImageList, MosaicList, OutputMode, UploadSummary};
use rasterflow::resources::Mosaics;

use crate::cli::app::MosaicCommand;

/// Dispatch one mosaic operation.
pub fn mosaic(api: &ApiClient, command: MosaicCommand, mode: OutputMode) -> anyhow::Result<()> {
    let mosaics = Mosaics::new(api);

    match command {
        MosaicCommand::Create { name, tags } => {
            mosaics.create(&name, tags.as_deref())?;
            Ok(())
        }
        MosaicCommand::Upload { path, mosaic_id } => upload(&mosaics, &path, &mosaic_id, mode),
        MosaicCommand::Mosaics => {
            if let Some(list) = mosaics.get_mosaics()? {
                MosaicList { mosaics: list }.render(mode);
            }
            Ok(())
        }
        MosaicCommand::Images { mosaic_id } => {
            if let Some(list) = mosaics.get_images(&mosaic_id)? {
                ImageList { images: list }.render(mode);
            }
            Ok(())
        }
    }
}

/// Upload a single file directly, or batch-upload every raster found in a
/// directory.
fn upload(
    mosaics: &Mosaics<'_>,
    path: &Path,
    mosaic_id: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("no such file or directory {}", path.display());
    }

    if path.is_file() {
        mosaics.upload_image(path, mosaic_id)?;
        return Ok(());
    }

    let Some(files) = Mosaics::find_tiff_files(path) else {
        return Ok(());
    };
    let report = mosaics.upload_images(&files, mosaic_id)?;
    UploadSummary { report }.render(mode);
    Ok(())
}

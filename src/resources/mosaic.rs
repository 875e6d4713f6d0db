//! Mosaic operations: reads, creation, and the batch image-upload workflow

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use reqwest::blocking::multipart;
use walkdir::WalkDir;

use super::response::{self, ListOutcome};
use crate::api::{ApiClient, Body};
use crate::error::Result;
use crate::models::{Image, Mosaic, UploadReport};

/// Extensions accepted for raster uploads, lowercase.
const RASTER_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Mosaic operations bound to a shared transport.
#[derive(Debug)]
pub struct Mosaics<'a> {
    api: &'a ApiClient,
}

impl<'a> Mosaics<'a> {
    /// Bind to a transport.
    #[must_use]
    pub const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch one mosaic.
    pub fn get(&self, mosaic_id: &str) -> Result<Option<Mosaic>> {
        let response = self.api.get(&format!("/rasters/mosaic/{mosaic_id}"))?;
        let mosaic = response::read_json(response, "getting mosaic");
        if mosaic.is_some() {
            info!("Mosaic successfully received");
        }
        Ok(mosaic)
    }

    /// List all mosaics. An empty listing is reported and yields no result.
    pub fn get_mosaics(&self) -> Result<Option<Vec<Mosaic>>> {
        let response = self.api.get("/rasters/mosaic")?;
        match response::read_list(response, "getting mosaics") {
            ListOutcome::Found(mosaics) => {
                info!("Mosaics successfully received");
                Ok(Some(mosaics))
            }
            ListOutcome::Nothing => {
                error!("There are no mosaics");
                Ok(None)
            }
            ListOutcome::Rejected => Ok(None),
        }
    }

    /// Fetch one image record.
    pub fn get_image(&self, image_id: &str) -> Result<Option<Image>> {
        let response = self.api.get(&format!("/rasters/image/{image_id}"))?;
        let image = response::read_json(response, "getting image");
        if image.is_some() {
            info!("Image successfully received");
        }
        Ok(image)
    }

    /// List the images of a mosaic. An empty listing is reported and yields
    /// no result.
    pub fn get_images(&self, mosaic_id: &str) -> Result<Option<Vec<Image>>> {
        let response = self
            .api
            .get(&format!("/rasters/mosaic/{mosaic_id}/image"))?;
        match response::read_list(response, "getting images") {
            ListOutcome::Found(images) => {
                info!("Images successfully received");
                Ok(Some(images))
            }
            ListOutcome::Nothing => {
                error!("No images in mosaic");
                Ok(None)
            }
            ListOutcome::Rejected => Ok(None),
        }
    }

    /// Create a mosaic. `tags` is a `", "`-separated list.
    pub fn create(&self, name: &str, tags: Option<&str>) -> Result<Option<Mosaic>> {
        info!("Creating mosaic...");
        let tags = tags.filter(|t| !t.is_empty()).map_or_else(Vec::new, split_list);

        let body = serde_json::json!({ "name": name, "tags": tags });
        let response = self.api.post("/rasters/mosaic", Body::Json(body))?;

        let mosaic: Option<Mosaic> = response::read_json(response, "creating mosaic");
        if let Some(created) = &mosaic {
            info!("Successfully created mosaic {}", created.id);
        }
        Ok(mosaic)
    }

    /// Upload one raster file into a mosaic.
    ///
    /// Local checks run in order - mosaic id present, file exists, extension
    /// accepted - and each failure short-circuits with no network call.
    /// Read failures are reported as an upload failure, never propagated.
    pub fn upload_image(&self, path: &Path, mosaic_id: &str) -> Result<bool> {
        if mosaic_id.is_empty() {
            error!("Mosaic id is required");
            return Ok(false);
        }
        if !path.exists() {
            error!("No such file {}", path.display());
            return Ok(false);
        }
        if !has_raster_extension(path) {
            error!(
                "Invalid file format {}: only .tif and .tiff files are supported",
                path.display()
            );
            return Ok(false);
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!("Failed to read file {}: {err}", path.display());
                return Ok(false);
            }
        };
        let file_name = path
            .file_name()
            .map_or_else(|| "image.tif".to_string(), |name| name.to_string_lossy().into_owned());
        let part = match multipart::Part::reader(file)
            .file_name(file_name)
            .mime_str("image/tiff")
        {
            Ok(part) => part,
            Err(err) => {
                error!("Failed to prepare upload for {}: {err}", path.display());
                return Ok(false);
            }
        };
        let form = multipart::Form::new().part("file", part);

        info!("Uploading file...");
        let response = self
            .api
            .post(&format!("/rasters/mosaic/{mosaic_id}/image"), Body::Multipart(form))?;

        if response::ok(response, "uploading image") {
            info!("Successfully uploaded image");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Upload a batch of files, strictly in order, isolating each failure.
    pub fn upload_images(&self, paths: &[PathBuf], mosaic_id: &str) -> Result<UploadReport> {
        let mut report = UploadReport {
            total: paths.len(),
            successful: 0,
            failed: 0,
            failed_files: Vec::new(),
        };

        for path in paths {
            if self.upload_image(path, mosaic_id)? {
                report.successful += 1;
            } else {
                report.failed += 1;
                report.failed_files.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// Discover raster files directly under `directory` (non-recursive),
    /// sorted and de-duplicated.
    ///
    /// A missing directory and an empty one both end the calling workflow:
    /// the former is an error, the latter a warning.
    #[must_use]
    pub fn find_tiff_files(directory: &Path) -> Option<Vec<PathBuf>> {
        if !directory.is_dir() {
            error!("No such directory {}", directory.display());
            return None;
        }

        let mut found = BTreeSet::new();
        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if entry.file_type().is_file() && has_raster_extension(entry.path()) {
                found.insert(entry.into_path());
            }
        }

        if found.is_empty() {
            warn!("No images in directory {}", directory.display());
            return None;
        }
        info!("Found {} images", found.len());
        Some(found.into_iter().collect())
    }
}

fn has_raster_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RASTER_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn split_list(value: &str) -> Vec<String> {
    value.split(", ").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use tempfile::TempDir;

    fn client(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url(), "token").unwrap()
    }

    #[test]
    fn find_tiff_files_is_sorted_and_case_insensitive() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.tif"), b"x").unwrap();
        std::fs::write(temp.path().join("a.TIFF"), b"x").unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"x").unwrap();

        let found = Mosaics::find_tiff_files(temp.path()).unwrap();
        assert_eq!(
            found,
            vec![temp.path().join("a.TIFF"), temp.path().join("b.tif")]
        );
    }

    #[test]
    fn find_tiff_files_ignores_nested_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("nested/deep.tif"), b"x").unwrap();
        std::fs::write(temp.path().join("top.tif"), b"x").unwrap();

        let found = Mosaics::find_tiff_files(temp.path()).unwrap();
        assert_eq!(found, vec![temp.path().join("top.tif")]);
    }

    #[test]
    fn find_tiff_files_distinguishes_missing_from_empty() {
        let temp = TempDir::new().unwrap();
        assert!(Mosaics::find_tiff_files(&temp.path().join("gone")).is_none());
        assert!(Mosaics::find_tiff_files(temp.path()).is_none());
    }

    #[test]
    fn create_sends_name_and_split_tags() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rasters/mosaic")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "test",
                "tags": ["a", "b"]
            })))
            .with_status(200)
            .with_body(r#"{"id": "m1"}"#)
            .create();

        let api = client(&server);
        let mosaic = Mosaics::new(&api).create("test", Some("a, b")).unwrap();
        assert_eq!(mosaic.unwrap().id, "m1");
    }

    #[test]
    fn create_without_tags_sends_an_empty_list() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rasters/mosaic")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "bare",
                "tags": []
            })))
            .with_status(200)
            .with_body(r#"{"id": "m2"}"#)
            .create();

        let api = client(&server);
        let mosaic = Mosaics::new(&api).create("bare", None).unwrap();
        assert_eq!(mosaic.unwrap().id, "m2");
    }

    #[test]
    fn empty_mosaic_listing_yields_no_result() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rasters/mosaic")
            .with_status(200)
            .with_body("[]")
            .create();

        let api = client(&server);
        assert!(Mosaics::new(&api).get_mosaics().unwrap().is_none());
    }

    #[test]
    fn rejected_mosaic_listing_yields_no_result() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rasters/mosaic")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = client(&server);
        assert!(Mosaics::new(&api).get_mosaics().unwrap().is_none());
    }

    #[test]
    fn upload_image_rejects_wrong_extension_locally() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("photo.png");
        std::fs::write(&path, b"x").unwrap();

        // No mock endpoint: a network call would make the transport fail
        let api = ApiClient::new("http://127.0.0.1:0", "token").unwrap();
        assert!(!Mosaics::new(&api).upload_image(&path, "m1").unwrap());
    }

    #[test]
    fn upload_image_requires_a_mosaic_id() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scene.tif");
        std::fs::write(&path, b"x").unwrap();

        let api = ApiClient::new("http://127.0.0.1:0", "token").unwrap();
        assert!(!Mosaics::new(&api).upload_image(&path, "").unwrap());
    }

    #[test]
    fn batch_upload_isolates_the_failing_file() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rasters/mosaic/m1/image")
            .with_status(200)
            .with_body(r#"{"id": "img"}"#)
            .expect_at_least(2)
            .create();

        let temp = TempDir::new().unwrap();
        let first = temp.path().join("a.tif");
        let missing = temp.path().join("gone.tif");
        let third = temp.path().join("c.tif");
        std::fs::write(&first, b"x").unwrap();
        std::fs::write(&third, b"x").unwrap();

        let api = client(&server);
        let paths = vec![first, missing.clone(), third];
        let report = Mosaics::new(&api).upload_images(&paths, "m1").unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.successful, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failed_files, vec![missing.display().to_string()]);
        assert_eq!(report.total, report.successful + report.failed);
    }

    #[test]
    fn remote_rejection_counts_as_a_failed_upload() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rasters/mosaic/m1/image")
            .with_status(422)
            .with_body("unsupported raster")
            .create();

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.tif");
        std::fs::write(&path, b"x").unwrap();

        let api = client(&server);
        let report = Mosaics::new(&api)
            .upload_images(&[path.clone()], "m1")
            .unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.failed_files, vec![path.display().to_string()]);
    }
}

//! Processing job operations: creation, status, and status-gated download

use std::fs::File;
use std::io;
use std::path::Path;

use log::{error, info, warn};
use reqwest::StatusCode;
use serde::Deserialize;

use super::response;
use crate::api::{ApiClient, Body};
use crate::error::Result;
use crate::models::{Processing, ProcessingRequest, Status, WorkDefinition};

/// Processing operations bound to a shared transport.
#[derive(Debug)]
pub struct Processings<'a> {
    api: &'a ApiClient,
}

/// Shape of `/user/status`; only the template list matters here.
#[derive(Deserialize)]
struct UserStatus {
    #[serde(default)]
    models: Vec<WorkDefinition>,
}

impl<'a> Processings<'a> {
    /// Bind to a transport.
    #[must_use]
    pub const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the current state of a job.
    pub fn get(&self, processing_id: &str) -> Result<Option<Processing>> {
        let response = self.api.get(&format!("/processings/{processing_id}/v2"))?;
        let processing = response::read_json(response, "getting processing");
        if processing.is_some() {
            info!("Processing successfully received");
        }
        Ok(processing)
    }

    /// Submit a job-creation payload.
    ///
    /// Creation failure is logged and never retried.
    pub fn start(&self, request: &ProcessingRequest) -> Result<Option<Processing>> {
        let payload = match serde_json::to_value(request) {
            Ok(payload) => payload,
            Err(err) => {
                error!("Error when creating processing: {err}");
                return Ok(None);
            }
        };

        let response = self.api.post("/processings/v2", Body::Json(payload))?;
        let processing: Option<Processing> = response::read_json(response, "creating processing");
        if let Some(created) = &processing {
            info!("Successfully created processing {}", created.id);
        }
        Ok(processing)
    }

    /// Download the result of a finished job to `destination`.
    ///
    /// This is a single consistency gate, not a polling loop: the current
    /// status is fetched once and anything other than `OK` refuses the
    /// download, leaving re-invocation timing to the caller. The payload is
    /// streamed to disk in bounded chunks; stream-time failures are reported
    /// as a failed download.
    pub fn download_result(&self, destination: &Path, processing_id: &str) -> Result<bool> {
        let Some(processing) = self.get(processing_id)? else {
            return Ok(false);
        };
        if processing.status != Status::Ok {
            warn!(
                "Unable to download results. Processing status is {}",
                processing.status
            );
            return Ok(false);
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                error!("No such directory {}", parent.display());
                return Ok(false);
            }
        }

        let response = self.api.get(&format!("/processings/{processing_id}/result"))?;
        if response.status() != StatusCode::OK {
            error!(
                "Error when getting results: {}",
                response::diagnostic(response)
            );
            return Ok(false);
        }

        let mut reader = response;
        let mut file = match File::create(destination) {
            Ok(file) => file,
            Err(err) => {
                error!("Failed to create {}: {err}", destination.display());
                return Ok(false);
            }
        };
        match io::copy(&mut reader, &mut file) {
            Ok(_) => {
                info!(
                    "Results successfully downloaded to {}",
                    destination.display()
                );
                Ok(true)
            }
            Err(err) => {
                error!("Error when downloading results: {err}");
                Ok(false)
            }
        }
    }

    /// List the workflow templates available to the user.
    pub fn get_wds(&self) -> Result<Option<Vec<WorkDefinition>>> {
        let response = self.api.get("/user/status")?;
        let Some(user) = response::read_json::<UserStatus>(response, "getting user info") else {
            return Ok(None);
        };

        if user.models.is_empty() {
            warn!("No work definitions available");
            return Ok(None);
        }
        info!("Successfully received user info");
        Ok(Some(user.models))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImagerySource;
    use tempfile::TempDir;

    fn client(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url(), "token").unwrap()
    }

    fn status_mock(server: &mut mockito::ServerGuard, status: &str) {
        server
            .mock("GET", "/processings/p1/v2")
            .with_status(200)
            .with_body(format!(
                r#"{{"id": "p1", "name": "job", "status": "{status}", "percentCompleted": 50}}"#
            ))
            .create();
    }

    #[test]
    fn download_is_refused_while_not_finished() {
        let mut server = mockito::Server::new();
        status_mock(&mut server, "RUNNING");

        let api = client(&server);
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("result.zip");

        let processings = Processings::new(&api);
        // A repeat invocation stays refused; there is no polling
        assert!(!processings.download_result(&destination, "p1").unwrap());
        assert!(!processings.download_result(&destination, "p1").unwrap());
        assert!(!destination.exists());
    }

    #[test]
    fn download_is_refused_for_failed_jobs() {
        let mut server = mockito::Server::new();
        status_mock(&mut server, "FAILED");

        let api = client(&server);
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("result.zip");
        assert!(
            !Processings::new(&api)
                .download_result(&destination, "p1")
                .unwrap()
        );
        assert!(!destination.exists());
    }

    #[test]
    fn download_streams_the_result_when_finished() {
        let mut server = mockito::Server::new();
        status_mock(&mut server, "OK");
        server
            .mock("GET", "/processings/p1/result")
            .with_status(200)
            .with_body("raster bytes")
            .create();

        let api = client(&server);
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("result.zip");

        assert!(
            Processings::new(&api)
                .download_result(&destination, "p1")
                .unwrap()
        );
        assert_eq!(std::fs::read(&destination).unwrap(), b"raster bytes");
    }

    #[test]
    fn download_requires_an_existing_parent_directory() {
        let mut server = mockito::Server::new();
        status_mock(&mut server, "OK");

        let api = client(&server);
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("gone").join("result.zip");

        assert!(
            !Processings::new(&api)
                .download_result(&destination, "p1")
                .unwrap()
        );
    }

    #[test]
    fn start_parses_the_created_job() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/processings/v2")
            .with_status(200)
            .with_body(r#"{"id": "p9", "status": "PENDING"}"#)
            .create();

        let api = client(&server);
        let request = ProcessingRequest::new(
            "job",
            "wd1",
            ImagerySource::image("i1"),
            geojson::Geometry::new(geojson::Value::Point(vec![0.0, 0.0])),
        );
        let created = Processings::new(&api).start(&request).unwrap().unwrap();
        assert_eq!(created.id, "p9");
        assert_eq!(created.status, Status::Pending);
    }

    #[test]
    fn start_reports_a_rejection_as_no_result() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/processings/v2")
            .with_status(400)
            .with_body("bad geometry")
            .create();

        let api = client(&server);
        let request = ProcessingRequest::new(
            "job",
            "wd1",
            ImagerySource::mosaic("m1"),
            geojson::Geometry::new(geojson::Value::Point(vec![0.0, 0.0])),
        );
        assert!(Processings::new(&api).start(&request).unwrap().is_none());
    }

    #[test]
    fn get_wds_reads_the_models_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/user/status")
            .with_status(200)
            .with_body(
                r#"{"models": [{"id": "wd1", "name": "t", "description": "", "blocks": []}]}"#,
            )
            .create();

        let api = client(&server);
        let models = Processings::new(&api).get_wds().unwrap().unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "wd1");
    }

    #[test]
    fn get_wds_treats_an_empty_template_list_as_no_result() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/user/status")
            .with_status(200)
            .with_body(r#"{"models": []}"#)
            .create();

        let api = client(&server);
        assert!(Processings::new(&api).get_wds().unwrap().is_none());
    }
}

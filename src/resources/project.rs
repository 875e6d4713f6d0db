//! Project operations

use log::{error, info};

use super::response::{self, ListOutcome};
use crate::api::{ApiClient, Body};
use crate::error::Result;
use crate::models::{Processing, Project};

/// Project operations bound to a shared transport.
#[derive(Debug)]
pub struct Projects<'a> {
    api: &'a ApiClient,
}

impl<'a> Projects<'a> {
    /// Bind to a transport.
    #[must_use]
    pub const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Create a project.
    pub fn create(&self, name: &str, description: Option<&str>) -> Result<Option<Project>> {
        info!("Creating project...");
        let body = serde_json::json!({ "name": name, "description": description });
        let response = self.api.post("/projects", Body::Json(body))?;

        let project: Option<Project> = response::read_json(response, "creating project");
        if let Some(created) = &project {
            info!("Successfully created project {}", created.id);
        }
        Ok(project)
    }

    /// List all projects. Unlike the other listings, an empty project list
    /// is still a result.
    pub fn get_projects(&self) -> Result<Option<Vec<Project>>> {
        let response = self.api.get("/projects")?;
        let projects = response::read_json(response, "getting projects");
        if projects.is_some() {
            info!("Successfully received projects");
        }
        Ok(projects)
    }

    /// List the processings grouped under a project. An empty listing is
    /// reported and yields no result.
    pub fn get_processings(&self, project_id: &str) -> Result<Option<Vec<Processing>>> {
        let response = self.api.get(&format!("/projects/{project_id}/processings"))?;
        match response::read_list(response, "getting project processings") {
            ListOutcome::Found(processings) => {
                info!("Project processings successfully received");
                Ok(Some(processings))
            }
            ListOutcome::Nothing => {
                error!("There are no processings in this project");
                Ok(None)
            }
            ListOutcome::Rejected => Ok(None),
        }
    }
}

//! Project command handlers

use rasterflow::api::ApiClient;
use rasterflow::output::{OutputMode, ProjectList, ProjectProcessings};
use rasterflow::resources::Projects;

use crate::cli::app::ProjectCommand;

/// Dispatch one project operation.
pub fn project(api: &ApiClient, command: ProjectCommand, mode: OutputMode) -> anyhow::Result<()> {
    let projects = Projects::new(api);

    match command {
        ProjectCommand::Create { name, description } => {
            projects.create(&name, description.as_deref())?;
            Ok(())
        }
        ProjectCommand::Projects => {
            if let Some(list) = projects.get_projects()? {
                ProjectList { projects: list }.render(mode);
            }
            Ok(())
        }
        ProjectCommand::Processings { project_id } => {
            if let Some(list) = projects.get_processings(&project_id)? {
                ProjectProcessings { processings: list }.render(mode);
            }
            Ok(())
        }
    }
}

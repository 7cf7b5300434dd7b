//! Deployment step: log in to clasp, then create or clone the remote project.

use tracing::{info, warn};

use crate::app::interaction::Interaction;
use crate::domain::{
    AppError, CLASP_PROJECT_FILENAME, ClaspProject, DEPLOY_ROOT_DIR, InitOptions, ProjectLinks,
    ScriptType,
};
use crate::ports::{DeployTool, Prompter};
use crate::services::ProjectFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// `.clasp.json` was already present.
    AlreadyConfigured { script_id: String },
    /// Login was declined.
    Skipped,
    Created(ProjectLinks),
    Cloned { script_id: String },
}

pub fn configure<P: Prompter, D: DeployTool>(
    project: &ProjectFilesystem,
    interaction: &Interaction<'_, P>,
    deploy: &D,
    options: &InitOptions,
) -> Result<DeployOutcome, AppError> {
    if let Some(content) = project.read_optional_string(CLASP_PROJECT_FILENAME)? {
        let existing =
            ClaspProject::from_json(&content).map_err(|err| AppError::InvalidConfig {
                path: project.path(CLASP_PROJECT_FILENAME),
                details: err.to_string(),
            })?;
        return Ok(DeployOutcome::AlreadyConfigured { script_id: existing.script_id });
    }

    if !deploy.is_logged_in() {
        if !interaction.confirm("clasp is not logged in. Log in now?", true)? {
            return Ok(DeployOutcome::Skipped);
        }
        deploy.login()?;
    }

    let script_id =
        interaction.input("Script ID to clone (leave empty to create a new project)", "")?;
    let script_id = script_id.trim();
    if !script_id.is_empty() {
        info!(script_id, "cloning existing project");
        deploy.clone_project(project.root(), script_id, DEPLOY_ROOT_DIR)?;
        deploy.pull(project.root())?;
        return Ok(DeployOutcome::Cloned { script_id: script_id.to_string() });
    }

    let script_type = match options.script_type {
        Some(script_type) => script_type,
        None => {
            let items: Vec<String> = ScriptType::ALL.iter().map(ToString::to_string).collect();
            let index = interaction.select("Script type", &items, 0)?;
            ScriptType::ALL.get(index).copied().unwrap_or_default()
        }
    };

    info!(%script_type, "creating project");
    let output = deploy.create(project.root(), &options.title, script_type, DEPLOY_ROOT_DIR)?;
    let links = ProjectLinks::scrape(&output);
    if links.is_empty() {
        warn!("no project links found in clasp output");
    }
    Ok(DeployOutcome::Created(links))
}

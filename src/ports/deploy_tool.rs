use std::path::Path;

use crate::domain::{AppError, ScriptType};

/// Port for the Apps Script deployment CLI.
pub trait DeployTool {
    /// Whether stored credentials exist.
    fn is_logged_in(&self) -> bool;

    /// Run the interactive login flow.
    fn login(&self) -> Result<(), AppError>;

    /// Create a new remote project. Returns the tool's text output.
    fn create(
        &self,
        project_dir: &Path,
        title: &str,
        script_type: ScriptType,
        root_dir: &str,
    ) -> Result<String, AppError>;

    /// Clone an existing remote project into the project directory.
    fn clone_project(
        &self,
        project_dir: &Path,
        script_id: &str,
        root_dir: &str,
    ) -> Result<(), AppError>;

    /// Pull remote files into the configured root directory.
    fn pull(&self, project_dir: &Path) -> Result<(), AppError>;
}

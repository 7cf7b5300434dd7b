use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, ScriptType};
use crate::ports::DeployTool;

const TOOL: &str = "clasp";

/// Credentials file written by `clasp login`.
const CREDENTIALS_FILENAME: &str = ".clasprc.json";

/// `clasp` adapter. Runs the project-local clasp through `npx` by default.
#[derive(Debug, Clone)]
pub struct ClaspCommandAdapter {
    program: String,
    base_args: Vec<String>,
    home: Option<PathBuf>,
}

impl ClaspCommandAdapter {
    pub fn new(program: impl Into<String>, base_args: Vec<String>, home: Option<PathBuf>) -> Self {
        Self { program: program.into(), base_args, home }
    }

    fn command(&self, project_dir: &Path, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.base_args).args(args).current_dir(project_dir);
        debug!(program = %self.program, ?args, "running clasp");
        command
    }

    fn run(&self, project_dir: &Path, args: &[&str]) -> Result<String, AppError> {
        let output = self.command(project_dir, args).output().map_err(|e| {
            AppError::external(TOOL, format!("Failed to execute {}: {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                format!("clasp {} exited with {}", args.join(" "), output.status)
            };
            return Err(AppError::external(TOOL, details));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for ClaspCommandAdapter {
    fn default() -> Self {
        let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
        Self::new("npx", vec![TOOL.to_string()], home.map(PathBuf::from))
    }
}

impl DeployTool for ClaspCommandAdapter {
    fn is_logged_in(&self) -> bool {
        self.home.as_ref().is_some_and(|home| home.join(CREDENTIALS_FILENAME).is_file())
    }

    fn login(&self) -> Result<(), AppError> {
        let cwd = std::env::current_dir()?;
        let status = self
            .command(&cwd, &["login"])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                AppError::external(TOOL, format!("Failed to execute {}: {}", self.program, e))
            })?;

        if !status.success() {
            return Err(AppError::external(TOOL, format!("login exited with {}", status)));
        }
        Ok(())
    }

    fn create(
        &self,
        project_dir: &Path,
        title: &str,
        script_type: ScriptType,
        root_dir: &str,
    ) -> Result<String, AppError> {
        self.run(
            project_dir,
            &["create", "--title", title, "--type", script_type.as_str(), "--rootDir", root_dir],
        )
    }

    fn clone_project(
        &self,
        project_dir: &Path,
        script_id: &str,
        root_dir: &str,
    ) -> Result<(), AppError> {
        self.run(project_dir, &["clone", script_id, "--rootDir", root_dir]).map(|_| ())
    }

    fn pull(&self, project_dir: &Path) -> Result<(), AppError> {
        self.run(project_dir, &["pull"]).map(|_| ())
    }
}

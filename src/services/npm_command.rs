use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, DependencyKind};
use crate::ports::PackageInstaller;

const TOOL: &str = "npm";

/// `npm install` adapter.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    program: String,
}

impl NpmCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Arguments for one install invocation.
    fn install_args(packages: &[String], kind: DependencyKind) -> Vec<String> {
        let mut args: Vec<String> = [
            "install",
            "--no-audit",
            "--no-fund",
            "--ignore-scripts",
            "--loglevel=error",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        if kind == DependencyKind::Development {
            args.push("--save-dev".to_string());
        }
        args.extend(packages.iter().cloned());
        args
    }
}

impl Default for NpmCommandAdapter {
    fn default() -> Self {
        Self::new(TOOL)
    }
}

impl PackageInstaller for NpmCommandAdapter {
    fn install(
        &self,
        project_dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        let args = Self::install_args(packages, kind);
        debug!(program = %self.program, ?args, "running package installer");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(project_dir)
            .env("CI", "true")
            .output()
            .map_err(|e| {
                AppError::external(TOOL, format!("Failed to execute {}: {}", self.program, e))
            })?;

        // With --loglevel=error anything on stderr is an error report.
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() || !stderr.is_empty() {
            return Err(AppError::external(
                TOOL,
                if stderr.is_empty() { format!("exited with {}", output.status) } else { stderr },
            ));
        }

        Ok(())
    }
}

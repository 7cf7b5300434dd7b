use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, UiFramework};
use crate::ports::UiGenerator;

const TOOL: &str = "npm create vite";

/// Generates a UI project with `npm create vite@latest`.
#[derive(Debug, Clone)]
pub struct ViteCommandAdapter {
    program: String,
}

impl ViteCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn generate_args(framework: UiFramework, name: &str) -> Vec<String> {
        ["create", "--yes", "vite@latest", name, "--", "--template", framework.vite_template()]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl Default for ViteCommandAdapter {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl UiGenerator for ViteCommandAdapter {
    fn generate(
        &self,
        project_dir: &Path,
        framework: UiFramework,
        name: &str,
    ) -> Result<(), AppError> {
        let args = Self::generate_args(framework, name);
        debug!(program = %self.program, ?args, "running UI generator");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(project_dir)
            .output()
            .map_err(|e| {
                AppError::external(TOOL, format!("Failed to execute {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::external(
                TOOL,
                if stderr.is_empty() { format!("exited with {}", output.status) } else { stderr },
            ));
        }

        Ok(())
    }
}

use std::path::Path;

use crate::domain::{AppError, UiFramework};

/// Port for the UI framework project generator.
pub trait UiGenerator {
    /// Generate a `framework` project named `name` inside `project_dir`.
    fn generate(&self, project_dir: &Path, framework: UiFramework, name: &str)
    -> Result<(), AppError>;
}

//! API Facade for the application.
//!
//! Wires the real npm, clasp and vite adapters into an `AppContext` and runs
//! commands against it.

use std::path::PathBuf;

use crate::app::{AppContext, commands::init};
use crate::services::{
    ClaspCommandAdapter, DialoguerPrompter, NpmCommandAdapter, ProjectFilesystem,
    ViteCommandAdapter,
};

pub use crate::app::commands::config_files::{FileAction, FileOutcome};
pub use crate::app::commands::dependencies::InstallReport;
pub use crate::app::commands::deploy::DeployOutcome;
pub use crate::app::commands::init::InitReport;
pub use crate::app::commands::manifest::ManifestOutcome;
pub use crate::app::commands::template::TemplateOutcome;
pub use crate::app::commands::ui::UiOutcome;
pub use crate::app::config::InitFlags;
pub use crate::domain::AppError;

type ProcessContext =
    AppContext<DialoguerPrompter, NpmCommandAdapter, ClaspCommandAdapter, ViteCommandAdapter>;

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> ProcessContext {
    AppContext::new(
        ProjectFilesystem::new(path),
        DialoguerPrompter::new(),
        NpmCommandAdapter::default(),
        ClaspCommandAdapter::default(),
        ViteCommandAdapter::default(),
    )
}

/// Scaffold or update a project in the current directory.
pub fn init(flags: &InitFlags) -> Result<InitReport, AppError> {
    init_at(std::env::current_dir()?, flags)
}

/// Scaffold or update a project at the specified path.
pub fn init_at(path: impl Into<PathBuf>, flags: &InitFlags) -> Result<InitReport, AppError> {
    let path = path.into();
    if !path.is_dir() {
        return Err(AppError::config_error(format!(
            "Project directory does not exist: {}",
            path.display()
        )));
    }
    init::execute(&create_context(path), flags)
}

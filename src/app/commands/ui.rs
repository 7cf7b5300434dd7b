//! UI scaffolding step.

use tracing::info;

use crate::domain::{AppError, Profile, UiFramework};
use crate::ports::UiGenerator;
use crate::services::ProjectFilesystem;

/// Directory the UI project is generated into.
pub const UI_DIR: &str = "ui";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiOutcome {
    NotRequested,
    AlreadyPresent,
    Generated(UiFramework),
}

pub fn scaffold<U: UiGenerator>(
    project: &ProjectFilesystem,
    generator: &U,
    profile: &Profile,
) -> Result<UiOutcome, AppError> {
    let Some(framework) = profile.ui() else {
        return Ok(UiOutcome::NotRequested);
    };
    if project.exists(UI_DIR) {
        return Ok(UiOutcome::AlreadyPresent);
    }

    info!(%framework, "generating UI project");
    generator.generate(project.root(), framework, UI_DIR)?;
    Ok(UiOutcome::Generated(framework))
}

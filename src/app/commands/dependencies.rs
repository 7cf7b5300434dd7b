//! Dependency step: install only what the manifest does not declare yet.

use tracing::{debug, info};

use crate::domain::{AppError, Comparison, DependencyKind, Manifest};
use crate::ports::PackageInstaller;
use crate::services::ProjectFilesystem;

/// What an install pass asked for and what the manifest says afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub requested: Vec<String>,
    /// Dependencies declared both before and after the install.
    pub resolved: Vec<String>,
    /// Dependencies that only appeared after the install.
    pub installed: Vec<String>,
}

/// Install the requested packages missing from `manifest`.
///
/// After a real install the manifest is reloaded from disk and replaces the
/// in-memory copy, so the report reflects what the installer actually wrote.
pub fn install_missing<I: PackageInstaller>(
    project: &ProjectFilesystem,
    installer: &I,
    manifest: &mut Manifest,
    requested: &[String],
    kind: DependencyKind,
) -> Result<InstallReport, AppError> {
    let before = manifest.dependency_names(true);
    let missing = Comparison::new(before.iter().cloned(), requested.iter().cloned()).right_only();

    if missing.is_empty() {
        debug!(?kind, "all requested dependencies already declared");
        return Ok(InstallReport {
            requested: requested.to_vec(),
            resolved: requested.to_vec(),
            installed: Vec::new(),
        });
    }

    info!(?kind, packages = ?missing, "installing dependencies");
    installer.install(project.root(), &missing, kind)?;

    let reloaded = project
        .load_manifest()?
        .ok_or_else(|| AppError::ManifestVanished(project.root().to_path_buf()))?;
    let comparison = Comparison::new(before, reloaded.dependency_names(true));
    *manifest = reloaded;

    Ok(InstallReport {
        requested: requested.to_vec(),
        resolved: comparison.both(),
        installed: comparison.right_only(),
    })
}

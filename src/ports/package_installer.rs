use std::path::Path;

use crate::domain::{AppError, DependencyKind};

/// Port for the package manager.
pub trait PackageInstaller {
    /// Install exactly `packages` into the project at `project_dir`.
    ///
    /// Runs non-interactively with lifecycle scripts disabled. The installer is
    /// expected to record the packages in the project's manifest.
    fn install(
        &self,
        project_dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError>;
}

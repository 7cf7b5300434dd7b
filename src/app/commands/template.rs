//! Starter template step.

use tracing::debug;

use crate::domain::{AppError, InitOptions, Manifest, normalize_name};
use crate::services::{ProjectFilesystem, starter_files};

const SOURCE_DIR: &str = "src";
const SOURCE_EXTENSIONS: &[&str] = &["ts", "js"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// `src/` already holds script sources; nothing was written.
    SourcesPresent,
    /// Starter files written, relative to the project root. Files that
    /// already existed are left alone and not listed.
    Installed { written: Vec<String> },
}

/// Write the starter sources unless the project already has some.
pub fn install_starter(
    project: &ProjectFilesystem,
    options: &InitOptions,
    manifest: &Manifest,
) -> Result<TemplateOutcome, AppError> {
    if project.contains_files_with_extension(SOURCE_DIR, SOURCE_EXTENSIONS)? {
        debug!("sources present, skipping starter template");
        return Ok(TemplateOutcome::SourcesPresent);
    }

    let name =
        manifest.name().map(str::to_string).unwrap_or_else(|| normalize_name(&options.title));

    let mut written = Vec::new();
    for file in starter_files(&options.title, &name)? {
        if project.exists(&file.path) {
            continue;
        }
        project.write_atomic(&file.path, file.content.as_bytes())?;
        written.push(file.path);
    }

    Ok(TemplateOutcome::Installed { written })
}

//! Manifest step: resolve or create `package.json` and sync its scripts.

use tracing::info;

use crate::app::interaction::Interaction;
use crate::domain::{AppError, InitOptions, MANIFEST_FILENAME, Manifest, Profile, sync_scripts};
use crate::ports::Prompter;
use crate::services::ProjectFilesystem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestOutcome {
    /// A new manifest was created from the default template.
    pub created: bool,
    /// Scripts changed on an existing manifest.
    pub updated: bool,
}

/// Load or create the manifest, merge the profile's scripts, and persist if
/// anything changed.
pub fn prepare<P: Prompter>(
    project: &ProjectFilesystem,
    interaction: &Interaction<'_, P>,
    options: &InitOptions,
    profile: &Profile,
) -> Result<(Manifest, ManifestOutcome), AppError> {
    let (mut manifest, created) = match project.load_manifest()? {
        Some(manifest) => (manifest, false),
        None => {
            let question = format!("No {} found. Create one?", MANIFEST_FILENAME);
            if !interaction.confirm(&question, true)? {
                return Err(AppError::ManifestMissing(project.root().to_path_buf()));
            }
            (Manifest::init(&options.title), true)
        }
    };

    let changed = sync_scripts(
        &mut manifest,
        profile.scripts().iter().copied(),
        |name, current, desired| {
            let question = format!(
                "Script '{}' differs.\n  current: {}\n  desired: {}\nOverwrite?",
                name, current, desired
            );
            interaction.confirm(&question, false)
        },
    )?;

    if created || changed {
        project.save_manifest(&manifest)?;
        info!(created, changed, "saved {}", MANIFEST_FILENAME);
    }

    Ok((manifest, ManifestOutcome { created, updated: changed && !created }))
}

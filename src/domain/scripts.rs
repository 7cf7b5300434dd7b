//! Script table synchronization.

use crate::domain::manifest::Manifest;

/// Merge `targets` into the manifest's scripts.
///
/// Missing scripts are added. Scripts whose command differs are only replaced
/// when `resolve(name, current, desired)` returns `true`. Returns whether the
/// manifest changed.
pub fn sync_scripts<'a, I, F, E>(
    manifest: &mut Manifest,
    targets: I,
    mut resolve: F,
) -> Result<bool, E>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    F: FnMut(&str, &str, &str) -> Result<bool, E>,
{
    let current = manifest.scripts();
    let mut dirty = false;

    for (name, desired) in targets {
        match current.get(name) {
            None => {
                manifest.update_script(name, desired);
                dirty = true;
            }
            Some(existing) if existing == desired => {}
            Some(existing) => {
                if resolve(name, existing, desired)? {
                    manifest.update_script(name, desired);
                    dirty = true;
                }
            }
        }
    }

    Ok(dirty)
}

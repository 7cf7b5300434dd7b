//! Config step: copy whole-file configs and line-merge ignore files.

use std::fmt;

use tracing::{debug, info};

use crate::app::interaction::Interaction;
use crate::domain::{AppError, ConfigEntry, CopyPlan, MergePlan, Profile, plan_copy, plan_merge};
use crate::ports::Prompter;
use crate::services::{ProjectFilesystem, asset_bytes, asset_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Overwritten,
    Merged,
    Unchanged,
    /// The user declined the change.
    Skipped,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileAction::Created => "created",
            FileAction::Overwritten => "overwritten",
            FileAction::Merged => "merged",
            FileAction::Unchanged => "unchanged",
            FileAction::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub target: String,
    pub action: FileAction,
}

impl FileOutcome {
    fn new(target: &str, action: FileAction) -> Self {
        Self { target: target.to_string(), action }
    }
}

/// Copy each config template, asking before replacing a file that differs.
pub fn copy_configs<P: Prompter>(
    project: &ProjectFilesystem,
    interaction: &Interaction<'_, P>,
    profile: &Profile,
) -> Result<Vec<FileOutcome>, AppError> {
    let mut outcomes = Vec::with_capacity(profile.copy_entries().len());

    for entry in profile.copy_entries() {
        let template = asset_bytes(entry.source)?;
        let existing = project.read_optional(entry.target)?;

        let action = match plan_copy(template, existing.as_deref()) {
            CopyPlan::Unchanged => FileAction::Unchanged,
            CopyPlan::Create => {
                project.write_atomic(entry.target, template)?;
                FileAction::Created
            }
            CopyPlan::Conflict => {
                let question =
                    format!("{} differs from the bundled version. Overwrite?", entry.target);
                if interaction.confirm(&question, false)? {
                    project.write_atomic(entry.target, template)?;
                    FileAction::Overwritten
                } else {
                    FileAction::Skipped
                }
            }
        };

        debug!(file = entry.target, %action, "copy config");
        outcomes.push(FileOutcome::new(entry.target, action));
    }

    Ok(outcomes)
}

/// Append missing template lines to each merge target.
///
/// Entries sharing a target are merged as one template so a file created by
/// the base entry is never re-prompted for its variant lines.
pub fn merge_configs<P: Prompter>(
    project: &ProjectFilesystem,
    interaction: &Interaction<'_, P>,
    profile: &Profile,
) -> Result<Vec<FileOutcome>, AppError> {
    let mut outcomes = Vec::new();

    for (target, template) in group_by_target(profile.merge_entries())? {
        let existing = project.read_optional_string(target)?;

        let plan = plan_merge(&template, existing.as_deref());
        let listing: Vec<String> =
            plan.additions().iter().map(|line| format!("+ {}", line)).collect();

        let action = match plan {
            MergePlan::Unchanged => FileAction::Unchanged,
            MergePlan::Create { content } => {
                project.write_atomic(target, content.as_bytes())?;
                FileAction::Created
            }
            MergePlan::Append { content, .. } => {
                let question = format!("Add to {}:\n{}\nApply?", target, listing.join("\n"));
                if interaction.confirm(&question, true)? {
                    project.write_atomic(target, content.as_bytes())?;
                    FileAction::Merged
                } else {
                    FileAction::Skipped
                }
            }
        };

        if action == FileAction::Merged {
            info!(file = target, "merged template lines");
        }
        outcomes.push(FileOutcome::new(target, action));
    }

    Ok(outcomes)
}

/// Concatenate the templates of entries sharing a target, first-seen order.
fn group_by_target(entries: &[ConfigEntry]) -> Result<Vec<(&'static str, String)>, AppError> {
    let mut grouped: Vec<(&'static str, String)> = Vec::new();
    for entry in entries {
        let text = asset_text(entry.source)?;
        match grouped.iter_mut().find(|(target, _)| *target == entry.target) {
            Some((_, template)) => {
                if !template.ends_with('\n') {
                    template.push('\n');
                }
                template.push_str(text);
            }
            None => grouped.push((entry.target, text.to_string())),
        }
    }
    Ok(grouped)
}

//! Option resolution: CLI flags, then `gas-init.toml`, then prompts.

use tracing::debug;

use crate::app::interaction::Interaction;
use crate::domain::{
    AnswerPolicy, AppError, CONFIG_FILENAME, InitOptions, ProjectConfig, UiFramework,
};
use crate::ports::Prompter;
use crate::services::ProjectFilesystem;

/// Raw `init` flags as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitFlags {
    pub title: Option<String>,
    pub yes: bool,
    pub no: bool,
}

/// Read `gas-init.toml` from the project root. Absence yields defaults.
pub fn load_project_config(project: &ProjectFilesystem) -> Result<ProjectConfig, AppError> {
    let Some(content) = project.read_optional_string(CONFIG_FILENAME)? else {
        return Ok(ProjectConfig::default());
    };
    debug!(path = %project.path(CONFIG_FILENAME).display(), "loaded project config");
    ProjectConfig::from_toml(&content).map_err(|err| AppError::InvalidConfig {
        path: project.path(CONFIG_FILENAME),
        details: err.to_string(),
    })
}

/// Build the immutable options bundle for one run.
pub fn resolve_options<P: Prompter>(
    flags: &InitFlags,
    config: &ProjectConfig,
    prompter: &P,
    default_title: &str,
) -> Result<InitOptions, AppError> {
    let policy = AnswerPolicy::from_flags(flags.yes, flags.no);
    let interaction = Interaction::new(policy, prompter);

    let title = match flags.title.clone().or_else(|| config.project.title.clone()) {
        Some(title) => title,
        None => interaction.input("Project title", default_title)?,
    };
    let title = if title.trim().is_empty() { default_title.to_string() } else { title };

    let ui = match config.ui_framework()? {
        Some(choice) => choice,
        None => {
            let mut items = vec!["none".to_string()];
            items.extend(UiFramework::ALL.iter().map(|framework| framework.to_string()));
            let index = interaction.select("UI framework", &items, 0)?;
            index.checked_sub(1).and_then(|i| UiFramework::ALL.get(i).copied())
        }
    };

    let script_type = config.script_type()?;

    Ok(InitOptions { policy, title, ui, script_type })
}

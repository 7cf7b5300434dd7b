//! `init`: run every scaffolding step in order.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::config_files::{self, FileOutcome};
use crate::app::commands::dependencies::{InstallReport, install_missing};
use crate::app::commands::deploy::{self, DeployOutcome};
use crate::app::commands::manifest::{self, ManifestOutcome};
use crate::app::commands::template::{TemplateOutcome, install_starter};
use crate::app::commands::ui::{self, UiOutcome};
use crate::app::config::{InitFlags, load_project_config, resolve_options};
use crate::app::interaction::Interaction;
use crate::domain::{AppError, DependencyKind, InitOptions, Profile};
use crate::ports::{DeployTool, PackageInstaller, Prompter, UiGenerator};

const FALLBACK_TITLE: &str = "gas-project";

/// Everything one `init` run did, step by step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub options: InitOptions,
    pub manifest: ManifestOutcome,
    pub runtime: InstallReport,
    pub development: InstallReport,
    pub configs: Vec<FileOutcome>,
    pub template: TemplateOutcome,
    pub ui: UiOutcome,
    pub deploy: DeployOutcome,
}

/// Execute the init command. The first failing step aborts the run; earlier
/// steps are not rolled back.
pub fn execute<P, I, D, U>(
    ctx: &AppContext<P, I, D, U>,
    flags: &InitFlags,
) -> Result<InitReport, AppError>
where
    P: Prompter,
    I: PackageInstaller,
    D: DeployTool,
    U: UiGenerator,
{
    let project = ctx.project();

    let config = load_project_config(project)?;
    let default_title = project
        .root()
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_TITLE)
        .to_string();
    let options = resolve_options(flags, &config, ctx.prompter(), &default_title)?;
    let profile = Profile::for_framework(options.ui);
    let interaction = Interaction::new(options.policy, ctx.prompter());
    info!(title = %options.title, ui = ?options.ui, policy = ?options.policy, "starting init");

    let (mut manifest, manifest_outcome) =
        manifest::prepare(project, &interaction, &options, &profile)?;

    let runtime = install_missing(
        project,
        ctx.installer(),
        &mut manifest,
        &package_names(&profile, DependencyKind::Runtime),
        DependencyKind::Runtime,
    )?;
    let development = install_missing(
        project,
        ctx.installer(),
        &mut manifest,
        &package_names(&profile, DependencyKind::Development),
        DependencyKind::Development,
    )?;

    let mut configs = config_files::copy_configs(project, &interaction, &profile)?;
    configs.extend(config_files::merge_configs(project, &interaction, &profile)?);

    let template = install_starter(project, &options, &manifest)?;
    let ui = ui::scaffold(project, ctx.ui(), &profile)?;
    let deploy = deploy::configure(project, &interaction, ctx.deploy(), &options)?;

    Ok(InitReport {
        options,
        manifest: manifest_outcome,
        runtime,
        development,
        configs,
        template,
        ui,
        deploy,
    })
}

fn package_names(profile: &Profile, kind: DependencyKind) -> Vec<String> {
    profile.dependencies(kind).iter().map(|name| name.to_string()).collect()
}

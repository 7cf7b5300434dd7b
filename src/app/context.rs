use crate::ports::{DeployTool, PackageInstaller, Prompter, UiGenerator};
use crate::services::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<P, I, D, U>
where
    P: Prompter,
    I: PackageInstaller,
    D: DeployTool,
    U: UiGenerator,
{
    project: ProjectFilesystem,
    prompter: P,
    installer: I,
    deploy: D,
    ui: U,
}

impl<P, I, D, U> AppContext<P, I, D, U>
where
    P: Prompter,
    I: PackageInstaller,
    D: DeployTool,
    U: UiGenerator,
{
    /// Create a new application context.
    pub fn new(project: ProjectFilesystem, prompter: P, installer: I, deploy: D, ui: U) -> Self {
        Self { project, prompter, installer, deploy, ui }
    }

    /// Get a reference to the project filesystem.
    pub fn project(&self) -> &ProjectFilesystem {
        &self.project
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn deploy(&self) -> &D {
        &self.deploy
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }
}

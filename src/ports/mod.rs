mod deploy_tool;
mod package_installer;
mod prompter;
mod ui_generator;

pub use deploy_tool::DeployTool;
pub use package_installer::PackageInstaller;
pub use prompter::Prompter;
pub use ui_generator::UiGenerator;

mod fake_deploy_tool;
mod fake_installer;
mod fake_ui_generator;
mod scripted_prompter;

use std::path::Path;

use crate::app::AppContext;
use crate::services::ProjectFilesystem;

pub use fake_deploy_tool::FakeDeployTool;
pub use fake_installer::FakeInstaller;
pub use fake_ui_generator::FakeUiGenerator;
pub use scripted_prompter::ScriptedPrompter;

pub type TestContext = AppContext<ScriptedPrompter, FakeInstaller, FakeDeployTool, FakeUiGenerator>;

/// Context over `root` with default fakes.
#[allow(dead_code)]
pub fn test_context(root: &Path, prompter: ScriptedPrompter) -> TestContext {
    AppContext::new(
        ProjectFilesystem::new(root.to_path_buf()),
        prompter,
        FakeInstaller::new(),
        FakeDeployTool::new(),
        FakeUiGenerator::new(),
    )
}

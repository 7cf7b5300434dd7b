mod clasp_command;
mod dialoguer_prompter;
mod embedded_assets;
mod npm_command;
mod project_filesystem;
mod vite_command;

pub use clasp_command::ClaspCommandAdapter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_assets::{StarterFile, asset_bytes, asset_text, starter_files};
pub use npm_command::NpmCommandAdapter;
pub use project_filesystem::ProjectFilesystem;
pub use vite_command::ViteCommandAdapter;

pub mod config_files;
pub mod dependencies;
pub mod deploy;
pub mod init;
pub mod manifest;
pub mod template;
pub mod ui;

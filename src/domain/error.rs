use std::io;
use std::path::PathBuf;

use thiserror::Error;

const SCRIPT_TYPE_NAMES: &str = "standalone, docs, sheets, slides, forms, webapp, api";

/// Library-wide error type for gas-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Reading a file failed for a reason other than absence.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest exists but is not valid package JSON.
    #[error("Failed to parse manifest {}: {details}", .path.display())]
    ManifestParse { path: PathBuf, details: String },

    /// No package.json and the user declined to create one.
    #[error("No package.json found in {} and creation was declined", .0.display())]
    ManifestMissing(PathBuf),

    /// The package installer finished but left no manifest behind.
    #[error("package.json disappeared from {} after installing dependencies", .0.display())]
    ManifestVanished(PathBuf),

    /// A project config file (`gas-init.toml` or `.clasp.json`) is malformed.
    #[error("Invalid {}: {details}", .path.display())]
    InvalidConfig { path: PathBuf, details: String },

    /// Unknown UI framework name.
    #[error("Unknown UI framework '{0}': expected one of vue, react")]
    UnknownFramework(String),

    /// Unknown Apps Script project type.
    #[error("Unknown script type '{0}': expected one of {expected}", expected = SCRIPT_TYPE_NAMES)]
    UnknownScriptType(String),

    /// An embedded asset is missing or not UTF-8.
    #[error("Missing embedded asset: {0}")]
    MissingAsset(String),

    /// Template rendering failed.
    #[error("Failed to render {name}: {details}")]
    Render { name: String, details: String },

    /// External tool (npm, clasp, ...) failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn external<T: Into<String>, E: Into<String>>(tool: T, error: E) -> Self {
        AppError::ExternalToolError { tool: tool.into(), error: error.into() }
    }
}

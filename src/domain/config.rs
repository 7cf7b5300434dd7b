//! Optional per-project defaults read from `gas-init.toml`.
//!
//! ```toml
//! [project]
//! title = "Expense Report"
//! script_type = "sheets"
//!
//! [ui]
//! framework = "vue"
//! ```

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::options::ScriptType;
use crate::domain::profile::UiFramework;

pub const CONFIG_FILENAME: &str = "gas-init.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub title: Option<String>,
    pub script_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    /// `"vue"`, `"react"`, or `"none"`.
    pub framework: Option<String>,
}

impl ProjectConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn script_type(&self) -> Result<Option<ScriptType>, AppError> {
        self.project.script_type.as_deref().map(str::parse::<ScriptType>).transpose()
    }

    /// `Some(None)` when the file explicitly disables the UI.
    pub fn ui_framework(&self) -> Result<Option<Option<UiFramework>>, AppError> {
        match self.ui.framework.as_deref() {
            None => Ok(None),
            Some(name) if name.trim().eq_ignore_ascii_case("none") => Ok(Some(None)),
            Some(name) => name.parse().map(|framework| Some(Some(framework))),
        }
    }
}

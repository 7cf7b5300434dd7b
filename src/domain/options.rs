//! Init options bundle.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::profile::UiFramework;

/// How confirmations are answered for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// Ask the user.
    #[default]
    Interactive,
    /// Every confirmation is yes; text and select prompts take their default.
    AssumeYes,
    /// Every confirmation is no; text prompts still ask.
    AssumeNo,
}

impl AnswerPolicy {
    /// Only exactly one override flag selects a fixed answer.
    pub fn from_flags(yes: bool, no: bool) -> Self {
        match (yes, no) {
            (true, false) => AnswerPolicy::AssumeYes,
            (false, true) => AnswerPolicy::AssumeNo,
            _ => AnswerPolicy::Interactive,
        }
    }

    /// Fixed confirmation answer, if any.
    pub fn fixed_answer(self) -> Option<bool> {
        match self {
            AnswerPolicy::Interactive => None,
            AnswerPolicy::AssumeYes => Some(true),
            AnswerPolicy::AssumeNo => Some(false),
        }
    }

    /// Whether text and select prompts resolve to their default silently.
    pub fn uses_defaults(self) -> bool {
        self == AnswerPolicy::AssumeYes
    }
}

/// Apps Script container type passed to `clasp create --type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptType {
    #[default]
    Standalone,
    Docs,
    Sheets,
    Slides,
    Forms,
    WebApp,
    Api,
}

impl ScriptType {
    pub const ALL: [ScriptType; 7] = [
        ScriptType::Standalone,
        ScriptType::Docs,
        ScriptType::Sheets,
        ScriptType::Slides,
        ScriptType::Forms,
        ScriptType::WebApp,
        ScriptType::Api,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptType::Standalone => "standalone",
            ScriptType::Docs => "docs",
            ScriptType::Sheets => "sheets",
            ScriptType::Slides => "slides",
            ScriptType::Forms => "forms",
            ScriptType::WebApp => "webapp",
            ScriptType::Api => "api",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ScriptType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| AppError::UnknownScriptType(value.to_string()))
    }
}

/// Resolved options for one `init` run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub policy: AnswerPolicy,
    pub title: String,
    pub ui: Option<UiFramework>,
    /// Project type for `clasp create`; asked for at deploy time when unset.
    pub script_type: Option<ScriptType>,
}

impl InitOptions {
    pub fn ui_enabled(&self) -> bool {
        self.ui.is_some()
    }
}

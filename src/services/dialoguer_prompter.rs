use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|err| AppError::Prompt(format!("{}: {}", question, err)))
    }

    fn input(&self, question: &str, default: &str) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(question);
        if default.is_empty() {
            input = input.allow_empty(true);
        } else {
            input = input.default(default.to_string());
        }

        input
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|err| AppError::Prompt(format!("{}: {}", question, err)))
    }

    fn select(&self, question: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(question)
            .items(items)
            .default(default)
            .interact()
            .map_err(|err| AppError::Prompt(format!("{}: {}", question, err)))
    }
}

//! Confirmation layer between pure plans and the prompter.

use tracing::debug;

use crate::domain::{AnswerPolicy, AppError};
use crate::ports::Prompter;

/// Applies the run's answer policy before any prompt I/O happens.
pub struct Interaction<'a, P: Prompter> {
    policy: AnswerPolicy,
    prompter: &'a P,
}

impl<'a, P: Prompter> Interaction<'a, P> {
    pub fn new(policy: AnswerPolicy, prompter: &'a P) -> Self {
        Self { policy, prompter }
    }

    pub fn confirm(&self, question: &str, default: bool) -> Result<bool, AppError> {
        if let Some(answer) = self.policy.fixed_answer() {
            debug!(question, answer, "confirmation answered by policy");
            return Ok(answer);
        }
        self.prompter.confirm(question, default)
    }

    pub fn input(&self, question: &str, default: &str) -> Result<String, AppError> {
        if self.policy.uses_defaults() {
            debug!(question, default, "input answered with default");
            return Ok(default.to_string());
        }
        self.prompter.input(question, default)
    }

    pub fn select(
        &self,
        question: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, AppError> {
        if self.policy.uses_defaults() {
            debug!(question, default, "selection answered with default");
            return Ok(default);
        }
        self.prompter.select(question, items, default)
    }
}

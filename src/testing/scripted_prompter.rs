use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter that replays queued answers and records every question asked.
///
/// When a queue runs dry the prompt's default is returned.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    inputs: RefCell<VecDeque<String>>,
    selects: RefCell<VecDeque<usize>>,
    questions: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn with_input(self, answer: &str) -> Self {
        self.inputs.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn with_select(self, index: usize) -> Self {
        self.selects.borrow_mut().push_back(index);
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool, AppError> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }

    fn input(&self, question: &str, default: &str) -> Result<String, AppError> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.inputs.borrow_mut().pop_front().unwrap_or_else(|| default.to_string()))
    }

    fn select(&self, question: &str, _items: &[String], default: usize) -> Result<usize, AppError> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.selects.borrow_mut().pop_front().unwrap_or(default))
    }
}

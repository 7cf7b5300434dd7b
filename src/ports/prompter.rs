use crate::domain::AppError;

/// Port for interactive questions.
///
/// Implementations always ask; fixed answers from `--yes`/`--no` are applied
/// before a prompter is reached.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, question: &str, default: bool) -> Result<bool, AppError>;

    /// Ask for free text. An empty answer yields `default`.
    fn input(&self, question: &str, default: &str) -> Result<String, AppError>;

    /// Pick one of `items`, returning its index.
    fn select(&self, question: &str, items: &[String], default: usize) -> Result<usize, AppError>;
}

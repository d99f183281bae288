//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Choice {choice} is out of range (expected 1-{option_count})")]
    ChoiceOutOfRange { choice: usize, option_count: usize },

    #[error("Quiz is already finished")]
    QuizFinished,

    #[error("Invalid {field} filter: '{value}'")]
    InvalidFilter { field: &'static str, value: String },
}

impl DomainError {
    /// Check if this error was caused by a user's choice rather than bad data
    pub fn is_choice_error(&self) -> bool {
        matches!(self, DomainError::ChoiceOutOfRange { .. })
    }
}

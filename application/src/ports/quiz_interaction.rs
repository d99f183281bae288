//! Quiz interaction port
//!
//! The quiz loop in [`RunQuizUseCase`](crate::use_cases::run_quiz::RunQuizUseCase)
//! talks to the player only through this trait.
//!
//! # Flow per question
//!
//! ```text
//! present()  →  read_choice()  →  show_outcome()
//!                  ↺ reprompts until a valid number is entered
//! ```
//!
//! The console adapter lives in the presentation layer.

use thiserror::Error;
use trivia_domain::{AnswerOutcome, Question};

/// Failures of the interaction channel itself
///
/// Invalid answers are not errors: adapters reprompt until the player
/// enters a number in range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The input stream ended before a valid answer was entered
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InteractionError {
    fn from(e: std::io::Error) -> Self {
        InteractionError::Io(e.to_string())
    }
}

/// Port for presenting questions and collecting answers
pub trait QuizInteraction {
    /// Called once before the first question
    fn start(&mut self, _total: usize) -> Result<(), InteractionError> {
        Ok(())
    }

    /// Show a question; `number` is 1-based
    fn present(&mut self, number: usize, question: &Question) -> Result<(), InteractionError>;

    /// Block until the player enters a choice in `1..=option_count`
    ///
    /// There is no retry limit and no timeout.
    fn read_choice(&mut self, option_count: usize) -> Result<usize, InteractionError>;

    /// Tell the player how the answer was scored
    fn show_outcome(
        &mut self,
        question: &Question,
        outcome: &AnswerOutcome,
    ) -> Result<(), InteractionError>;
}

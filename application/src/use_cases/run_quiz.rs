//! Run Quiz use case.
//!
//! Drives one quiz over an ordered question list. Session state (cursor and
//! running score) lives in a [`QuizSession`] owned by a single `execute`
//! call; all player I/O goes through the [`QuizInteraction`] port.
//!
//! # Per-question states
//!
//! ```text
//! Presented → AwaitingInput → (Validated | Rejected)* → Scored
//! ```
//!
//! Validation and reprompting happen inside the interaction adapter, so by
//! the time a choice reaches this use case it is in range.

use crate::ports::quiz_interaction::{InteractionError, QuizInteraction};
use thiserror::Error;
use tracing::{debug, info};
use trivia_domain::{DomainError, Question, QuizResult, QuizSession};

/// Errors that can occur while running a quiz
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunQuizError {
    #[error("Quiz interrupted: {0}")]
    Interaction(#[from] InteractionError),

    #[error("Quiz error: {0}")]
    Domain(#[from] DomainError),
}

/// Use case for presenting questions, collecting answers and scoring them
#[derive(Debug, Clone, Copy, Default)]
pub struct RunQuizUseCase;

impl RunQuizUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Run the quiz to completion and return the final tally
    ///
    /// An empty question list finishes immediately with `0/0`.
    pub fn execute(
        &self,
        questions: Vec<Question>,
        interaction: &mut dyn QuizInteraction,
    ) -> Result<QuizResult, RunQuizError> {
        let mut session = QuizSession::new(questions);
        info!("Starting quiz with {} questions", session.total());

        interaction.start(session.total())?;

        while let Some(question) = session.current().cloned() {
            let number = session.current_index() + 1;

            interaction.present(number, &question)?;
            let choice = interaction.read_choice(question.option_count())?;
            let outcome = session.answer(choice)?;

            debug!(
                "Question {}: choice {} scored {}",
                number,
                choice,
                if outcome.is_correct() { "correct" } else { "wrong" }
            );
            interaction.show_outcome(&question, &outcome)?;
        }

        let result = session.result();
        info!("Quiz complete: {}/{}", result.correct_count, result.total);
        Ok(result)
    }
}

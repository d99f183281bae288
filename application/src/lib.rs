//! Application layer for trivia-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    progress::{FetchProgressNotifier, NoProgress},
    question_source::{FetchError, QuestionSource},
    quiz_interaction::{InteractionError, QuizInteraction},
};
pub use use_cases::load_questions::{LoadQuestionsError, LoadQuestionsInput, LoadQuestionsUseCase};
pub use use_cases::run_quiz::{RunQuizError, RunQuizUseCase};

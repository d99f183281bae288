//! Domain layer for trivia-quiz
//!
//! This crate contains the core quiz logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Normalization
//!
//! Upstream trivia records are loosely typed ([`RawQuestionRecord`]). The
//! [`normalize`] function turns each one into a strict [`Question`]:
//!
//! - HTML entities are decoded for display
//! - **Boolean** questions always offer `True` / `False` in that order
//! - **Multiple-choice** options are deduplicated and shuffled
//!
//! ## Scoring
//!
//! A [`QuizSession`] walks the question list, scores each choice once and
//! yields a [`QuizResult`] at the end.

pub mod config;
pub mod core;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use config::{Difficulty, ProgressMode, QuestionType};
pub use crate::core::{error::DomainError, html::decode_entities};
pub use question::{
    entities::Question,
    kind::QuestionKind,
    normalize::{normalize, normalize_with_rng},
    raw::RawQuestionRecord,
};
pub use quiz::{
    result::QuizResult,
    session::{AnswerOutcome, QuizSession},
};

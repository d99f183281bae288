//! Use cases (application services)

pub mod load_questions;
pub mod run_quiz;

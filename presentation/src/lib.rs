//! Presentation layer for trivia-quiz
//!
//! This crate contains CLI definitions, the console quiz adapter,
//! fetch progress reporters, and score formatting.

pub mod cli;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, ProgressArg};
pub use output::console::{ConsoleFormatter, pause_before_exit};
pub use output::report::ScoreReport;
pub use progress::reporter::{SimpleProgress, SpinnerProgress, progress_notifier};
pub use quiz::console::{ConsoleQuiz, parse_choice};

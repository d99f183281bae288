//! Configuration value objects for the domain layer
//!
//! Request filters understood by the upstream trivia service, and the
//! progress display mode. They are shared by the config file, the command
//! line and the adapters.

mod difficulty;
mod progress_mode;
mod question_type;

pub use difficulty::Difficulty;
pub use progress_mode::ProgressMode;
pub use question_type::QuestionType;

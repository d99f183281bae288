//! Application-level configuration.
//!
//! - [`QuizParams`]: how many questions to request and how long to wait for them

pub mod quiz_params;

pub use quiz_params::QuizParams;

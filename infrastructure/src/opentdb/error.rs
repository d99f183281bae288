//! Error types for the Open Trivia DB adapter

use thiserror::Error;

/// Errors that can occur while setting up the client
///
/// Failures of an actual request are reported as
/// [`FetchError`](trivia_application::FetchError) instead.
#[derive(Error, Debug)]
pub enum OpenTdbError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

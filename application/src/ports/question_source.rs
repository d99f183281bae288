//! Question source port
//!
//! Defines how the application layer obtains raw question records from the
//! upstream trivia service.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::RawQuestionRecord;

/// Errors that can occur while fetching questions
///
/// None of these are retried: any of them ends the run before a single
/// question is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout or a non-2xx HTTP status
    #[error("Network error: {0}")]
    Transport(String),

    /// Body is not UTF-8 text or not valid JSON
    #[error("Failed to parse API response: {0}")]
    Decode(String),

    /// Well-formed JSON that is not a usable envelope
    #[error("API returned an unexpected response: {0}")]
    BadResponse(String),

    /// Envelope was valid but carried no questions
    #[error("No questions received")]
    Empty,
}

impl FetchError {
    pub const NON_ZERO_RESPONSE_CODE: &'static str = "non-zero response code";
    pub const MALFORMED_ENVELOPE: &'static str = "malformed envelope";

    pub fn transport(detail: impl std::fmt::Display) -> Self {
        FetchError::Transport(detail.to_string())
    }

    pub fn decode(detail: impl std::fmt::Display) -> Self {
        FetchError::Decode(detail.to_string())
    }

    pub fn malformed_envelope() -> Self {
        FetchError::BadResponse(Self::MALFORMED_ENVELOPE.to_string())
    }

    /// Non-zero response code, with an optional explanation of the code
    pub fn non_zero_response_code(code: i64, meaning: Option<&str>) -> Self {
        let detail = match meaning {
            Some(meaning) => format!("{} {} ({})", Self::NON_ZERO_RESPONSE_CODE, code, meaning),
            None => format!("{} {}", Self::NON_ZERO_RESPONSE_CODE, code),
        };
        FetchError::BadResponse(detail)
    }

    /// Short category label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
            FetchError::BadResponse(_) => "bad_response",
            FetchError::Empty => "empty",
        }
    }
}

/// Source of raw trivia question records
///
/// Implementations (adapters) live in the infrastructure layer. A single
/// call performs a single attempt.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch `count` question records
    ///
    /// On success the records are returned exactly as received; validating
    /// individual records is the normalizer's job.
    async fn fetch(&self, count: u32) -> Result<Vec<RawQuestionRecord>, FetchError>;

    /// Human-readable description of where questions come from
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_response_code_message() {
        let err = FetchError::non_zero_response_code(1, Some("no results"));
        assert_eq!(
            err,
            FetchError::BadResponse("non-zero response code 1 (no results)".to_string())
        );
        assert!(err.to_string().contains("non-zero response code"));
    }

    #[test]
    fn test_malformed_envelope_message() {
        let err = FetchError::malformed_envelope();
        assert_eq!(
            err.to_string(),
            "API returned an unexpected response: malformed envelope"
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(FetchError::transport("refused").kind(), "transport");
        assert_eq!(FetchError::decode("eof").kind(), "decode");
        assert_eq!(FetchError::Empty.kind(), "empty");
    }
}

//! Response envelope parsing
//!
//! The service wraps every answer in
//!
//! ```json
//! { "response_code": 0, "results": [ { "type": "...", ... } ] }
//! ```
//!
//! Classification of a body, in order:
//!
//! | Check | Failure |
//! |-------|---------|
//! | UTF-8 text | `FetchError::Decode` |
//! | JSON | `FetchError::Decode` |
//! | object with integer `response_code` | `BadResponse("malformed envelope")` |
//! | `response_code == 0` | `BadResponse("non-zero response code ...")` |
//! | non-empty `results` array | `FetchError::Empty` |
//! | at least one result is a record object | `BadResponse("malformed envelope")` |
//!
//! Individual results that are not record objects (wrong field types) are
//! skipped with a warning.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use trivia_application::FetchError;
use trivia_domain::RawQuestionRecord;

/// Upstream `response_code` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(i64),
}

impl ResponseCode {
    pub fn value(&self) -> i64 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Success)
    }

    /// What the service means by this code
    pub fn description(&self) -> Option<&'static str> {
        match self {
            ResponseCode::Success => Some("success"),
            ResponseCode::NoResults => Some("not enough questions for the query"),
            ResponseCode::InvalidParameter => Some("invalid parameter"),
            ResponseCode::TokenNotFound => Some("session token not found"),
            ResponseCode::TokenEmpty => Some("session token exhausted"),
            ResponseCode::RateLimit => Some("rate limit exceeded, wait a few seconds"),
            ResponseCode::Unknown(_) => None,
        }
    }
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

/// Decoded top-level response
///
/// `results` stays untyped until the response code has been checked, so a
/// failing code is reported as such even when its results are odd.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponseEnvelope {
    pub response_code: ResponseCode,
    pub results: Option<Value>,
}

impl ApiResponseEnvelope {
    /// Decode raw body bytes into an envelope
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        let text = std::str::from_utf8(body).map_err(FetchError::decode)?;
        let value: Value = serde_json::from_str(text).map_err(FetchError::decode)?;

        let Value::Object(mut object) = value else {
            return Err(FetchError::malformed_envelope());
        };
        let response_code = object
            .get("response_code")
            .and_then(Value::as_i64)
            .ok_or_else(FetchError::malformed_envelope)?;

        Ok(Self {
            response_code: ResponseCode::from(response_code),
            results: object.remove("results"),
        })
    }

    /// Validate the envelope and hand out its records unchanged
    pub fn into_records(self) -> Result<Vec<RawQuestionRecord>, FetchError> {
        if !self.response_code.is_success() {
            return Err(FetchError::non_zero_response_code(
                self.response_code.value(),
                self.response_code.description(),
            ));
        }

        let items = match self.results {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(FetchError::Empty),
        };

        let total = items.len();
        let records: Vec<RawQuestionRecord> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match RawQuestionRecord::deserialize(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping result {}: {}", i + 1, e);
                    None
                }
            })
            .collect();

        if records.is_empty() {
            warn!("None of the {} results was a question record", total);
            return Err(FetchError::malformed_envelope());
        }
        Ok(records)
    }
}

/// Decode and validate a response body in one step
pub fn parse_records(body: &[u8]) -> Result<Vec<RawQuestionRecord>, FetchError> {
    ApiResponseEnvelope::from_slice(body)?.into_records()
}

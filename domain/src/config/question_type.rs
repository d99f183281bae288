//! Question type filter value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Question type accepted by the upstream `type` parameter
///
/// Unlike [`QuestionKind`](crate::QuestionKind), which describes whatever
/// the service sent back, this only covers the values a request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Boolean,
    Multiple,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Boolean => "boolean",
            QuestionType::Multiple => "multiple",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boolean" | "bool" | "tf" => Ok(QuestionType::Boolean),
            "multiple" | "mc" => Ok(QuestionType::Multiple),
            other => Err(DomainError::InvalidFilter {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

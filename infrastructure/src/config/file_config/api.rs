//! API configuration from TOML (`[api]` section)

use super::ConfigIssue;
use crate::opentdb::error::OpenTdbError;
use crate::opentdb::request::{ApiRequest, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use trivia_application::QuizParams;
use trivia_domain::{Difficulty, QuestionType};

/// Raw API configuration from TOML
///
/// Filters are kept as strings here so that a typo produces a warning
/// instead of a hard parse failure of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Endpoint URL
    pub base_url: String,
    /// Number of questions per quiz (1-50)
    pub amount: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Upstream category id
    pub category: Option<u32>,
    /// "easy", "medium" or "hard"
    pub difficulty: Option<String>,
    /// "boolean" or "multiple"
    pub question_type: Option<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            amount: QuizParams::DEFAULT_AMOUNT,
            timeout_secs: QuizParams::DEFAULT_TIMEOUT_SECS,
            category: None,
            difficulty: None,
            question_type: None,
        }
    }
}

impl FileApiConfig {
    pub fn parse_difficulty(&self) -> (Option<Difficulty>, Option<ConfigIssue>) {
        match self.difficulty.as_deref().map(str::parse::<Difficulty>) {
            None => (None, None),
            Some(Ok(difficulty)) => (Some(difficulty), None),
            Some(Err(e)) => (
                None,
                Some(ConfigIssue::new(
                    "api.difficulty",
                    format!("{}, expected easy, medium or hard; ignoring", e),
                )),
            ),
        }
    }

    pub fn parse_question_type(&self) -> (Option<QuestionType>, Option<ConfigIssue>) {
        match self.question_type.as_deref().map(str::parse::<QuestionType>) {
            None => (None, None),
            Some(Ok(question_type)) => (Some(question_type), None),
            Some(Err(e)) => (
                None,
                Some(ConfigIssue::new(
                    "api.question_type",
                    format!("{}, expected boolean or multiple; ignoring", e),
                )),
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(1..=QuizParams::MAX_AMOUNT).contains(&self.amount) {
            issues.push(ConfigIssue::new(
                "api.amount",
                format!(
                    "{} is outside 1-{}, clamping",
                    self.amount,
                    QuizParams::MAX_AMOUNT
                ),
            ));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::new(
                "api.timeout_secs",
                format!(
                    "must be positive, using {}s",
                    QuizParams::DEFAULT_TIMEOUT_SECS
                ),
            ));
        }
        issues.extend(self.parse_difficulty().1);
        issues.extend(self.parse_question_type().1);

        issues
    }

    /// Request size and timeout, with out-of-range values repaired
    pub fn to_quiz_params(&self) -> QuizParams {
        QuizParams::default()
            .with_amount(self.amount)
            .with_timeout_secs(self.timeout_secs)
    }

    /// Request URL template; invalid filters are left out
    pub fn to_api_request(&self) -> Result<ApiRequest, OpenTdbError> {
        Ok(ApiRequest::new(&self.base_url)?
            .with_category(self.category)
            .with_difficulty(self.parse_difficulty().0)
            .with_question_type(self.parse_question_type().0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, "https://opentdb.com/api.php");
        assert_eq!(config.amount, 10);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_to_quiz_params_repairs_values() {
        let config = FileApiConfig {
            amount: 99,
            timeout_secs: 0,
            ..Default::default()
        };
        let params = config.to_quiz_params();
        assert_eq!(params.amount, 50);
        assert_eq!(params.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_filters_are_dropped_from_request() {
        let config = FileApiConfig {
            category: Some(23),
            difficulty: Some("nightmare".to_string()),
            question_type: Some("multiple".to_string()),
            ..Default::default()
        };
        let url = config.to_api_request().unwrap().url_for(10);
        assert_eq!(
            url.as_str(),
            "https://opentdb.com/api.php?amount=10&category=23&type=multiple"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FileApiConfig {
            base_url: "opentdb".to_string(),
            ..Default::default()
        };
        assert!(config.to_api_request().is_err());
    }
}

//! Request URL construction

use super::error::OpenTdbError;
use reqwest::Url;
use trivia_domain::{Difficulty, QuestionType};

/// Default upstream endpoint
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com/api.php";

/// Everything needed to build the request URL except the question count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    base_url: Url,
    category: Option<u32>,
    difficulty: Option<Difficulty>,
    question_type: Option<QuestionType>,
}

impl ApiRequest {
    /// Create a request for the given endpoint; only http(s) URLs are accepted
    pub fn new(base_url: &str) -> Result<Self, OpenTdbError> {
        let invalid = |reason: String| OpenTdbError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            base_url: url,
            category: None,
            difficulty: None,
            question_type: None,
        })
    }

    pub fn with_category(mut self, category: Option<u32>) -> Self {
        self.category = category;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_question_type(mut self, question_type: Option<QuestionType>) -> Self {
        self.question_type = question_type;
        self
    }

    /// Endpoint without query parameters, for display
    ///
    /// A query configured in the base URL (e.g. a session token) stays out
    /// of progress output and logs.
    pub fn endpoint(&self) -> String {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.to_string()
    }

    /// Full URL for a batch of `amount` questions
    pub fn url_for(&self, amount: u32) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("amount", &amount.to_string());
            if let Some(category) = self.category {
                query.append_pair("category", &category.to_string());
            }
            if let Some(difficulty) = self.difficulty {
                query.append_pair("difficulty", difficulty.as_str());
            }
            if let Some(question_type) = self.question_type {
                query.append_pair("type", question_type.as_str());
            }
        }
        url
    }
}

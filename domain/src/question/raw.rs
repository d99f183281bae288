//! Raw question record as delivered by the upstream service

use super::kind::QuestionKind;
use serde::{Deserialize, Serialize};

/// One question record from the upstream `results` array
///
/// Every field is optional: the service is trusted for shape but not for
/// completeness, and the normalizer decides how to fill gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuestionRecord {
    #[serde(rename = "type")]
    pub kind: Option<QuestionKind>,
    pub question: Option<String>,
    pub correct_answer: Option<String>,
    pub incorrect_answers: Option<Vec<String>>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl RawQuestionRecord {
    /// Create a record with the four fields the quiz consumes
    pub fn new(
        kind: impl Into<QuestionKind>,
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            question: Some(question.into()),
            correct_answer: Some(correct_answer.into()),
            incorrect_answers: Some(incorrect_answers),
            category: None,
            difficulty: None,
        }
    }

    /// Kind of question; an absent tag is treated as multiple-choice
    pub fn kind(&self) -> QuestionKind {
        self.kind.clone().unwrap_or_default()
    }

    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    pub fn correct_answer(&self) -> &str {
        self.correct_answer.as_deref().unwrap_or("")
    }

    pub fn incorrect_answers(&self) -> &[String] {
        self.incorrect_answers.as_deref().unwrap_or(&[])
    }
}

//! Question entity

use crate::core::error::DomainError;
use std::collections::HashSet;

/// A normalized question ready for display and scoring (Value Object)
///
/// # Invariants
///
/// - `correct` is one of `options`
/// - `options` contains no duplicate strings
///
/// A question is immutable once built. Use [`Question::try_new`] or the
/// normalizer to create one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: String,
    category: Option<String>,
    difficulty: Option<String>,
}

impl Question {
    /// Minimum number of options for a question to be worth asking
    pub const MIN_PLAYABLE_OPTIONS: usize = 2;

    /// Create a question, checking the option invariants
    pub fn try_new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let correct = correct.into();

        let mut seen = HashSet::new();
        if let Some(dup) = options.iter().find(|o| !seen.insert(o.as_str())) {
            return Err(DomainError::InvalidQuestion(format!(
                "duplicate option '{}'",
                dup
            )));
        }
        if !options.contains(&correct) {
            return Err(DomainError::InvalidQuestion(format!(
                "correct answer '{}' is not among the options",
                correct
            )));
        }

        Ok(Self::from_parts(prompt.into(), options, correct))
    }

    /// Build without re-checking; callers guarantee the invariants
    pub(crate) fn from_parts(prompt: String, options: Vec<String>, correct: String) -> Self {
        debug_assert!(options.contains(&correct));
        Self {
            prompt,
            options,
            correct,
            category: None,
            difficulty: None,
        }
    }

    /// Attach the upstream category and difficulty labels
    pub fn with_metadata(mut self, category: Option<String>, difficulty: Option<String>) -> Self {
        self.category = category;
        self.difficulty = difficulty;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct(&self) -> &str {
        &self.correct
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// Option text for a 1-based choice number
    pub fn option_for_choice(&self, choice: usize) -> Option<&str> {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Exact string comparison against the correct answer
    pub fn is_correct(&self, chosen: &str) -> bool {
        chosen == self.correct
    }

    /// Whether there is an actual choice to make
    pub fn is_playable(&self) -> bool {
        self.options.len() >= Self::MIN_PLAYABLE_OPTIONS
    }
}

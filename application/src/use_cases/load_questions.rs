//! Load Questions use case.
//!
//! Fetches raw records from a [`QuestionSource`] and normalizes them into
//! the ordered question list for one quiz.
//!
//! ```text
//! QuestionSource::fetch(count)
//!        ↓  (any FetchError aborts here)
//! normalize() per record
//!        ↓
//! drop questions with fewer than two options
//!        ↓
//! Vec<Question>
//! ```

use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use crate::ports::question_source::{FetchError, QuestionSource};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use trivia_domain::core::string::preview;
use trivia_domain::{Question, normalize};

/// Errors that can occur while loading questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadQuestionsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("None of the {received} received questions had enough answer options")]
    NoPlayableQuestions { received: usize },
}

/// Input for the [`LoadQuestionsUseCase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadQuestionsInput {
    /// Number of questions to request
    pub count: u32,
}

impl LoadQuestionsInput {
    pub fn new(count: u32) -> Self {
        Self { count }
    }
}

/// Use case for fetching and normalizing the questions of one quiz
pub struct LoadQuestionsUseCase {
    source: Arc<dyn QuestionSource>,
}

impl LoadQuestionsUseCase {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Load questions without progress reporting
    pub async fn execute(
        &self,
        input: LoadQuestionsInput,
    ) -> Result<Vec<Question>, LoadQuestionsError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Load questions, reporting fetch progress
    pub async fn execute_with_progress(
        &self,
        input: LoadQuestionsInput,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<Vec<Question>, LoadQuestionsError> {
        let source = self.source.describe();
        info!("Fetching {} questions from {}", input.count, source);

        progress.on_fetch_start(&source, input.count);
        let records = match self.source.fetch(input.count).await {
            Ok(records) => records,
            Err(e) => {
                warn!(kind = e.kind(), "Fetch failed: {}", e);
                progress.on_fetch_failed(&e);
                return Err(e.into());
            }
        };
        let received = records.len();
        let questions: Vec<Question> = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let question = normalize(record);
                if question.is_playable() {
                    debug!(
                        "Question {}: {} ({} options)",
                        i + 1,
                        preview(question.prompt(), 60),
                        question.option_count()
                    );
                    Some(question)
                } else {
                    warn!(
                        "Dropping question {} with {} option(s): {}",
                        i + 1,
                        question.option_count(),
                        preview(question.prompt(), 60)
                    );
                    None
                }
            })
            .collect();

        progress.on_fetch_complete(received, questions.len());

        if questions.is_empty() {
            return Err(LoadQuestionsError::NoPlayableQuestions { received });
        }

        info!("Loaded {} of {} questions", questions.len(), received);
        Ok(questions)
    }
}

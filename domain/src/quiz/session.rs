//! Quiz session: the running state of one quiz

use crate::core::error::DomainError;
use crate::question::entities::Question;
use crate::quiz::result::QuizResult;

/// Outcome of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { correct: String },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// State of a single quiz run
///
/// Owns the ordered questions, a cursor and the running score. Each call
/// to [`QuizSession::answer`] scores the current question and moves on, so
/// no question can be counted twice.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    correct_count: usize,
    current_index: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            correct_count: 0,
            current_index: 0,
        }
    }

    /// The question waiting for an answer, if any
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// 0-based position of the current question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Score a 1-based choice for the current question and advance
    ///
    /// An out-of-range choice leaves the session untouched.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome, DomainError> {
        let question = self.current().ok_or(DomainError::QuizFinished)?;

        let chosen = question
            .option_for_choice(choice)
            .ok_or(DomainError::ChoiceOutOfRange {
                choice,
                option_count: question.option_count(),
            })?;

        let outcome = if question.is_correct(chosen) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong {
                correct: question.correct().to_string(),
            }
        };

        if outcome.is_correct() {
            self.correct_count += 1;
        }
        self.current_index += 1;

        Ok(outcome)
    }

    pub fn result(&self) -> QuizResult {
        QuizResult::new(self.correct_count, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct: &str) -> Question {
        Question::try_new(
            "Q",
            options.iter().map(|s| s.to_string()).collect(),
            correct,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_session_is_finished() {
        let session = QuizSession::new(vec![]);
        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.result(), QuizResult::new(0, 0));
    }

    #[test]
    fn test_answer_scores_and_advances() {
        let mut session = QuizSession::new(vec![
            question(&["True", "False"], "True"),
            question(&["3", "4", "5"], "4"),
        ]);

        assert_eq!(session.answer(1).unwrap(), AnswerOutcome::Correct);
        assert_eq!(session.current_index(), 1);

        assert_eq!(
            session.answer(3).unwrap(),
            AnswerOutcome::Wrong {
                correct: "4".to_string()
            }
        );
        assert!(session.is_finished());
        assert_eq!(session.result(), QuizResult::new(1, 2));
    }

    #[test]
    fn test_out_of_range_choice_does_not_advance() {
        let mut session = QuizSession::new(vec![question(&["a", "b"], "a")]);
        let err = session.answer(3).unwrap_err();
        assert!(err.is_choice_error());
        assert!(session.answer(0).unwrap_err().is_choice_error());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_answer_after_finish() {
        let mut session = QuizSession::new(vec![question(&["a", "b"], "a")]);
        session.answer(1).unwrap();
        assert_eq!(session.answer(1).unwrap_err(), DomainError::QuizFinished);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_correct_count_never_exceeds_total() {
        let questions: Vec<_> = (0..5).map(|_| question(&["x", "y"], "x")).collect();
        let mut session = QuizSession::new(questions);
        while !session.is_finished() {
            session.answer(1).unwrap();
        }
        let _ = session.answer(1);
        let result = session.result();
        assert_eq!(result.correct_count, 5);
        assert!(result.correct_count <= result.total);
    }
}

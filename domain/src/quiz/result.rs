//! Quiz result value object

/// Final tally of a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn new(correct_count: usize, total: usize) -> Self {
        debug_assert!(correct_count <= total);
        Self {
            correct_count,
            total,
        }
    }

    /// Percentage of correct answers, `None` when no question was asked
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct_count as f64 / self.total as f64 * 100.0)
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct_count == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(QuizResult::new(7, 10).percentage(), Some(70.0));
        assert_eq!(QuizResult::new(0, 3).percentage(), Some(0.0));
        assert_eq!(QuizResult::new(3, 3).percentage(), Some(100.0));
    }

    #[test]
    fn test_percentage_without_questions() {
        assert_eq!(QuizResult::new(0, 0).percentage(), None);
        assert!(!QuizResult::new(0, 0).is_perfect());
    }

    #[test]
    fn test_is_perfect() {
        assert!(QuizResult::new(5, 5).is_perfect());
        assert!(!QuizResult::new(4, 5).is_perfect());
    }
}

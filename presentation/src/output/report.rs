//! Final score report

use colored::Colorize;
use trivia_domain::QuizResult;

/// Renders a [`QuizResult`] for the console
pub struct ScoreReport;

impl ScoreReport {
    pub fn format(result: &QuizResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "--- Quiz complete ---".cyan().bold()));

        let Some(percentage) = result.percentage() else {
            output.push_str("No questions were answered.\n");
            return output;
        };

        output.push_str(&format!("Questions answered: {}\n", result.total));
        output.push_str(&format!(
            "{} {}/{} ({:.1}%)\n",
            "Score:".bold(),
            result.correct_count,
            result.total,
            percentage
        ));

        if result.is_perfect() {
            output.push_str(&format!("{}\n", "Perfect score!".green().bold()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_seven_out_of_ten() {
        plain();
        let text = ScoreReport::format(&QuizResult::new(7, 10));
        assert!(text.contains("Questions answered: 10\n"));
        assert!(text.contains("Score: 7/10 (70.0%)"));
        assert!(!text.contains("Perfect"));
    }

    #[test]
    fn test_one_decimal_rounding() {
        plain();
        let text = ScoreReport::format(&QuizResult::new(2, 3));
        assert!(text.contains("Score: 2/3 (66.7%)"));
    }

    #[test]
    fn test_perfect_score() {
        plain();
        let text = ScoreReport::format(&QuizResult::new(2, 2));
        assert!(text.contains("Score: 2/2 (100.0%)"));
        assert!(text.contains("Perfect score!"));
    }

    #[test]
    fn test_zero_total() {
        plain();
        let text = ScoreReport::format(&QuizResult::new(0, 0));
        assert!(text.contains("No questions were answered."));
        assert!(!text.contains("Score:"));
    }
}

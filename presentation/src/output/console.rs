//! Console formatting for fetch diagnostics

use colored::Colorize;
use std::io::{BufRead, Write};
use trivia_application::{FetchError, LoadQuestionsError};

/// Formats load failures for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a load failure as a plain-language diagnostic
    pub fn format_load_error(error: &LoadQuestionsError) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Could not load questions:".red().bold(),
            error
        ));

        if let Some(hint) = Self::hint(error) {
            output.push_str(&format!("{} {}\n", "Hint:".yellow(), hint));
        }

        output
    }

    fn hint(error: &LoadQuestionsError) -> Option<&'static str> {
        match error {
            LoadQuestionsError::Fetch(FetchError::Transport(_)) => {
                Some("check your internet connection, or raise --timeout")
            }
            LoadQuestionsError::Fetch(FetchError::BadResponse(detail))
                if detail.contains("rate limit") =>
            {
                Some("wait a few seconds and try again")
            }
            LoadQuestionsError::Fetch(FetchError::BadResponse(detail))
                if detail.contains("not enough questions") =>
            {
                Some("ask for fewer questions or relax the category/difficulty filters")
            }
            LoadQuestionsError::Fetch(FetchError::Empty) => {
                Some("ask for fewer questions or relax the category/difficulty filters")
            }
            _ => None,
        }
    }

    /// Section header used around the quiz
    pub fn header(title: &str) -> String {
        format!("{}", format!("=== {} ===", title).cyan().bold())
    }
}

/// Print "Press Enter to exit..." and wait for one line
///
/// A closed input counts as Enter.
pub fn pause_before_exit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<()> {
    write!(output, "\nPress Enter to exit...")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_transport_error_has_hint() {
        plain();
        let error = LoadQuestionsError::Fetch(FetchError::Transport(
            "request timed out after 10s".to_string(),
        ));

        let text = ConsoleFormatter::format_load_error(&error);

        assert!(text.starts_with("Could not load questions: Network error: request timed out"));
        assert!(text.contains("Hint: check your internet connection"));
    }

    #[test]
    fn test_bad_response_message() {
        plain();
        let error = LoadQuestionsError::Fetch(FetchError::non_zero_response_code(
            1,
            Some("not enough questions for the query"),
        ));

        let text = ConsoleFormatter::format_load_error(&error);

        assert!(text.contains("non-zero response code 1"));
        assert!(text.contains("ask for fewer questions"));
    }

    #[test]
    fn test_decode_error_has_no_hint() {
        plain();
        let error = LoadQuestionsError::Fetch(FetchError::Decode("expected value".to_string()));

        let text = ConsoleFormatter::format_load_error(&error);

        assert!(text.contains("Failed to parse API response"));
        assert!(!text.contains("Hint:"));
    }

    #[test]
    fn test_pause_reads_one_line() {
        let mut input = Cursor::new("\nleftover\n");
        let mut output = Vec::new();

        pause_before_exit(&mut input, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "\nPress Enter to exit...");
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_pause_accepts_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(pause_before_exit(&mut input, &mut output).is_ok());
    }
}

//! Line-oriented console quiz
//!
//! Implements [`QuizInteraction`] over any `BufRead`/`Write` pair so the
//! same code drives stdin/stdout in the binary and in-memory buffers in
//! tests.
//!
//! ```text
//! Q1. Is 1+1=2?
//!   1) True
//!   2) False
//! Enter choice number: abc
//! Please enter a number between 1 and 2.
//! Enter choice number: 1
//! ✓ Correct!
//! ```

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use trivia_application::{InteractionError, QuizInteraction};
use trivia_domain::{AnswerOutcome, Question};

const CHOICE_PROMPT: &str = "Enter choice number: ";

/// Parse one input line into a 1-based choice
///
/// Surrounding whitespace is ignored; anything other than ASCII digits
/// in `1..=option_count` is rejected.
pub fn parse_choice(raw: &str, option_count: usize) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=option_count).contains(choice))
}

/// Console adapter for the quiz loop
pub struct ConsoleQuiz<R, W> {
    input: R,
    output: W,
}

impl ConsoleQuiz<StdinLock<'static>, Stdout> {
    /// Quiz bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleQuiz<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the input so the caller can keep reading from it
    pub fn into_input(self) -> R {
        self.input
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn metadata_line(question: &Question) -> Option<String> {
        match (question.category(), question.difficulty()) {
            (Some(category), Some(difficulty)) => Some(format!("[{} | {}]", category, difficulty)),
            (Some(category), None) => Some(format!("[{}]", category)),
            (None, Some(difficulty)) => Some(format!("[{}]", difficulty)),
            (None, None) => None,
        }
    }
}

impl<R: BufRead, W: Write> QuizInteraction for ConsoleQuiz<R, W> {
    fn start(&mut self, total: usize) -> Result<(), InteractionError> {
        writeln!(self.output, "{}", ConsoleFormatter::header("Quiz"))?;
        writeln!(self.output, "{} questions. Answer with the option number.", total)?;
        Ok(())
    }

    fn present(&mut self, number: usize, question: &Question) -> Result<(), InteractionError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} {}",
            format!("Q{}.", number).bold(),
            question.prompt()
        )?;
        if let Some(meta) = Self::metadata_line(question) {
            writeln!(self.output, "    {}", meta.dimmed())?;
        }
        for (i, option) in question.options().iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }
        Ok(())
    }

    fn read_choice(&mut self, option_count: usize) -> Result<usize, InteractionError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", CHOICE_PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(InteractionError::InputClosed);
            }

            match parse_choice(&line, option_count) {
                Some(choice) => return Ok(choice),
                None => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    option_count
                )?,
            }
        }
    }

    fn show_outcome(
        &mut self,
        _question: &Question,
        outcome: &AnswerOutcome,
    ) -> Result<(), InteractionError> {
        match outcome {
            AnswerOutcome::Correct => writeln!(self.output, "{}", "✓ Correct!".green())?,
            AnswerOutcome::Wrong { correct } => writeln!(
                self.output,
                "{}",
                format!("✗ Wrong. Correct: {}", correct).red()
            )?,
        }
        Ok(())
    }
}

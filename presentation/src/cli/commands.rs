//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trivia_domain::{Difficulty, ProgressMode, QuestionType};

/// Fetch progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressArg {
    /// One line before and after the request
    Plain,
    /// Animated spinner
    Spinner,
    /// No progress output
    None,
}

impl From<ProgressArg> for ProgressMode {
    fn from(arg: ProgressArg) -> Self {
        match arg {
            ProgressArg::Plain => ProgressMode::Plain,
            ProgressArg::Spinner => ProgressMode::Spinner,
            ProgressArg::None => ProgressMode::None,
        }
    }
}

/// CLI arguments for trivia-quiz
#[derive(Parser, Debug)]
#[command(name = "trivia-quiz")]
#[command(author, version, about = "Terminal trivia quiz powered by Open Trivia DB")]
#[command(long_about = r#"
Trivia Quiz fetches a batch of questions from Open Trivia DB and asks them
one at a time. Answer each question by typing the number of your choice.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. TRIVIA_* environment variables (e.g. TRIVIA_API__AMOUNT=5)
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-quiz/config.toml   Global config

Example:
  trivia-quiz
  trivia-quiz -n 5 --difficulty easy
  trivia-quiz --type boolean --category 9
"#)]
pub struct Cli {
    /// Number of questions to fetch (1-50)
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=50))]
    pub amount: Option<u32>,

    /// Open Trivia DB category id
    #[arg(long, value_name = "ID")]
    pub category: Option<u32>,

    /// Question difficulty: easy, medium or hard
    #[arg(long, value_name = "LEVEL")]
    pub difficulty: Option<Difficulty>,

    /// Question type: boolean or multiple
    #[arg(long = "type", value_name = "TYPE")]
    pub question_type: Option<QuestionType>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// How to show fetch progress
    #[arg(long, value_enum, value_name = "MODE")]
    pub progress: Option<ProgressArg>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

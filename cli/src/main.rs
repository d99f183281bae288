//! CLI entrypoint for trivia-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_application::{LoadQuestionsInput, LoadQuestionsUseCase, RunQuizUseCase};
use trivia_domain::ProgressMode;
use trivia_infrastructure::{ConfigLoader, FileConfig, OpenTdbClient};
use trivia_presentation::{
    Cli, ConsoleFormatter, ConsoleQuiz, ScoreReport, pause_before_exit, progress_notifier,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = load_config(&cli)?;
    let issues = config.validate();
    apply_overrides(&cli, &mut config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(log_ansi(&config, io::stderr().is_terminal()))
        .with_writer(io::stderr)
        .init();

    for issue in issues {
        warn!("Config issue: {}", issue);
    }

    info!("Starting trivia-quiz");

    // === Dependency Injection ===
    let params = config.api.to_quiz_params();
    let request = config
        .api
        .to_api_request()
        .context("Invalid API configuration")?;
    let client = OpenTdbClient::new(request, params.request_timeout)
        .context("Failed to create HTTP client")?;
    let loader = LoadQuestionsUseCase::new(Arc::new(client));

    let progress = progress_notifier(config.output.progress);
    let loaded = loader
        .execute_with_progress(LoadQuestionsInput::new(params.amount), progress.as_ref())
        .await;

    let questions = match loaded {
        Ok(questions) => questions,
        Err(e) => {
            eprint!("{}", ConsoleFormatter::format_load_error(&e));
            pause(&config)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut quiz = ConsoleQuiz::stdio();
    let result = match RunQuizUseCase::new().execute(questions, &mut quiz) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("\n{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut stdin = quiz.into_input();
    let mut stdout = io::stdout();
    write!(stdout, "{}", ScoreReport::format(&result))?;
    if config.output.pause_on_exit {
        pause_before_exit(&mut stdin, &mut stdout)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config {
        // figment silently skips missing files
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

/// Command-line flags win over every config source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(amount) = cli.amount {
        config.api.amount = amount;
    }
    if let Some(category) = cli.category {
        config.api.category = Some(category);
    }
    if let Some(difficulty) = cli.difficulty {
        config.api.difficulty = Some(difficulty.as_str().to_string());
    }
    if let Some(question_type) = cli.question_type {
        config.api.question_type = Some(question_type.as_str().to_string());
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }
    if let Some(progress) = cli.progress {
        config.output.progress = ProgressMode::from(progress);
    }
    if cli.no_pause {
        config.output.pause_on_exit = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Log lines are colored only when color is enabled and stderr is a terminal
fn log_ansi(config: &FileConfig, stderr_is_terminal: bool) -> bool {
    config.output.color && stderr_is_terminal
}

fn pause(config: &FileConfig) -> Result<()> {
    if config.output.pause_on_exit {
        pause_before_exit(&mut io::stdin().lock(), &mut io::stdout())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{Difficulty, QuestionType};

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "trivia-quiz",
            "-n",
            "3",
            "--difficulty",
            "hard",
            "--type",
            "multiple",
            "--no-pause",
            "--progress",
            "none",
        ])
        .unwrap();
        let mut config = FileConfig::default();
        config.api.category = Some(9);

        apply_overrides(&cli, &mut config);

        assert_eq!(config.api.amount, 3);
        assert_eq!(config.api.category, Some(9));
        assert_eq!(config.api.parse_difficulty().0, Some(Difficulty::Hard));
        assert_eq!(config.api.parse_question_type().0, Some(QuestionType::Multiple));
        assert_eq!(config.output.progress, ProgressMode::None);
        assert!(!config.output.pause_on_exit);
        assert!(config.output.color);
    }

    #[test]
    fn test_no_color_disables_log_colors() {
        let cli = Cli::try_parse_from(["trivia-quiz", "--no-color"]).unwrap();
        let mut config = FileConfig::default();

        apply_overrides(&cli, &mut config);

        assert!(!config.output.color);
        assert!(!log_ansi(&config, true));
    }

    #[test]
    fn test_log_colors_follow_config_and_terminal() {
        let mut config = FileConfig::default();
        assert!(log_ansi(&config, true));
        assert!(!log_ansi(&config, false));

        config.output.color = false;
        assert!(!log_ansi(&config, true));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from([
            "trivia-quiz",
            "--config",
            "/nonexistent/trivia-quiz/config.toml",
        ])
        .unwrap();
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let cli = Cli::try_parse_from(["trivia-quiz", "--no-config"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), FileConfig::default());
    }
}

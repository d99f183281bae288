//! Configuration file loading for trivia-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `TRIVIA_API__AMOUNT=5`, `TRIVIA_OUTPUT__COLOR=false`, ...
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/trivia-quiz/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileApiConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;

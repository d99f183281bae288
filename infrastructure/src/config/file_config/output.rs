//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use trivia_domain::ProgressMode;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Wait for Enter before the process exits
    pub pause_on_exit: bool,
    /// How fetch progress is displayed
    pub progress: ProgressMode,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            pause_on_exit: true,
            progress: ProgressMode::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_deserialize() {
        let toml_str = r#"
[output]
progress = "none"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.progress, ProgressMode::None);
        assert!(config.output.color);
    }
}

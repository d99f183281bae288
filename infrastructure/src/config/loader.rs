//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "trivia-quiz";
const PROJECT_FILES: [&str; 2] = ["trivia.toml", ".trivia.toml"];
const ENV_PREFIX: &str = "TRIVIA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `TRIVIA_*` environment variables (`__` separates sections)
    /// 3. Project root: `./trivia.toml` or `./.trivia.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/trivia-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/trivia-quiz/config.toml if set,
    /// otherwise the platform's config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        println!("  [       ] Env:      {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:   {}", mark, path.display());
        }

        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point the global config lookup into the jail so the user's own file
    /// never leaks into a test.
    fn isolate_global_config(jail: &mut Jail) -> PathBuf {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        xdg.join(APP_DIR)
    }

    fn load(explicit: Option<&PathBuf>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(explicit).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.amount, 10);
        assert!(config.output.pause_on_exit);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("trivia-quiz"));
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);

            assert_eq!(load(None)?, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_merges_over_defaults() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("trivia.toml", "[api]\namount = 3\n\n[output]\ncolor = false")?;

            let config = load(None)?;

            assert_eq!(config.api.amount, 3);
            assert_eq!(config.api.timeout_secs, 10);
            assert!(!config.output.color);
            assert!(config.output.pause_on_exit);
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(".trivia.toml", "[api]\ncategory = 18")?;

            assert_eq!(load(None)?.api.category, Some(18));
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            let global_dir = isolate_global_config(jail);
            std::fs::create_dir_all(&global_dir).map_err(|e| e.to_string())?;
            std::fs::write(
                global_dir.join("config.toml"),
                "[api]\namount = 20\ncategory = 9",
            )
            .map_err(|e| e.to_string())?;
            jail.create_file("trivia.toml", "[api]\namount = 4")?;

            let config = load(None)?;

            assert_eq!(config.api.amount, 4);
            assert_eq!(config.api.category, Some(9));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("trivia.toml", "[api]\namount = 3\ntimeout_secs = 7")?;
            jail.set_env("TRIVIA_API__AMOUNT", "5");
            jail.set_env("TRIVIA_OUTPUT__COLOR", "false");

            let config = load(None)?;

            assert_eq!(config.api.amount, 5);
            assert_eq!(config.api.timeout_secs, 7);
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_env() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("custom.toml", "[api]\namount = 8")?;
            jail.set_env("TRIVIA_API__AMOUNT", "5");
            jail.set_env("TRIVIA_API__CATEGORY", "11");

            let config = load(Some(&PathBuf::from("custom.toml")))?;

            assert_eq!(config.api.amount, 8);
            assert_eq!(config.api.category, Some(11));
            Ok(())
        });
    }

    #[test]
    fn test_type_errors_are_reported() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("trivia.toml", "[api]\namount = \"ten\"")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}

// Rust guideline compliant 2026-10-18

//! Configuration management for t3c.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use t3c_commands::FileConfigurationManager;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "t3c.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Narrowest terminal width accepted as an override.
pub const MIN_TERMINAL_WIDTH: usize = 10;

/// Configuration for the t3c binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Installation directory.
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Settings file, relative to the project root.
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,

    /// Package states file that must exist too, relative to the project root.
    #[serde(default)]
    pub package_states_file: Option<PathBuf>,

    /// Maximum log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file; logs go to stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Fixed terminal width used instead of detection.
    #[serde(default)]
    pub terminal_width: Option<usize>,
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_settings_file() -> PathBuf {
    PathBuf::from("config/system/settings.php")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            settings_file: default_settings_file(),
            package_states_file: None,
            log_level: default_log_level(),
            log_file: None,
            terminal_width: None,
        }
    }
}

impl Config {
    /// Loads configuration from `dir/t3c.toml` and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. `t3c.toml` in `dir`, when present
    /// 3. Environment variables with `T3C_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let config = if path.exists() {
            Self::parse(&std::fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };
        config.finish()
    }

    /// Loads configuration from an explicit file, which must exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], plus an I/O error when the file is missing.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)?.finish()
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_env_overrides()?;
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `T3C_PROJECT_ROOT` - Installation directory
    /// - `T3C_LOG_LEVEL` - Maximum log level
    /// - `T3C_LOG_FILE` - Log file path
    /// - `T3C_TERMINAL_WIDTH` - Fixed terminal width
    ///
    /// # Errors
    ///
    /// Returns an error if `T3C_TERMINAL_WIDTH` is not a number.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("T3C_PROJECT_ROOT") {
            self.project_root = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("T3C_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("T3C_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("T3C_TERMINAL_WIDTH") {
            let width = val.parse().map_err(|_| {
                ConfigError::Invalid("T3C_TERMINAL_WIDTH must be a positive number".to_string())
            })?;
            self.terminal_width = Some(width);
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_level` is not one of error, warn, info, debug, trace
    /// - `terminal_width` is narrower than 10 columns
    fn validate(&self) -> Result<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if let Some(width) = self.terminal_width {
            if width < MIN_TERMINAL_WIDTH {
                return Err(ConfigError::Invalid(format!(
                    "terminal_width must be at least {}, got {}",
                    MIN_TERMINAL_WIDTH, width
                )));
            }
        }

        Ok(())
    }

    /// Builds the readiness check for the configured installation.
    pub fn configuration_manager(&self) -> FileConfigurationManager {
        FileConfigurationManager::new(
            &self.project_root,
            &self.settings_file,
            self.package_states_file.clone(),
        )
    }
}

// Rust guideline compliant 2026-10-16

//! Configuration management for commitgate.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the repository-level configuration file.
pub const CONFIG_FILE_NAME: &str = ".commitgate.toml";

/// How reported line numbers are counted across a batch of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineNumbering {
    /// One counter runs across every scanned file, never reset.
    #[default]
    Global,
    /// The counter restarts at 1 for each file.
    PerFile,
}

/// Settings for the external linter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Whether the linter pass runs at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Interpreter used both for the import check and for running the linter.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Importable module name of the linter, run as `<interpreter> -m <module>`.
    #[serde(default = "default_module")]
    pub module: String,

    /// Extra arguments placed before the file list.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_module() -> String {
    "flake8".to_string()
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interpreter: default_interpreter(),
            module: default_module(),
            args: Vec::new(),
        }
    }
}

/// Configuration for commitgate behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extension a staged path must end with to be checked.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Line counter mode used in violation reports.
    #[serde(default)]
    pub line_numbering: LineNumbering,

    /// External linter settings.
    #[serde(default)]
    pub linter: LinterConfig,
}

fn default_source_extension() -> String {
    ".py".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            line_numbering: LineNumbering::default(),
            linter: LinterConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. `.commitgate.toml` in `repo_root`
    /// 3. Environment variables with `COMMITGATE_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment override cannot be parsed
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("{}: {}", config_path.display(), e))
            })?;
            tracing::debug!(path = %config_path.display(), "loaded config file");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `COMMITGATE_SOURCE_EXTENSION` - Extension of checked files (e.g. `.py`)
    /// - `COMMITGATE_LINE_NUMBERING` - `global` or `per_file`
    /// - `COMMITGATE_LINTER_ENABLED` - Whether to run the linter (true/false)
    /// - `COMMITGATE_LINTER_INTERPRETER` - Interpreter executable
    /// - `COMMITGATE_LINTER_MODULE` - Linter module name
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("COMMITGATE_SOURCE_EXTENSION") {
            self.source_extension = val;
        }

        if let Ok(val) = std::env::var("COMMITGATE_LINE_NUMBERING") {
            self.line_numbering = match val.as_str() {
                "global" => LineNumbering::Global,
                "per_file" => LineNumbering::PerFile,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "COMMITGATE_LINE_NUMBERING must be global or per_file".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("COMMITGATE_LINTER_ENABLED") {
            self.linter.enabled = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "COMMITGATE_LINTER_ENABLED must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("COMMITGATE_LINTER_INTERPRETER") {
            self.linter.interpreter = val;
        }

        if let Ok(val) = std::env::var("COMMITGATE_LINTER_MODULE") {
            self.linter.module = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `source_extension` does not start with `.` or is just `.`
    /// - `linter.interpreter` or `linter.module` is empty
    fn validate(&self) -> Result<()> {
        if !self.source_extension.starts_with('.') || self.source_extension.len() < 2 {
            return Err(crate::Error::InvalidConfig(format!(
                "source_extension must look like \".py\", got {:?}",
                self.source_extension
            )));
        }

        if self.linter.interpreter.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "linter.interpreter cannot be empty".to_string(),
            ));
        }

        if self.linter.module.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "linter.module cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `.commitgate.toml` in `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(repo_root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }

    /// Returns whether `path` carries the configured source extension.
    #[must_use]
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.to_str()
            .is_some_and(|name| name.ends_with(self.source_extension.as_str()))
    }
}

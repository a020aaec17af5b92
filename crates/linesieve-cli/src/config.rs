//! Configuration file management for the CLI.

use crate::error::{CliError, Result};
use linesieve_classifier::DEFAULT_CONCURRENCY;
use linesieve_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inference backend settings
    #[serde(default)]
    pub backend: BackendSettings,

    /// Filter settings
    #[serde(default)]
    pub filter: FilterSettings,
}

/// Inference backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Ollama base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Maximum classifications in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".linesieve").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(CliError::Config("backend.base_url cannot be empty".into()));
        }
        if self.backend.model.trim().is_empty() {
            return Err(CliError::Config("backend.model cannot be empty".into()));
        }
        if self.backend.timeout_secs == 0 {
            return Err(CliError::Config(
                "backend.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.filter.concurrency == 0 {
            return Err(CliError::Config(
                "filter.concurrency must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl BackendSettings {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:11434");
        assert_eq!(config.backend.model, "llama3.1:latest");
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
        assert_eq!(config.filter.concurrency, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [backend]
            model = "mistral:7b"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.model, "mistral:7b");
        assert_eq!(config.backend.base_url, "http://localhost:11434");
        assert_eq!(config.filter, FilterSettings::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            [backend]
            base_url = "http://gpu-box:11434"
            model = "qwen2.5:14b"
            timeout_secs = 120

            [filter]
            concurrency = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://gpu-box:11434");
        assert_eq!(config.backend.timeout_secs, 120);
        assert_eq!(config.filter.concurrency, 4);
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml("[backend\nmodel = ");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filter.concurrency = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.backend.model = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[filter]\nconcurrency = 2").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.filter.concurrency, 2);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\ntimeout_secs = 0").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);
    }
}

//! Runner configuration loaded from an optional TOML file.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "oop-demos.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Bold section headers in the runner output.
    pub color: bool,
    /// Default tracing level when `RUST_LOG` is not set.
    pub log_level: String,
    /// Demonstrations to run when none are named on the command line. Empty means all.
    pub demos: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_level: "warn".to_string(),
            demos: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Like [`RunnerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert!(config.color);
        assert_eq!(config.log_level, "warn");
        assert!(config.demos.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = RunnerConfig::from_toml("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = RunnerConfig::from_toml(
            r#"
            color = false
            log_level = "debug"
            demos = ["open-closed", "liskov-substitution"]
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.demos, vec!["open-closed", "liskov-substitution"]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = RunnerConfig::from_toml("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RunnerConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error_for_load() {
        let dir = TempDir::new().unwrap();
        let err = RunnerConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "color = [not toml").unwrap();
        let err = RunnerConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "demos = [\"traits\"]\n").unwrap();
        let config = RunnerConfig::load(&path).unwrap();
        assert_eq!(config.demos, vec!["traits"]);
        assert!(config.color);
    }
}

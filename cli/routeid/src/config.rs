//! Configuration loading for the CLI.
//!
//! The ID alphabet and raw length come from, in order of precedence:
//! - `--characters` / `--length` flags (or `ROUTEID_CHARACTERS` / `ROUTEID_LENGTH`)
//! - the file named by `--config` (or `ROUTEID_CONFIG`)
//! - `config.json` in the platform config directory
//! - built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use routeid::{Codec, IdConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "routeid", "routeid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Default config file path.
pub fn default_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Alphabet and raw ID length.
    #[serde(flatten)]
    pub id: IdConfig,
}

impl Config {
    /// Load config from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        debug!(path = %path.display(), length = config.id.length, "config loaded");
        Ok(config)
    }

    /// Apply flag and environment overrides.
    pub fn with_overrides(mut self, characters: Option<String>, length: Option<usize>) -> Self {
        if let Some(characters) = characters {
            self.id.characters = characters;
        }
        if let Some(length) = length {
            self.id.length = length;
        }
        self
    }

    /// Validate the config and build the codec.
    pub fn codec(&self) -> Result<Codec, CliError> {
        self.id.build().map_err(CliError::Config)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "characters": "0123456789abcdef", "length": 3 }"#).unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.id, IdConfig::new("0123456789abcdef", 3));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::default().with_overrides(Some("abc".to_string()), Some(5));
        assert_eq!(config.id.characters, "abc");
        assert_eq!(config.id.length, 5);

        let untouched = Config::default().with_overrides(None, None);
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn test_invalid_alphabet_is_config_error() {
        let config = Config::default().with_overrides(Some("aa".to_string()), None);
        assert!(matches!(config.codec(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_overflowing_length_is_config_error() {
        let config = Config::default().with_overrides(None, Some(usize::MAX));
        assert!(matches!(config.codec(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config::default().with_overrides(Some("xyz".to_string()), Some(4));

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}

use crate::keypad::Normalization;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self
            .directory
            .contacts_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            errors.push("directory.contacts_path must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: self.search.clone(),
            directory: DirectorySettings {
                contacts_path: match &self.directory.contacts_path {
                    Some(path) if path.as_os_str().is_empty() => {
                        defaults.directory.contacts_path
                    }
                    other => other.clone(),
                },
            },
        }
    }
}

/// Keypad search settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Whether accented letters are folded to their base letter when indexing.
    #[serde(default)]
    pub normalization: Normalization,
    /// Re-check only the visible records when a query grows by appended digits.
    #[serde(default = "default_true")]
    pub incremental_narrowing: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            incremental_narrowing: true,
        }
    }
}

/// Where contacts are read from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

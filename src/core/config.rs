//! Configuration file management.
//!
//! Handles reading the optional `config.toml` and resolving which backing
//! file the store should use.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration stored in `<config_dir>/passkeep/config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backing file settings
    #[serde(default)]
    pub vault: VaultSection,
}

/// `[vault]` section of the configuration
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSection {
    /// Path to the credentials file. Relative paths resolve against the
    /// working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Location of the config file.
    ///
    /// `PASSKEEP_CONFIG` wins; otherwise the platform config directory.
    /// `None` if neither is available.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load the config from its default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be used.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(vault = ?config.vault.path, "config loaded");
        Ok(config)
    }

    /// Pick the backing file.
    ///
    /// An explicit path (from `--file` or `PASSKEEP_FILE`) beats the config
    /// file, which beats `passwords.csv` in the working directory.
    pub fn vault_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.vault.path.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_VAULT_FILE))
    }
}

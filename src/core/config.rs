//! Configuration file management.
//!
//! Reads the optional `config.toml` holding default cipher, prompting and
//! log-file settings. A missing file means defaults everywhere.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::CipherType;
use crate::error::{ConfigError, Result};

/// Settings loaded from `config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub log: LogConfig,
}

/// `[defaults]` section.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Cipher type used when none is given, e.g. `aes-256-cbc`.
    pub cipher: Option<String>,
    /// Whether decryption may block on the terminal for missing values.
    pub interactive: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            cipher: None,
            interactive: true,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Append log records to this file.
    pub file: Option<PathBuf>,
    /// Level for the file sink, e.g. `info` or `debug`.
    pub level: Option<String>,
}

impl Config {
    /// Where the config file is looked for.
    ///
    /// `OPENCRYPT_CONFIG` wins, then the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` for an
    /// unreadable or malformed file, and `ConfigError::InvalidCipher` if the
    /// default cipher does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an existing file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    /// Check that the configured default cipher parses.
    pub fn validate(&self) -> Result<()> {
        self.default_cipher().map(|_| ())
    }

    /// Default cipher: the configured one or `aes-256-cbc`.
    pub fn default_cipher(&self) -> Result<CipherType> {
        let raw = self
            .defaults
            .cipher
            .as_deref()
            .unwrap_or(constants::DEFAULT_CIPHER);
        raw.parse::<CipherType>()
            .map_err(|e| ConfigError::InvalidCipher(e.to_string()).into())
    }
}

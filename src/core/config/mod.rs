//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. An explicit path (`--config`)
//! 2. `$SHOESTOCK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/shoestock/config.toml`
//! 4. `~/.shoestock/config.toml` (canonical write location)
//!
//! An explicit path that does not exist is an error. Missing files in the
//! other locations just mean defaults.
//!
//! # Example
//!
//! ```no_run
//! use shoestock::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Inventory: {}", config.inventory_file().display());
//! println!("Prefix: {}", config.code_prefix());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::shoe::DEFAULT_CODE_PREFIX;
use crate::core::store::write_atomic;

/// Inventory file used when nothing else is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SHOESTOCK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub file: FileConfig,
    /// Path the file was loaded from, if any
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration, optionally from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation, or if `explicit` names a missing file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from(path);
        }

        match Self::discover() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(Self {
            file,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the standard locations.
    fn discover() -> Option<PathBuf> {
        let candidates = [
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME")
                .map(|xdg| PathBuf::from(xdg).join("shoestock/config.toml")),
            dirs::home_dir().map(|home| home.join(".shoestock/config.toml")),
        ];
        candidates.into_iter().flatten().find(|p| p.exists())
    }

    /// Get the canonical path for the user config.
    ///
    /// Returns `~/.shoestock/config.toml`.
    pub fn user_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".shoestock/config.toml"))
    }

    /// Path that `config set` should write to: the file this config came
    /// from, or the canonical location if none was loaded.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.loaded_from {
            Some(path) => Ok(path.clone()),
            None => Self::user_config_path(),
        }
    }

    /// Validate `config` and write it to `path`, creating parent
    /// directories as needed. The file is replaced atomically.
    pub fn write(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let write_err = |source: std::io::Error| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        write_atomic(path, contents.as_bytes()).map_err(write_err)?;
        debug!(path = %path.display(), "wrote config");
        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the inventory file path.
    ///
    /// Defaults to `inventory.txt` in the working directory.
    pub fn inventory_file(&self) -> PathBuf {
        self.file
            .inventory_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_FILE))
    }

    /// Get the shoe code prefix.
    ///
    /// Defaults to `SKU`.
    pub fn code_prefix(&self) -> &str {
        self.file
            .code_prefix
            .as_deref()
            .unwrap_or(DEFAULT_CODE_PREFIX)
    }

    /// Get the effective value of a key, defaults applied.
    pub fn value(&self, key: &str) -> Result<String, ConfigError> {
        // rejects unknown keys
        self.file.get(key)?;
        Ok(match key {
            "inventory_file" => self.inventory_file().display().to_string(),
            _ => self.code_prefix().to_string(),
        })
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

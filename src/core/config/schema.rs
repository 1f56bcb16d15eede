//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing. The code prefix ends up inside
//! comma-separated rows, so it may not contain a comma or a line break.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration file.
///
/// # Example
///
/// ```toml
/// inventory_file = "/srv/stock/inventory.txt"
/// code_prefix = "SKU"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path of the inventory file
    pub inventory_file: Option<String>,

    /// Literal every shoe code starts with
    pub code_prefix: Option<String>,
}

impl FileConfig {
    /// Keys accepted by `config get` / `config set`.
    pub const KEYS: &'static [&'static str] = &["inventory_file", "code_prefix"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(file) = &self.inventory_file {
            if file.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "inventory_file cannot be empty".to_string(),
                ));
            }
        }

        if let Some(prefix) = &self.code_prefix {
            if prefix.contains(&[',', '\n', '\r'][..]) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid code_prefix '{}': must not contain commas or line breaks",
                    prefix.escape_default()
                )));
            }
        }

        Ok(())
    }

    /// Read a value by key.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match key {
            "inventory_file" => Ok(self.inventory_file.as_deref()),
            "code_prefix" => Ok(self.code_prefix.as_deref()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by key, validating the result.
    ///
    /// On error the config is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "inventory_file" => updated.inventory_file = Some(value.to_string()),
            "code_prefix" => updated.code_prefix = Some(value.to_string()),
            _ => return Err(unknown_key(key)),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown configuration key '{}', must be one of: {}",
        key,
        FileConfig::KEYS.join(", ")
    ))
}

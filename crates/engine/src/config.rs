//! Database configuration via `nestkv.toml`
//!
//! All settings are optional; a missing file or missing field falls back
//! to the defaults in [`nestkv_core::limits`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use nestkv_core::limits::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_KEY_BYTES, DEFAULT_MAX_VALUE_BYTES};
use nestkv_core::{Error, Limits, Result};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "nestkv.toml";

/// Database configuration loaded from `nestkv.toml`.
///
/// # Example
///
/// ```toml
/// max_key_bytes = 32768
/// max_value_bytes = 2147483646
/// max_depth = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestConfig {
    /// Maximum key and container name length in bytes
    #[serde(default = "default_max_key_bytes")]
    pub max_key_bytes: usize,
    /// Maximum value length in bytes
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
    /// Maximum container nesting depth
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_key_bytes() -> usize {
    DEFAULT_MAX_KEY_BYTES
}

fn default_max_value_bytes() -> usize {
    DEFAULT_MAX_VALUE_BYTES
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            max_key_bytes: default_max_key_bytes(),
            max_value_bytes: default_max_value_bytes(),
            max_depth: default_max_depth(),
        }
    }
}

impl NestConfig {
    /// Validate the settings and convert them into store limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the key length or depth limit is zero.
    pub fn limits(&self) -> Result<Limits> {
        if self.max_key_bytes == 0 {
            return Err(Error::Config(format!(
                "Invalid max_key_bytes 0 in {}. Keys need at least one byte.",
                CONFIG_FILE_NAME
            )));
        }
        if self.max_depth == 0 {
            return Err(Error::Config(format!(
                "Invalid max_depth 0 in {}. At least one level of containers is required.",
                CONFIG_FILE_NAME
            )));
        }
        Ok(Limits {
            max_key_bytes: self.max_key_bytes,
            max_value_bytes: self.max_value_bytes,
            max_depth: self.max_depth,
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# nestkv configuration
#
# Maximum key and container name length in bytes (default: 32768)
max_key_bytes = 32768

# Maximum value length in bytes (default: 2147483646)
max_value_bytes = 2147483646

# Maximum container nesting depth below the root (default: 64)
max_depth = 64
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: NestConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.limits()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

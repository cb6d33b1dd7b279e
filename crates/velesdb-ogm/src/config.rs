//! `VelesDB` OGM configuration.
//!
//! Mapping rules can be tuned through a `velesdb-ogm.toml` file or
//! environment variables, on top of the defaults.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`VELESDB_OGM_*`)
//! 2. Configuration file (`velesdb-ogm.toml`)
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest accepted value for `mapping.max_name_length`.
pub const MAX_NAME_LENGTH_LIMIT: usize = 65_535;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Mapping rules applied when validating descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Reject vertex and edge types without a primary key field.
    pub require_primary_key: bool,
    /// Reject map-typed fields that are not tagged `properties`.
    pub reject_untagged_maps: bool,
    /// Maximum length of an external name in bytes (0 = unlimited).
    pub max_name_length: usize,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            require_primary_key: false,
            reject_untagged_maps: false,
            max_name_length: 255,
        }
    }
}

impl MappingConfig {
    /// Strict rules: primary keys required, maps must be tagged `properties`.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_primary_key: true,
            reject_untagged_maps: true,
            ..Self::default()
        }
    }
}

/// Main OGM configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgmConfig {
    /// Mapping rules.
    pub mapping: MappingConfig,
}

impl OgmConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("velesdb-ogm.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("VELESDB_OGM_").split("__"));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded OGM configuration");
        Ok(config)
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mapping.max_name_length > MAX_NAME_LENGTH_LIMIT {
            return Err(ConfigError::InvalidValue {
                key: "mapping.max_name_length".to_string(),
                message: format!(
                    "value {} is out of range [0, {MAX_NAME_LENGTH_LIMIT}]",
                    self.mapping.max_name_length
                ),
            });
        }

        Ok(())
    }
}

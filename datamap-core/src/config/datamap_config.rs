//! Top-level datamap configuration with layered resolution.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CompletionConfig, MatchingConfig, ObservabilityConfig, PathConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DATAMAP_*`)
/// 2. Config file passed to [`DatamapConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatamapConfig {
    pub matching: MatchingConfig,
    pub completion: CompletionConfig,
    pub paths: PathConfig,
    pub observability: ObservabilityConfig,
}

impl DatamapConfig {
    /// Load from a TOML file, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        let mut config: DatamapConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DatamapConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DatamapConfig) -> Result<(), ConfigError> {
        if config.paths.max_path_length == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "paths.max_path_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = config.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `DATAMAP_LOG_LEVEL`, `DATAMAP_MAX_PATH_LENGTH`, `DATAMAP_NARRATE`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(config: &mut DatamapConfig) {
        if let Ok(val) = std::env::var("DATAMAP_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("DATAMAP_MAX_PATH_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.paths.max_path_length = v;
            }
        }
        if let Ok(val) = std::env::var("DATAMAP_NARRATE") {
            if let Ok(v) = val.parse::<bool>() {
                config.matching.narrate = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

//! Layered configuration: every section falls back to [`defaults`] for
//! anything the TOML source leaves out.

pub mod defaults;
mod observability_config;
mod rate_config;
mod weights_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use rate_config::RateConfig;
pub use weights_config::{EmptyPoolPolicy, WeightsConfig};

use crate::errors::ConfigError;

/// Top-level configuration for both engines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub weights: WeightsConfig,
    pub rate: RateConfig,
    pub observability: ObservabilityConfig,
}

impl MixerConfig {
    /// Parse and validate a TOML document. An empty document yields the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::parse(source, "<inline>")
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&source, &display)
    }

    /// Render the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reject values the engines cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.global_total == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "weights.global_total".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.rate.poll_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "rate.poll_interval_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !self.rate.idle_decay_secs.is_finite() || self.rate.idle_decay_secs < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "rate.idle_decay_secs".to_string(),
                message: format!(
                    "expected a non-negative number of seconds, got {}",
                    self.rate.idle_decay_secs
                ),
            });
        }
        Ok(())
    }

    fn parse(source: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

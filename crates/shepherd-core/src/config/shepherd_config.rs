//! Top-level configuration with file + environment resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FactCheckConfig, MonitoringConfig, ObservabilityConfig, OrchestratorConfig};
use crate::constants::{MAX_INTERVAL_SECS, MAX_RETENTION_DAYS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SHEPHERD_*`)
/// 2. Config file passed to [`ShepherdConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShepherdConfig {
    pub monitoring: MonitoringConfig,
    pub orchestrator: OrchestratorConfig,
    pub fact_check: FactCheckConfig,
    pub observability: ObservabilityConfig,
}

impl ShepherdConfig {
    /// Load configuration from `path` (if it exists), apply environment
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShepherdConfig) -> Result<(), ConfigError> {
        if config.monitoring.max_events == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "monitoring.max_events".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.monitoring.max_events > crate::constants::MAX_LEDGER_CAPACITY {
            return Err(ConfigError::ValidationFailed {
                field: "monitoring.max_events".to_string(),
                message: format!(
                    "must not exceed {}",
                    crate::constants::MAX_LEDGER_CAPACITY
                ),
            });
        }
        if config.monitoring.retention_days <= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "monitoring.retention_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.monitoring.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::ValidationFailed {
                field: "monitoring.retention_days".to_string(),
                message: format!("must not exceed {MAX_RETENTION_DAYS}"),
            });
        }
        for (field, value) in [
            (
                "monitoring.alert_check_interval_secs",
                config.monitoring.alert_check_interval_secs,
            ),
            (
                "monitoring.cleanup_interval_secs",
                config.monitoring.cleanup_interval_secs,
            ),
        ] {
            if !(0..=MAX_INTERVAL_SECS).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be between 0 and {MAX_INTERVAL_SECS}"),
                });
            }
        }
        if config.orchestrator.provider_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "orchestrator.provider_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.fact_check.high_confidence_threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "fact_check.high_confidence_threshold".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut ShepherdConfig) {
        if let Ok(val) = std::env::var("SHEPHERD_MAX_EVENTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.monitoring.max_events = v;
            }
        }
        if let Ok(val) = std::env::var("SHEPHERD_RETENTION_DAYS") {
            if let Ok(v) = val.parse::<i64>() {
                config.monitoring.retention_days = v;
            }
        }
        if let Ok(val) = std::env::var("SHEPHERD_PROVIDER_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.orchestrator.provider_timeout_ms = v;
            }
        }
        if let Ok(val) = std::env::var("SHEPHERD_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}

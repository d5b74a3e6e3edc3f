use serde::{Deserialize, Serialize};

use crate::constants::MAX_ALERT_WINDOW_MINUTES;
use crate::errors::ConfigError;

/// Condition an alert rule evaluates over its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertCondition {
    ErrorRateExceeds,
    ValidationFailureRateExceeds,
    FallbackRateExceeds,
    /// Threshold is in seconds of average response time.
    ResponseTimeExceeds,
    /// Threshold is the number N of most recent responses that must all be failures.
    ConsecutiveFailures,
}

/// A threshold rule over a sliding time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: String,
    pub name: String,
    pub condition: AlertCondition,
    pub threshold: f64,
    pub window_minutes: i64,
    pub is_active: bool,
}

impl AlertRule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        condition: AlertCondition,
        threshold: f64,
        window_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            condition,
            threshold,
            window_minutes,
            is_active: true,
        }
    }

    /// Check the window is one the monitor can evaluate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ALERT_WINDOW_MINUTES).contains(&self.window_minutes) {
            return Err(ConfigError::ValidationFailed {
                field: format!("alert_rule.{}.window_minutes", self.id),
                message: format!("must be between 1 and {MAX_ALERT_WINDOW_MINUTES}"),
            });
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: format!("alert_rule.{}.threshold", self.id),
                message: "must be a finite number".to_string(),
            });
        }
        Ok(())
    }

    /// The built-in rule set installed on startup.
    pub fn defaults() -> Vec<AlertRule> {
        vec![
            AlertRule::new(
                "high_error_rate",
                "High Error Rate",
                AlertCondition::ErrorRateExceeds,
                0.1,
                5,
            ),
            AlertRule::new(
                "validation_failures",
                "Validation Failures",
                AlertCondition::ValidationFailureRateExceeds,
                0.2,
                15,
            ),
            AlertRule::new(
                "high_fallback_usage",
                "High Fallback Usage",
                AlertCondition::FallbackRateExceeds,
                0.3,
                15,
            ),
            AlertRule::new(
                "slow_responses",
                "Slow Responses",
                AlertCondition::ResponseTimeExceeds,
                5.0,
                5,
            ),
            AlertRule::new(
                "consecutive_failures",
                "Consecutive Failures",
                AlertCondition::ConsecutiveFailures,
                5.0,
                10,
            ),
        ]
    }
}

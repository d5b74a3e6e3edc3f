use serde::{Deserialize, Serialize};

use super::defaults;

/// Monitoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Ledger capacity; oldest events are evicted past this.
    pub max_events: usize,
    /// Events older than this are purged by the cleanup sweep.
    pub retention_days: i64,
    /// Minimum seconds between two alert evaluations.
    pub alert_check_interval_secs: i64,
    /// Minimum seconds between two retention sweeps.
    pub cleanup_interval_secs: i64,
    /// Install the built-in alert rules on startup.
    pub install_default_rules: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            max_events: defaults::DEFAULT_MAX_EVENTS,
            retention_days: defaults::DEFAULT_RETENTION_DAYS,
            alert_check_interval_secs: defaults::DEFAULT_ALERT_CHECK_INTERVAL_SECS,
            cleanup_interval_secs: defaults::DEFAULT_CLEANUP_INTERVAL_SECS,
            install_default_rules: defaults::DEFAULT_INSTALL_DEFAULT_RULES,
        }
    }
}

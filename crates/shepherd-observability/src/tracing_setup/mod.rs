//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use shepherd_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "SHEPHERD_LOG";

/// Initialize with the default observability settings.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize with an explicit filter string, ignoring `SHEPHERD_LOG`.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize from configuration: JSON or human-readable output at `level`,
/// unless `SHEPHERD_LOG` overrides the filter.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Every entry point ends here. Only the first install in a process wins;
/// later calls are logged and ignored.
fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

//! # shepherd-observability
//!
//! The monitoring ledger and counters, threshold alerting over sliding
//! windows, metrics export, a human-readable health report, and structured
//! tracing setup.

pub mod alerts;
pub mod export;
pub mod health;
pub mod ledger;
pub mod metrics;
pub mod notifier;
pub mod service;
pub mod tracing_setup;

pub use alerts::{AlertEngine, AlertTransition};
pub use health::HealthStatus;
pub use ledger::EventLedger;
pub use metrics::MetricsCollector;
pub use notifier::TracingNotifier;
pub use service::{MonitoringService, ResponseRecord};

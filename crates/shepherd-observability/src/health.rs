//! Human-readable health report.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use shepherd_core::models::AiMetrics;

/// Error rate above which the service is reported unhealthy.
const UNHEALTHY_ERROR_RATE: f64 = 0.25;
/// Error rate above which the service is reported degraded.
const DEGRADED_ERROR_RATE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Unhealthy on a high error rate, degraded on a raised error rate or any
    /// active alert, healthy otherwise.
    pub fn derive(metrics: &AiMetrics, active_alerts: usize) -> Self {
        if metrics.error_rate > UNHEALTHY_ERROR_RATE {
            HealthStatus::Unhealthy
        } else if active_alerts > 0 || metrics.error_rate > DEGRADED_ERROR_RATE {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Degraded => "DEGRADED",
            HealthStatus::Unhealthy => "UNHEALTHY",
        }
    }
}

/// Render the multi-line report.
pub fn render(metrics: &AiMetrics, active_alert_names: &[String]) -> String {
    let status = HealthStatus::derive(metrics, active_alert_names.len());
    let alerts = if active_alert_names.is_empty() {
        "none".to_string()
    } else {
        active_alert_names.join(", ")
    };

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "AI Service Health: {}", status.as_str());
    let _ = writeln!(out, "Total requests: {}", metrics.total_requests);
    let _ = writeln!(out, "Successful responses: {}", metrics.successful_responses);
    let _ = writeln!(out, "Errors recorded: {}", metrics.error_count);
    let _ = writeln!(out, "Error rate: {:.1}%", metrics.error_rate * 100.0);
    let _ = writeln!(
        out,
        "Validation pass rate: {:.1}%",
        metrics.validation_pass_rate * 100.0
    );
    let _ = writeln!(out, "Validation failures: {}", metrics.validation_failures);
    let _ = writeln!(out, "Fallbacks used: {}", metrics.fallbacks_used);
    let _ = writeln!(
        out,
        "Average response time: {:.2}s",
        metrics.average_response_time.as_secs_f64()
    );
    let _ = write!(out, "Active alerts: {alerts}");
    out
}

//! JSON export for ops tooling.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use shepherd_core::errors::{ShepherdError, ShepherdResult};
use shepherd_core::models::AiMetrics;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedMetrics {
    total_requests: u64,
    successful_responses: u64,
    validation_failures: u64,
    fallbacks_used: u64,
    error_count: u64,
    /// Seconds.
    average_response_time: f64,
    error_rate: f64,
    validation_pass_rate: f64,
}

#[derive(Debug, Serialize)]
struct TypeCount {
    #[serde(rename = "type")]
    kind: &'static str,
    count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsExport {
    metrics: ExportedMetrics,
    content_types: Vec<TypeCount>,
    issues: Vec<TypeCount>,
    active_alerts: Vec<String>,
    timestamp: String,
}

/// Build the export document from a metrics snapshot.
pub fn build(
    metrics: &AiMetrics,
    active_alert_names: Vec<String>,
    now: DateTime<Utc>,
) -> ShepherdResult<serde_json::Value> {
    let doc = MetricsExport {
        metrics: ExportedMetrics {
            total_requests: metrics.total_requests,
            successful_responses: metrics.successful_responses,
            validation_failures: metrics.validation_failures,
            fallbacks_used: metrics.fallbacks_used,
            error_count: metrics.error_count,
            average_response_time: metrics.average_response_time.as_secs_f64(),
            error_rate: metrics.error_rate,
            validation_pass_rate: metrics.validation_pass_rate,
        },
        content_types: metrics
            .content_type_counts
            .iter()
            .map(|(ct, count)| TypeCount {
                kind: ct.as_str(),
                count: *count,
            })
            .collect(),
        issues: metrics
            .issue_counts
            .iter()
            .map(|(kind, count)| TypeCount {
                kind: kind.as_str(),
                count: *count,
            })
            .collect(),
        active_alerts: active_alert_names,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    serde_json::to_value(doc).map_err(ShepherdError::SerializationError)
}

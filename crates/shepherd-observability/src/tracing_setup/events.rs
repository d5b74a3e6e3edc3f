//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a request entering the ledger.
pub fn request_recorded(event_id: &str, content_type: &str) {
    tracing::debug!(
        event = "request_recorded",
        event_id = %event_id,
        content_type = %content_type,
        "request recorded"
    );
}

/// Log a completed response.
pub fn response_recorded(event_id: &str, success: bool, response_ms: u64, fallback_used: bool) {
    tracing::debug!(
        event = "response_recorded",
        event_id = %event_id,
        success = success,
        response_ms = response_ms,
        fallback_used = fallback_used,
        "response recorded"
    );
}

/// Log a failed or timed-out provider call.
pub fn provider_failed(operation: &str, error: &str) {
    tracing::warn!(
        event = "provider_failed",
        operation = %operation,
        error = %error,
        "provider call failed"
    );
}

/// Log generated content failing a check.
pub fn validation_failed(content_type: &str, reason: &str) {
    tracing::info!(
        event = "validation_failed",
        content_type = %content_type,
        reason = %reason,
        "content failed validation"
    );
}

/// Log a fallback substitution.
pub fn fallback_used(content_type: &str, cause: &str) {
    tracing::info!(
        event = "fallback_used",
        content_type = %content_type,
        cause = %cause,
        "fallback content substituted"
    );
}

/// Log an alert entering the active set.
pub fn alert_triggered(rule_id: &str, name: &str, observed: f64, threshold: f64) {
    tracing::warn!(
        event = "alert_triggered",
        rule_id = %rule_id,
        name = %name,
        observed = observed,
        threshold = threshold,
        "alert triggered"
    );
}

/// Log an alert leaving the active set.
pub fn alert_resolved(rule_id: &str, name: &str) {
    tracing::info!(
        event = "alert_resolved",
        rule_id = %rule_id,
        name = %name,
        "alert resolved"
    );
}

/// Log a retention sweep.
pub fn events_purged(purged: usize, retained: usize) {
    tracing::info!(
        event = "events_purged",
        purged = purged,
        retained = retained,
        "expired events purged"
    );
}

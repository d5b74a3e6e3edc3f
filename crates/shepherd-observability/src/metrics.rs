//! Incremental counters. Rates are derived in [`MetricsCollector::snapshot`]
//! and never stored.

use std::collections::BTreeMap;
use std::time::Duration;

use shepherd_core::models::{AiMetrics, ContentIssue, ContentType, IssueKind};

#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    total_requests: u64,
    successful_responses: u64,
    validation_failures: u64,
    fallbacks_used: u64,
    error_count: u64,
    responses: u64,
    total_response_time: Duration,
    content_types: BTreeMap<ContentType, u64>,
    issues: BTreeMap<IssueKind, u64>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&mut self, content_type: ContentType) {
        self.total_requests += 1;
        *self.content_types.entry(content_type).or_default() += 1;
    }

    pub fn record_response(
        &mut self,
        success: bool,
        response_time: Duration,
        validation_failed: bool,
        fallback_used: bool,
        issues: &[ContentIssue],
    ) {
        self.responses += 1;
        self.total_response_time += response_time;
        if success {
            self.successful_responses += 1;
        }
        if validation_failed {
            self.validation_failures += 1;
        }
        if fallback_used {
            self.fallbacks_used += 1;
        }
        for issue in issues {
            *self.issues.entry(issue.kind).or_default() += 1;
        }
    }

    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> AiMetrics {
        let error_rate = if self.total_requests == 0 {
            0.0
        } else {
            self.total_requests.saturating_sub(self.successful_responses) as f64
                / self.total_requests as f64
        };
        let validation_pass_rate = if self.total_requests == 0 {
            1.0
        } else {
            self.total_requests.saturating_sub(self.validation_failures) as f64
                / self.total_requests as f64
        };
        let average_response_time = match u32::try_from(self.responses) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total_response_time / n,
            Err(_) => Duration::from_secs_f64(
                self.total_response_time.as_secs_f64() / self.responses as f64,
            ),
        };

        AiMetrics {
            total_requests: self.total_requests,
            successful_responses: self.successful_responses,
            validation_failures: self.validation_failures,
            fallbacks_used: self.fallbacks_used,
            error_count: self.error_count,
            total_response_time: self.total_response_time,
            average_response_time,
            error_rate,
            validation_pass_rate,
            content_type_counts: sorted_counts(&self.content_types),
            issue_counts: sorted_counts(&self.issues),
        }
    }
}

fn sorted_counts<K: Copy + Ord>(counts: &BTreeMap<K, u64>) -> Vec<(K, u64)> {
    let mut out: Vec<(K, u64)> = counts.iter().map(|(k, v)| (*k, *v)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    out
}

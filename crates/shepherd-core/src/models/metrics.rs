use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ContentType, IssueKind};

/// Point-in-time view of the monitoring counters.
///
/// Rates are derived from the counters when the snapshot is taken and are
/// never stored between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiMetrics {
    pub total_requests: u64,
    pub successful_responses: u64,
    pub validation_failures: u64,
    pub fallbacks_used: u64,
    pub error_count: u64,
    pub total_response_time: Duration,
    pub average_response_time: Duration,
    pub error_rate: f64,
    pub validation_pass_rate: f64,
    /// Sorted by count descending, then by type.
    pub content_type_counts: Vec<(ContentType, u64)>,
    /// Sorted by count descending, then by kind.
    pub issue_counts: Vec<(IssueKind, u64)>,
}

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentIssue, ContentType, ValidationResult};

/// Lifecycle stage of a tracked event.
///
/// `Request` events are updated in place to `Response` once the outcome is
/// known; `Error` events are terminal and appended on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Request,
    Response,
    Validation,
    Fallback,
    Error,
}

/// One entry of the monitoring ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: EventType,
    pub content_type: ContentType,
    pub success: bool,
    pub validation_result: Option<ValidationResult>,
    pub response_time: Duration,
    pub fallback_used: bool,
    pub issues: Vec<ContentIssue>,
    pub metadata: BTreeMap<String, String>,
}

impl AiEvent {
    /// A pending request event with a fresh id.
    pub fn request(content_type: ContentType, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            event_type: EventType::Request,
            content_type,
            success: false,
            validation_result: None,
            response_time: Duration::ZERO,
            fallback_used: false,
            issues: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// A terminal error event.
    pub fn error(
        content_type: ContentType,
        timestamp: DateTime<Utc>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            event_type: EventType::Error,
            metadata,
            ..Self::request(content_type, timestamp)
        }
    }

    /// Whether this event is a completed response.
    pub fn is_response(&self) -> bool {
        self.event_type == EventType::Response
    }
}

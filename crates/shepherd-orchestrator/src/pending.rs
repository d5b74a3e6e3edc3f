//! A request event that must be completed exactly once.

use std::collections::BTreeMap;
use std::time::Duration;

use shepherd_core::constants::META_OPERATION;
use shepherd_core::errors::ProviderError;
use shepherd_core::models::ContentType;
use shepherd_observability::{MonitoringService, ResponseRecord};

/// Completes its request event on drop if the caller never did, so a
/// cancelled operation still leaves a failed response and an error event.
pub(crate) struct PendingRequest<'a> {
    monitor: &'a MonitoringService,
    id: String,
    content_type: ContentType,
    operation: &'static str,
    done: bool,
}

impl<'a> PendingRequest<'a> {
    pub(crate) fn open(
        monitor: &'a MonitoringService,
        content_type: ContentType,
        operation: &'static str,
    ) -> Self {
        let id = monitor.record_request(content_type);
        Self {
            monitor,
            id,
            content_type,
            operation,
            done: false,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub(crate) fn operation(&self) -> &'static str {
        self.operation
    }

    /// Record an error event tagged with this operation.
    pub(crate) fn record_error(&self, error: &ProviderError) {
        let mut metadata = BTreeMap::new();
        metadata.insert(META_OPERATION.to_string(), self.operation.to_string());
        self.monitor
            .record_error(self.content_type, &error.to_string(), metadata);
    }

    /// Record the response and return the event id.
    pub(crate) fn complete(mut self, record: ResponseRecord) -> String {
        self.done = true;
        let record = record.with_metadata(META_OPERATION, self.operation);
        self.monitor.record_response(&self.id, record);
        std::mem::take(&mut self.id)
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        tracing::debug!(
            event_id = %self.id,
            operation = self.operation,
            "operation dropped before completion"
        );
        self.record_error(&ProviderError::Cancelled);
        self.monitor.record_response(
            &self.id,
            ResponseRecord::new(false, Duration::ZERO).with_metadata(META_OPERATION, self.operation),
        );
    }
}

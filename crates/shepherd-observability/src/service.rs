//! MonitoringService: single owner of the ledger, counters, and alert state.
//!
//! All mutation goes through one `Mutex`. Notifier callbacks and log events
//! for alert transitions run after the lock is released.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use shepherd_core::config::MonitoringConfig;
use shepherd_core::constants::META_ERROR;
use shepherd_core::errors::{ShepherdError, ShepherdResult};
use shepherd_core::models::{
    AiEvent, AiMetrics, AlertRule, ContentIssue, ContentType, EventType, ValidationResult,
};
use shepherd_core::traits::IAlertNotifier;

use crate::alerts::{AlertEngine, AlertTransition};
use crate::ledger::EventLedger;
use crate::metrics::MetricsCollector;
use crate::notifier::TracingNotifier;
use crate::tracing_setup::events;
use crate::{export, health};

const COMPONENT: &str = "MonitoringService";

/// Outcome of a request, recorded against its event id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseRecord {
    pub success: bool,
    /// Time spent in the provider call only.
    pub response_time: Duration,
    pub validation_result: Option<ValidationResult>,
    pub fallback_used: bool,
    pub issues: Vec<ContentIssue>,
    pub metadata: BTreeMap<String, String>,
}

impl ResponseRecord {
    pub fn new(success: bool, response_time: Duration) -> Self {
        Self {
            success,
            response_time,
            ..Default::default()
        }
    }

    pub fn with_validation(mut self, result: ValidationResult) -> Self {
        self.validation_result = Some(result);
        self
    }

    pub fn with_fallback(mut self, fallback_used: bool) -> Self {
        self.fallback_used = fallback_used;
        self
    }

    pub fn with_issues(mut self, issues: Vec<ContentIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

struct MonitorState {
    ledger: EventLedger,
    metrics: MetricsCollector,
    alerts: AlertEngine,
    last_cleanup: DateTime<Utc>,
}

pub struct MonitoringService {
    config: MonitoringConfig,
    state: Mutex<MonitorState>,
    notifier: Arc<dyn IAlertNotifier>,
}

impl std::fmt::Debug for MonitoringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitoringService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for MonitoringService {
    fn default() -> Self {
        Self::new(MonitoringConfig::default())
    }
}

impl MonitoringService {
    /// Create a service that reports alert transitions through tracing.
    pub fn new(config: MonitoringConfig) -> Self {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    pub fn with_notifier(config: MonitoringConfig, notifier: Arc<dyn IAlertNotifier>) -> Self {
        let rules = if config.install_default_rules {
            AlertRule::defaults()
        } else {
            Vec::new()
        };
        let state = MonitorState {
            ledger: EventLedger::new(config.max_events),
            metrics: MetricsCollector::new(),
            alerts: AlertEngine::new(rules),
            last_cleanup: Utc::now(),
        };
        Self {
            config,
            state: Mutex::new(state),
            notifier,
        }
    }

    pub fn config(&self) -> &MonitoringConfig {
        &self.config
    }

    /// Lock for hot-path recording. A poisoned lock is recovered: a panic in
    /// one caller must not stop every later request from being counted.
    fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(component = COMPONENT, "monitoring lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Lock for administrative operations, which surface poisoning.
    fn lock_strict(&self) -> ShepherdResult<MutexGuard<'_, MonitorState>> {
        self.state.lock().map_err(|_| ShepherdError::LockPoisoned {
            component: COMPONENT.to_string(),
        })
    }

    // ── Recording ──────────────────────────────────────────────────────────

    /// Open a pending request event and return its id.
    pub fn record_request(&self, content_type: ContentType) -> String {
        self.record_request_at(content_type, Utc::now())
    }

    pub fn record_request_at(&self, content_type: ContentType, at: DateTime<Utc>) -> String {
        let event = AiEvent::request(content_type, at);
        let id = event.id.clone();
        {
            let mut state = self.lock();
            state.metrics.record_request(content_type);
            state.ledger.push(event);
        }
        events::request_recorded(&id, content_type.as_str());
        id
    }

    /// Complete the event `event_id`. Counters are updated even when the
    /// event has already been evicted; returns whether it was found.
    ///
    /// Also drives throttled alert evaluation and the retention sweep.
    pub fn record_response(&self, event_id: &str, record: ResponseRecord) -> bool {
        let now = Utc::now();
        let validation_failed = record
            .validation_result
            .as_ref()
            .is_some_and(|v| !v.is_valid);
        let (success, fallback_used, response_time) =
            (record.success, record.fallback_used, record.response_time);

        let (found, transitions, purged) = {
            let mut state = self.lock();
            state.metrics.record_response(
                record.success,
                record.response_time,
                validation_failed,
                record.fallback_used,
                &record.issues,
            );

            let found = match state.ledger.find_mut(event_id) {
                Some(event) => {
                    event.event_type = EventType::Response;
                    event.success = record.success;
                    event.response_time = record.response_time;
                    event.validation_result = record.validation_result;
                    event.fallback_used = record.fallback_used;
                    event.issues = record.issues;
                    event.metadata.extend(record.metadata);
                    true
                }
                None => false,
            };

            let transitions = self.maybe_evaluate(&mut state, now);
            let purged = self.maybe_cleanup(&mut state, now);
            (found, transitions, purged)
        };

        if !found {
            tracing::debug!(event_id = %event_id, "response for unknown or evicted event");
        }
        events::response_recorded(
            event_id,
            success,
            u64::try_from(response_time.as_millis()).unwrap_or(u64::MAX),
            fallback_used,
        );
        if let Some((purged, retained)) = purged {
            events::events_purged(purged, retained);
        }
        self.notify(transitions);
        found
    }

    /// Append a terminal error event. Needs no matching request.
    pub fn record_error(
        &self,
        content_type: ContentType,
        error: &str,
        metadata: BTreeMap<String, String>,
    ) -> String {
        self.record_error_at(content_type, error, metadata, Utc::now())
    }

    pub fn record_error_at(
        &self,
        content_type: ContentType,
        error: &str,
        mut metadata: BTreeMap<String, String>,
        at: DateTime<Utc>,
    ) -> String {
        metadata.insert(META_ERROR.to_string(), error.to_string());
        let event = AiEvent::error(content_type, at, metadata);
        let id = event.id.clone();
        let mut state = self.lock();
        state.metrics.record_error();
        state.ledger.push(event);
        id
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    pub fn get_metrics(&self) -> AiMetrics {
        self.lock().metrics.snapshot()
    }

    /// Up to `limit` events, newest first.
    pub fn get_recent_events(&self, limit: usize) -> Vec<AiEvent> {
        self.lock().ledger.recent(limit)
    }

    pub fn active_alerts(&self) -> Vec<AlertRule> {
        self.lock()
            .alerts
            .active_rules()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn rules(&self) -> Vec<AlertRule> {
        self.lock().alerts.rules().to_vec()
    }

    /// Metrics as a JSON document for ops tooling.
    pub fn export_metrics(&self) -> ShepherdResult<serde_json::Value> {
        let (metrics, alert_names) = self.metrics_and_alert_names();
        export::build(&metrics, alert_names, Utc::now())
    }

    /// Multi-line summary of the same figures plus active alert names.
    pub fn health_report(&self) -> String {
        let (metrics, alert_names) = self.metrics_and_alert_names();
        health::render(&metrics, &alert_names)
    }

    pub fn health_status(&self) -> health::HealthStatus {
        let (metrics, alert_names) = self.metrics_and_alert_names();
        health::HealthStatus::derive(&metrics, alert_names.len())
    }

    fn metrics_and_alert_names(&self) -> (AiMetrics, Vec<String>) {
        let state = self.lock();
        let names = state
            .alerts
            .active_rules()
            .into_iter()
            .map(|r| r.name.clone())
            .collect();
        (state.metrics.snapshot(), names)
    }

    // ── Alert rules ────────────────────────────────────────────────────────

    /// Add a rule, replacing any rule with the same id.
    /// Rules with a window outside 1 minute to 30 days are rejected.
    pub fn add_rule(&self, rule: AlertRule) -> ShepherdResult<()> {
        rule.validate()?;
        self.lock_strict()?.alerts.add_rule(rule);
        Ok(())
    }

    /// Remove a rule; if it was firing it leaves the active set silently.
    pub fn remove_rule(&self, id: &str) -> ShepherdResult<Option<AlertRule>> {
        Ok(self.lock_strict()?.alerts.remove_rule(id))
    }

    /// Zero every counter and clear the ledger and alert state. Rules are kept.
    pub fn reset_metrics(&self) -> ShepherdResult<()> {
        let mut state = self.lock_strict()?;
        state.metrics.reset();
        state.ledger.clear();
        state.alerts.reset_state();
        Ok(())
    }

    // ── Maintenance ────────────────────────────────────────────────────────

    /// Evaluate every rule now, ignoring the throttle.
    pub fn evaluate_alerts(&self) {
        self.evaluate_alerts_at(Utc::now());
    }

    pub fn evaluate_alerts_at(&self, now: DateTime<Utc>) {
        let transitions = {
            let mut state = self.lock();
            let state = &mut *state;
            state.alerts.evaluate(&state.ledger, now)
        };
        self.notify(transitions);
    }

    /// Purge events older than the retention horizon as of now.
    pub fn cleanup(&self) -> usize {
        self.purge_expired(Utc::now())
    }

    /// Purge events older than the retention horizon as of `now`.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let (purged, retained) = {
            let mut state = self.lock();
            let purged = self.purge(&mut state, now);
            (purged, state.ledger.len())
        };
        events::events_purged(purged, retained);
        purged
    }

    /// Throttled evaluation plus interval-gated cleanup, as run on every
    /// response and by the background task.
    pub fn run_maintenance(&self, now: DateTime<Utc>) {
        let (transitions, purged) = {
            let mut state = self.lock();
            (
                self.maybe_evaluate(&mut state, now),
                self.maybe_cleanup(&mut state, now),
            )
        };
        if let Some((purged, retained)) = purged {
            events::events_purged(purged, retained);
        }
        self.notify(transitions);
    }

    /// Run [`run_maintenance`](Self::run_maintenance) on a tokio interval of
    /// `alert_check_interval_secs`. Must be called inside a tokio runtime.
    pub fn spawn_maintenance(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(self);
        let period = Duration::from_secs(self.config.alert_check_interval_secs.max(1) as u64);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                service.run_maintenance(Utc::now());
            }
        })
    }

    fn maybe_evaluate(&self, state: &mut MonitorState, now: DateTime<Utc>) -> Vec<AlertTransition> {
        if !state.alerts.is_due(now, seconds(self.config.alert_check_interval_secs)) {
            return Vec::new();
        }
        state.alerts.evaluate(&state.ledger, now)
    }

    fn maybe_cleanup(&self, state: &mut MonitorState, now: DateTime<Utc>) -> Option<(usize, usize)> {
        if now - state.last_cleanup < seconds(self.config.cleanup_interval_secs) {
            return None;
        }
        let purged = self.purge(state, now);
        Some((purged, state.ledger.len()))
    }

    fn purge(&self, state: &mut MonitorState, now: DateTime<Utc>) -> usize {
        state.last_cleanup = now;
        // A horizon past the representable range keeps everything.
        let cutoff = chrono::Duration::try_days(self.config.retention_days)
            .and_then(|horizon| now.checked_sub_signed(horizon))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        state.ledger.purge_before(cutoff)
    }

    fn notify(&self, transitions: Vec<AlertTransition>) {
        for transition in transitions {
            match transition {
                AlertTransition::Triggered { rule, observed } => {
                    self.notifier.alert_triggered(&rule, observed)
                }
                AlertTransition::Resolved { rule } => self.notifier.alert_resolved(&rule),
            }
        }
    }
}

/// Interval from configured seconds, saturating instead of overflowing.
fn seconds(secs: i64) -> chrono::Duration {
    chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX)
}

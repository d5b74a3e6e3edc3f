//! MonitoringService tests: counters, alert hysteresis, retention, export.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use proptest::prelude::*;
use shepherd_core::config::MonitoringConfig;
use shepherd_core::models::{
    AiEvent, AlertCondition, AlertRule, ContentIssue, ContentType, EventType, IssueKind,
    Severity, ValidationResult,
};
use shepherd_core::errors::ShepherdError;
use shepherd_core::traits::IAlertNotifier;
use shepherd_observability::{
    AlertEngine, EventLedger, HealthStatus, MonitoringService, ResponseRecord,
};

#[derive(Default)]
struct CountingNotifier {
    triggered: AtomicUsize,
    resolved: AtomicUsize,
}

impl IAlertNotifier for CountingNotifier {
    fn alert_triggered(&self, _rule: &AlertRule, _observed: f64) {
        self.triggered.fetch_add(1, Ordering::SeqCst);
    }

    fn alert_resolved(&self, _rule: &AlertRule) {
        self.resolved.fetch_add(1, Ordering::SeqCst);
    }
}

fn bare_config() -> MonitoringConfig {
    MonitoringConfig {
        install_default_rules: false,
        ..Default::default()
    }
}

fn service_with_counter(config: MonitoringConfig) -> (MonitoringService, Arc<CountingNotifier>) {
    let notifier = Arc::new(CountingNotifier::default());
    let service = MonitoringService::with_notifier(config, notifier.clone());
    (service, notifier)
}

fn pair(service: &MonitoringService, success: bool) {
    let id = service.record_request(ContentType::Insight);
    assert!(service.record_response(&id, ResponseRecord::new(success, Duration::from_millis(20))));
}

// ── Metrics ───────────────────────────────────────────────────────────────

#[test]
fn error_rate_matches_failed_pairs() {
    let service = MonitoringService::new(bare_config());
    for i in 0..10 {
        pair(&service, i % 4 != 0);
    }
    let m = service.get_metrics();
    assert_eq!(m.total_requests, 10);
    assert_eq!(m.successful_responses, 7);
    assert!((m.error_rate - 0.3).abs() < 1e-12);
}

proptest! {
    #[test]
    fn metrics_consistency(outcomes in proptest::collection::vec(any::<bool>(), 1..40)) {
        let service = MonitoringService::new(bare_config());
        for success in &outcomes {
            pair(&service, *success);
        }
        let n = outcomes.len() as u64;
        let s = outcomes.iter().filter(|b| **b).count() as u64;
        let m = service.get_metrics();
        prop_assert_eq!(m.total_requests, n);
        prop_assert_eq!(m.successful_responses, s);
        prop_assert!((m.error_rate - (n - s) as f64 / n as f64).abs() < 1e-12);
    }
}

#[test]
fn response_counters_cover_validation_fallback_and_issues() {
    let service = MonitoringService::new(bare_config());
    let id = service.record_request(ContentType::Devotion);
    let issue = ContentIssue::new(IssueKind::Theological, Severity::Moderate, "works");
    service.record_response(
        &id,
        ResponseRecord::new(true, Duration::from_millis(100))
            .with_validation(ValidationResult::invalid("works"))
            .with_fallback(true)
            .with_issues(vec![issue]),
    );
    pair(&service, true);

    let m = service.get_metrics();
    assert_eq!(m.validation_failures, 1);
    assert_eq!(m.fallbacks_used, 1);
    assert!((m.validation_pass_rate - 0.5).abs() < 1e-12);
    assert_eq!(m.average_response_time, Duration::from_millis(60));
    assert_eq!(m.issue_counts, vec![(IssueKind::Theological, 1)]);
    assert_eq!(m.content_type_counts.len(), 2);
}

#[test]
fn response_updates_event_in_place() {
    let service = MonitoringService::new(bare_config());
    let id = service.record_request(ContentType::Explanation);
    service.record_response(
        &id,
        ResponseRecord::new(true, Duration::from_millis(5)).with_metadata("content_hash", "abc"),
    );
    let events = service.get_recent_events(10);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].event_type, EventType::Response);
    assert_eq!(events[0].metadata.get("content_hash").map(String::as_str), Some("abc"));
}

#[test]
fn unknown_event_still_counts() {
    let service = MonitoringService::new(bare_config());
    assert!(!service.record_response("missing", ResponseRecord::new(true, Duration::ZERO)));
    assert_eq!(service.get_metrics().successful_responses, 1);
}

#[test]
fn record_error_appends_terminal_event() {
    let service = MonitoringService::new(bare_config());
    let mut meta = BTreeMap::new();
    meta.insert("operation".to_string(), "generate_devotion".to_string());
    service.record_error(ContentType::Devotion, "timed out", meta);

    let events = service.get_recent_events(1);
    assert_eq!(events[0].event_type, EventType::Error);
    assert_eq!(events[0].metadata.get("error").map(String::as_str), Some("timed out"));
    assert_eq!(service.get_metrics().error_count, 1);
    assert_eq!(service.get_metrics().total_requests, 0);
}

#[test]
fn recent_events_are_newest_first() {
    let service = MonitoringService::new(bare_config());
    let first = service.record_request(ContentType::Insight);
    let second = service.record_request(ContentType::Insight);
    let events = service.get_recent_events(2);
    assert_eq!(events[0].id, second);
    assert_eq!(events[1].id, first);
    assert_eq!(service.get_recent_events(1).len(), 1);
}

#[test]
fn reset_clears_counters_but_keeps_rules() {
    let service = MonitoringService::new(MonitoringConfig::default());
    pair(&service, false);
    service.reset_metrics().unwrap();
    assert_eq!(service.get_metrics().total_requests, 0);
    assert!(service.get_recent_events(10).is_empty());
    assert_eq!(service.rules().len(), 5);
}

// ── Alerts ────────────────────────────────────────────────────────────────

#[test]
fn alert_hysteresis() {
    let (service, notifier) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new(
            "errors",
            "Errors",
            AlertCondition::ErrorRateExceeds,
            0.1,
            5,
        ))
        .unwrap();

    pair(&service, true);
    for _ in 0..5 {
        pair(&service, false);
    }
    service.evaluate_alerts();
    assert_eq!(service.active_alerts().len(), 1);
    assert_eq!(notifier.triggered.load(Ordering::SeqCst), 1);

    // Still breached: no second notification.
    service.evaluate_alerts();
    assert_eq!(notifier.triggered.load(Ordering::SeqCst), 1);

    // 5 failures out of 56 is below 0.1.
    for _ in 0..50 {
        pair(&service, true);
    }
    service.evaluate_alerts();
    assert!(service.active_alerts().is_empty());
    assert_eq!(notifier.resolved.load(Ordering::SeqCst), 1);

    service.evaluate_alerts();
    assert_eq!(notifier.resolved.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_window_never_fires() {
    let (service, notifier) = service_with_counter(MonitoringConfig::default());
    service.evaluate_alerts();
    assert!(service.active_alerts().is_empty());
    assert_eq!(notifier.triggered.load(Ordering::SeqCst), 0);
}

#[test]
fn events_outside_window_are_ignored() {
    let (service, _) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new("e", "E", AlertCondition::ErrorRateExceeds, 0.1, 5))
        .unwrap();
    let old = service.record_request_at(ContentType::General, Utc::now() - chrono::Duration::minutes(30));
    service.record_response(&old, ResponseRecord::new(false, Duration::ZERO));

    // The response keeps its original request timestamp.
    service.evaluate_alerts();
    assert!(service.active_alerts().is_empty());
}

#[test]
fn consecutive_failures_rule() {
    let (service, notifier) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new(
            "streak",
            "Failure Streak",
            AlertCondition::ConsecutiveFailures,
            3.0,
            10,
        ))
        .unwrap();

    pair(&service, false);
    pair(&service, false);
    pair(&service, true);
    pair(&service, false);
    pair(&service, false);
    service.evaluate_alerts();
    assert!(service.active_alerts().is_empty());

    pair(&service, false);
    service.evaluate_alerts();
    assert_eq!(service.active_alerts()[0].id, "streak");
    assert_eq!(notifier.triggered.load(Ordering::SeqCst), 1);
}

#[test]
fn slow_responses_rule_uses_average_seconds() {
    let (service, _) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new("slow", "Slow", AlertCondition::ResponseTimeExceeds, 5.0, 5))
        .unwrap();
    let id = service.record_request(ContentType::General);
    service.record_response(&id, ResponseRecord::new(true, Duration::from_secs(8)));
    let id = service.record_request(ContentType::General);
    service.record_response(&id, ResponseRecord::new(true, Duration::from_secs(1)));
    service.evaluate_alerts();
    // Average is 4.5s.
    assert!(service.active_alerts().is_empty());
}

#[test]
fn first_response_runs_throttled_evaluation() {
    let (service, notifier) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new("e", "E", AlertCondition::ErrorRateExceeds, 0.1, 5))
        .unwrap();
    pair(&service, false);
    assert_eq!(notifier.triggered.load(Ordering::SeqCst), 1);

    // Within the throttle interval: no evaluation, so no resolution yet.
    for _ in 0..20 {
        pair(&service, true);
    }
    assert_eq!(notifier.resolved.load(Ordering::SeqCst), 0);
}

#[test]
fn removing_active_rule_resolves_silently() {
    let (service, notifier) = service_with_counter(bare_config());
    service
        .add_rule(AlertRule::new("e", "E", AlertCondition::ErrorRateExceeds, 0.1, 5))
        .unwrap();
    pair(&service, false);
    assert_eq!(service.active_alerts().len(), 1);

    let removed = service.remove_rule("e").unwrap();
    assert_eq!(removed.map(|r| r.id), Some("e".to_string()));
    assert!(service.active_alerts().is_empty());
    assert_eq!(notifier.resolved.load(Ordering::SeqCst), 0);
    assert_eq!(service.remove_rule("e").unwrap(), None);
}

#[test]
fn default_rules_are_installed() {
    let service = MonitoringService::default();
    let ids: Vec<String> = service.rules().into_iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec![
            "high_error_rate",
            "validation_failures",
            "high_fallback_usage",
            "slow_responses",
            "consecutive_failures"
        ]
    );
}

// ── Out-of-range settings ─────────────────────────────────────────────────

#[test]
fn add_rule_rejects_unrepresentable_windows() {
    let service = MonitoringService::new(bare_config());
    for window in [0, -5, i64::MAX] {
        let err = service
            .add_rule(AlertRule::new("w", "W", AlertCondition::ErrorRateExceeds, 0.1, window))
            .unwrap_err();
        assert!(matches!(err, ShepherdError::ConfigError(_)), "window {window}");
    }
    assert!(service.rules().is_empty());

    // The monitor keeps working after the rejections.
    pair(&service, false);
    service
        .add_rule(AlertRule::new("ok", "Ok", AlertCondition::ErrorRateExceeds, 0.1, 5))
        .unwrap();
    assert_eq!(service.get_metrics().total_requests, 1);
}

#[test]
fn oversized_window_in_engine_covers_whole_ledger() {
    let mut ledger = EventLedger::new(10);
    let mut event = AiEvent::request(ContentType::General, Utc::now() - chrono::Duration::days(400));
    event.event_type = EventType::Response;
    event.success = false;
    ledger.push(event);

    let mut engine = AlertEngine::new(vec![AlertRule::new(
        "wide",
        "Wide",
        AlertCondition::ErrorRateExceeds,
        0.1,
        i64::MAX,
    )]);
    let transitions = engine.evaluate(&ledger, Utc::now());
    assert_eq!(transitions.len(), 1);
    assert!(engine.is_active("wide"));
}

#[test]
fn unvalidated_huge_retention_keeps_events_without_panicking() {
    let config = MonitoringConfig {
        install_default_rules: false,
        retention_days: i64::MAX,
        cleanup_interval_secs: i64::MAX,
        alert_check_interval_secs: i64::MAX,
        ..Default::default()
    };
    let service = MonitoringService::new(config);
    service.record_request_at(ContentType::General, Utc::now() - chrono::Duration::days(30));
    pair(&service, true);
    assert_eq!(service.cleanup(), 0);
    assert_eq!(service.get_recent_events(10).len(), 2);
    assert!(service.reset_metrics().is_ok());
}

// ── Retention & capacity ──────────────────────────────────────────────────

#[test]
fn expired_events_are_purged() {
    let service = MonitoringService::new(bare_config());
    let old = service.record_request_at(ContentType::General, Utc::now() - chrono::Duration::days(8));
    let fresh = service.record_request(ContentType::General);

    assert_eq!(service.cleanup(), 1);
    let ids: Vec<String> = service.get_recent_events(10).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![fresh]);
    assert!(!ids.contains(&old));
}

#[test]
fn cleanup_runs_from_response_once_interval_elapses() {
    let config = MonitoringConfig {
        install_default_rules: false,
        cleanup_interval_secs: 0,
        ..Default::default()
    };
    let service = MonitoringService::new(config);
    service.record_request_at(ContentType::General, Utc::now() - chrono::Duration::days(30));
    pair(&service, true);
    assert_eq!(service.get_recent_events(10).len(), 1);
}

#[test]
fn ledger_never_exceeds_capacity() {
    let config = MonitoringConfig {
        max_events: 3,
        install_default_rules: false,
        ..Default::default()
    };
    let service = MonitoringService::new(config);
    for _ in 0..10 {
        pair(&service, true);
    }
    assert_eq!(service.get_recent_events(100).len(), 3);
    assert_eq!(service.get_metrics().total_requests, 10);
}

// ── Export & health ───────────────────────────────────────────────────────

#[test]
fn export_has_expected_fields() {
    let service = MonitoringService::new(bare_config());
    let id = service.record_request(ContentType::HistoricalContext);
    service.record_response(
        &id,
        ResponseRecord::new(true, Duration::from_millis(1500)).with_issues(vec![
            ContentIssue::new(IssueKind::Factual, Severity::Moderate, "date"),
        ]),
    );

    let doc = service.export_metrics().unwrap();
    let metrics = &doc["metrics"];
    for field in [
        "totalRequests",
        "successfulResponses",
        "validationFailures",
        "fallbacksUsed",
        "averageResponseTime",
        "errorRate",
        "validationPassRate",
    ] {
        assert!(metrics.get(field).is_some(), "missing metrics.{field}");
    }
    assert_eq!(metrics["totalRequests"], 1);
    assert_eq!(metrics["averageResponseTime"], 1.5);
    assert_eq!(doc["contentTypes"][0]["type"], "historicalContext");
    assert_eq!(doc["contentTypes"][0]["count"], 1);
    assert_eq!(doc["issues"][0]["type"], "factual");

    let ts = doc["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn health_report_names_active_alerts() {
    let (service, _) = service_with_counter(MonitoringConfig::default());
    for _ in 0..3 {
        pair(&service, false);
    }
    service.evaluate_alerts();

    let report = service.health_report();
    assert!(report.starts_with("AI Service Health: UNHEALTHY"));
    assert!(report.contains("Total requests: 3"));
    assert!(report.contains("High Error Rate"));
    assert_eq!(service.health_status(), HealthStatus::Unhealthy);
}

#[test]
fn idle_service_is_healthy() {
    let service = MonitoringService::default();
    assert_eq!(service.health_status(), HealthStatus::Healthy);
    assert!(service.health_report().ends_with("Active alerts: none"));
}

// ── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn concurrent_recording_does_not_lose_updates() {
    let service = Arc::new(MonitoringService::new(bare_config()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for i in 0..100 {
                    let id = service.record_request(ContentType::General);
                    service.record_response(&id, ResponseRecord::new(i % 2 == 0, Duration::ZERO));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let m = service.get_metrics();
    assert_eq!(m.total_requests, 800);
    assert_eq!(m.successful_responses, 400);
}

#[tokio::test]
async fn maintenance_task_runs_in_background() {
    let config = MonitoringConfig {
        install_default_rules: false,
        alert_check_interval_secs: 1,
        cleanup_interval_secs: 0,
        ..Default::default()
    };
    let service = Arc::new(MonitoringService::new(config));
    service.record_request_at(ContentType::General, Utc::now() - chrono::Duration::days(30));

    let handle = service.spawn_maintenance();
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.abort();

    assert!(service.get_recent_events(10).is_empty());
}

// ── Tracing setup ──────────────────────────────────────────────────────────

#[test]
fn tracing_init_from_config_is_repeatable() {
    let config = shepherd_core::config::ObservabilityConfig {
        log_level: "debug".to_string(),
        json_logs: false,
    };
    shepherd_observability::tracing_setup::init_from_config(&config);
    shepherd_observability::tracing_setup::init_from_config(&config);
    MonitoringService::new(bare_config()).record_request(ContentType::General);
}

#[test]
fn every_tracing_entry_point_tolerates_an_installed_subscriber() {
    shepherd_observability::tracing_setup::init_tracing();
    shepherd_observability::tracing_setup::init_tracing_with_filter("shepherd=trace");
    shepherd_observability::tracing_setup::init_from_config(
        &shepherd_core::config::ObservabilityConfig::default(),
    );
    shepherd_observability::tracing_setup::init_tracing();
    MonitoringService::new(bare_config()).record_request(ContentType::General);
}

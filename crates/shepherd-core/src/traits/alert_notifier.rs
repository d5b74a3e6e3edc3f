use crate::models::AlertRule;

/// Receives alert state transitions.
///
/// Called exactly once per transition, never while the rule stays in the
/// same state, and never while the monitoring lock is held.
pub trait IAlertNotifier: Send + Sync {
    /// `rule` moved into the active set; `observed` is the value that breached it.
    fn alert_triggered(&self, rule: &AlertRule, observed: f64);

    /// `rule` left the active set.
    fn alert_resolved(&self, rule: &AlertRule);
}

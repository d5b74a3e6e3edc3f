use shepherd_core::models::AlertRule;
use shepherd_core::traits::IAlertNotifier;

use crate::tracing_setup::events;

/// Default notifier: alert transitions become structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl IAlertNotifier for TracingNotifier {
    fn alert_triggered(&self, rule: &AlertRule, observed: f64) {
        events::alert_triggered(&rule.id, &rule.name, observed, rule.threshold);
    }

    fn alert_resolved(&self, rule: &AlertRule) {
        events::alert_resolved(&rule.id, &rule.name);
    }
}

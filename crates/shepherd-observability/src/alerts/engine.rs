//! Rule set, active-alert set, and the evaluation throttle.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use shepherd_core::models::AlertRule;

use super::conditions;
use crate::ledger::EventLedger;

/// A change in a rule's membership of the active set.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertTransition {
    Triggered { rule: AlertRule, observed: f64 },
    Resolved { rule: AlertRule },
}

#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    rules: Vec<AlertRule>,
    active: BTreeSet<String>,
    last_checked: Option<DateTime<Utc>>,
}

impl AlertEngine {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    /// Add a rule, replacing any existing rule with the same id.
    pub fn add_rule(&mut self, rule: AlertRule) {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Remove a rule. It leaves the active set without a resolved transition.
    pub fn remove_rule(&mut self, id: &str) -> Option<AlertRule> {
        let index = self.rules.iter().position(|r| r.id == id)?;
        self.active.remove(id);
        Some(self.rules.remove(index))
    }

    /// Active rules, in rule order.
    pub fn active_rules(&self) -> Vec<&AlertRule> {
        self.rules
            .iter()
            .filter(|r| self.active.contains(&r.id))
            .collect()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// Whether at least `interval` has passed since the last evaluation.
    pub fn is_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        self.last_checked.map_or(true, |last| now - last >= interval)
    }

    /// Evaluate every enabled rule against the ledger as of `now`.
    ///
    /// A rule already in the state its condition implies produces no
    /// transition. Disabled rules and rules with an empty window count as
    /// not breached.
    pub fn evaluate(&mut self, ledger: &EventLedger, now: DateTime<Utc>) -> Vec<AlertTransition> {
        self.last_checked = Some(now);
        let mut transitions = Vec::new();

        for rule in &self.rules {
            let observed = if rule.is_active {
                let window = ledger.responses_between(window_start(now, rule.window_minutes), now);
                conditions::observe(rule.condition, &window)
            } else {
                None
            };

            match observed {
                Some(value) if conditions::breached(rule, value) => {
                    if self.active.insert(rule.id.clone()) {
                        transitions.push(AlertTransition::Triggered {
                            rule: rule.clone(),
                            observed: value,
                        });
                    }
                }
                _ => {
                    if self.active.remove(&rule.id) {
                        transitions.push(AlertTransition::Resolved { rule: rule.clone() });
                    }
                }
            }
        }

        transitions
    }

    /// Forget active alerts and the throttle timestamp. Rules are kept.
    pub fn reset_state(&mut self) {
        self.active.clear();
        self.last_checked = None;
    }
}

/// Start of a rule's window. A window reaching past the representable range
/// covers the whole ledger.
fn window_start(now: DateTime<Utc>, window_minutes: i64) -> DateTime<Utc> {
    Duration::try_minutes(window_minutes)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_window_covers_everything() {
        let now = Utc::now();
        assert_eq!(window_start(now, i64::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(window_start(now, 5), now - Duration::minutes(5));
    }
}

//! Per-condition observation over a window of completed responses.

use shepherd_core::models::{AiEvent, AlertCondition, AlertRule};

/// The value a rule's condition observes over `window` (oldest first), or
/// `None` when the window holds no responses.
///
/// Rates are fractions in `[0, 1]`; response time is average seconds;
/// consecutive failures is the length of the trailing failure streak.
pub fn observe(condition: AlertCondition, window: &[&AiEvent]) -> Option<f64> {
    if window.is_empty() {
        return None;
    }
    let total = window.len() as f64;
    let fraction = |pred: fn(&AiEvent) -> bool| {
        window.iter().filter(|e| pred(e)).count() as f64 / total
    };

    let value = match condition {
        AlertCondition::ErrorRateExceeds => fraction(|e| !e.success),
        AlertCondition::ValidationFailureRateExceeds => {
            fraction(|e| e.validation_result.as_ref().is_some_and(|v| !v.is_valid))
        }
        AlertCondition::FallbackRateExceeds => fraction(|e| e.fallback_used),
        AlertCondition::ResponseTimeExceeds => {
            window.iter().map(|e| e.response_time.as_secs_f64()).sum::<f64>() / total
        }
        AlertCondition::ConsecutiveFailures => {
            window.iter().rev().take_while(|e| !e.success).count() as f64
        }
    };
    Some(value)
}

/// Whether `observed` breaches `rule`.
///
/// Rate and time conditions breach when strictly above the threshold.
/// Consecutive failures breach once the streak reaches the threshold.
pub fn breached(rule: &AlertRule, observed: f64) -> bool {
    match rule.condition {
        AlertCondition::ConsecutiveFailures => observed >= rule.threshold.max(1.0).ceil(),
        _ => observed > rule.threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shepherd_core::models::{ContentType, EventType};

    fn response(success: bool) -> AiEvent {
        AiEvent {
            event_type: EventType::Response,
            success,
            ..AiEvent::request(ContentType::General, Utc::now())
        }
    }

    #[test]
    fn empty_window_observes_nothing() {
        assert_eq!(observe(AlertCondition::ErrorRateExceeds, &[]), None);
    }

    #[test]
    fn streak_counts_only_trailing_failures() {
        let events = [response(false), response(true), response(false), response(false)];
        let refs: Vec<&AiEvent> = events.iter().collect();
        assert_eq!(observe(AlertCondition::ConsecutiveFailures, &refs), Some(2.0));
    }

    #[test]
    fn rate_must_strictly_exceed() {
        let rule = AlertRule::new("r", "R", AlertCondition::ErrorRateExceeds, 0.5, 5);
        assert!(!breached(&rule, 0.5));
        assert!(breached(&rule, 0.51));
    }
}

//! Threshold alerting over sliding windows with idempotent state transitions.

pub mod conditions;
pub mod engine;

pub use conditions::{breached, observe};
pub use engine::{AlertEngine, AlertTransition};

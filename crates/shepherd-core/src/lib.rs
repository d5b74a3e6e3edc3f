//! # shepherd-core
//!
//! Foundation crate for the Shepherd content safety pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ShepherdConfig;
pub use errors::{ShepherdError, ShepherdResult};
pub use models::{
    AiEvent, AiMetrics, AlertCondition, AlertRule, ContentIssue, ContentType, EventType,
    FactCheckResult, FilterContext, FilterResult, IssueKind, Severity, ValidationResult, Verdict,
};

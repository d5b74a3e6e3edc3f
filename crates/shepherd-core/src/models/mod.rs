pub mod alert;
pub mod content;
pub mod content_issue;
pub mod content_type;
pub mod event;
pub mod fact_check;
pub mod filter_context;
pub mod filter_result;
pub mod metrics;
pub mod perspective;
pub mod severity;
pub mod validation_result;

pub use alert::{AlertCondition, AlertRule};
pub use content::{
    Comparison, Devotion, HistoricalContext, Insight, InsightKind, Passage, PromptHints,
    VariantReading,
};
pub use content_issue::{ContentIssue, IssueKind};
pub use content_type::ContentType;
pub use event::{AiEvent, EventType};
pub use fact_check::{ClaimType, Evidence, FactCheckResult, FactCheckSummary, Reliability, Verdict};
pub use filter_context::FilterContext;
pub use filter_result::FilterResult;
pub use metrics::AiMetrics;
pub use perspective::{PerspectiveSet, TheologicalPerspective};
pub use severity::Severity;
pub use validation_result::ValidationResult;

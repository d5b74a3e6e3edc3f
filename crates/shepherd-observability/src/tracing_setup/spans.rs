//! Span definitions per orchestrated operation.

/// Span around one guarded content operation.
#[macro_export]
macro_rules! operation_span {
    ($operation:expr, $content_type:expr) => {
        tracing::info_span!(
            "shepherd.operation",
            operation = %$operation,
            content_type = %$content_type
        )
    };
}

/// Span around the upstream provider call.
#[macro_export]
macro_rules! provider_span {
    ($operation:expr) => {
        tracing::debug_span!("shepherd.provider", operation = %$operation)
    };
}

/// Span around the validation pipeline for one piece of content.
#[macro_export]
macro_rules! validation_span {
    ($content_type:expr) => {
        tracing::debug_span!("shepherd.validation", content_type = %$content_type)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const OPERATION: &str = "shepherd.operation";
    pub const PROVIDER: &str = "shepherd.provider";
    pub const VALIDATION: &str = "shepherd.validation";
}

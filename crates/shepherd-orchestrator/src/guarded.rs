use serde::Serialize;

/// Content handed back to callers, with the quality flag they may surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guarded<T> {
    pub content: T,
    /// The content is pre-approved fallback, not generated output.
    pub fallback_used: bool,
    /// Monitoring event recorded for this call.
    pub event_id: String,
}

impl<T> Guarded<T> {
    pub(crate) fn new(content: T, fallback_used: bool, event_id: String) -> Self {
        Self {
            content,
            fallback_used,
            event_id,
        }
    }

    pub fn into_inner(self) -> T {
        self.content
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Guarded<U> {
        Guarded {
            content: f(self.content),
            fallback_used: self.fallback_used,
            event_id: self.event_id,
        }
    }
}

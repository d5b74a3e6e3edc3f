/// Errors raised by the upstream content provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("provider timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("provider call cancelled")]
    Cancelled,

    #[error("provider returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

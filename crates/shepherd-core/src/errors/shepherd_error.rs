use super::{ConfigError, ProviderError};

/// Top-level error type. Every subsystem error converts into this via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ShepherdError {
    #[error("policy violation: {reason}")]
    PolicyViolation { reason: String },

    #[error("factual error in claim '{claim}' (confidence {confidence:.2})")]
    FactualError { claim: String, confidence: f64 },

    #[error(transparent)]
    ProviderFailure(#[from] ProviderError),

    #[error("{component} used before initialization")]
    NotInitialized { component: String },

    #[error("{component} already initialized")]
    AlreadyInitialized { component: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("lock poisoned: {component}")]
    LockPoisoned { component: String },
}

/// Convenience alias used throughout the workspace.
pub type ShepherdResult<T> = Result<T, ShepherdError>;

impl ShepherdError {
    /// Whether the orchestrator recovers from this error locally with fallback content.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PolicyViolation { .. } | Self::FactualError { .. } | Self::ProviderFailure(_)
        )
    }
}

//! Error handling for Shepherd.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod provider_error;
pub mod shepherd_error;

pub use config_error::ConfigError;
pub use provider_error::ProviderError;
pub use shepherd_error::{ShepherdError, ShepherdResult};

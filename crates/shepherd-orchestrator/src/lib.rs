//! # shepherd-orchestrator
//!
//! Public entry point of the pipeline. Each operation records a request,
//! calls the provider under a timeout, runs the checkers, substitutes
//! fallback content on any failure, and records the response.

pub mod engine;
pub mod guarded;
mod pending;
pub mod review;

pub use engine::SafetyOrchestrator;
pub use guarded::Guarded;

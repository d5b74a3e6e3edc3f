//! # shepherd-factcheck
//!
//! Claim fact-checking against a small curated dataset.
//!
//! A claim is classified by an ordered list of patterns (first match wins)
//! and dispatched to the verifier for its type. Every verifier attaches at
//! least one piece of evidence so downstream decisions stay auditable.

pub mod classify;
pub mod dataset;
pub mod engine;
pub mod extract;
pub mod verifiers;

pub use engine::ClaimFactChecker;

//! # shepherd-validation
//!
//! Stateless content checks run over every generated text.
//!
//! - [`GuardrailValidator`]: blocklist, divine-name capitalization, and
//!   doctrinal red flags; binary verdict with a reason.
//! - [`ContentFilter`]: four independent checkers (inappropriate content,
//!   scripture references, doctrine, reverence) aggregated into one
//!   severity-ranked [`FilterResult`](shepherd_core::FilterResult).
//!
//! Both are plain `Send + Sync` values over immutable tables and may be
//! shared freely across threads.

pub mod books;
pub mod divine_names;
pub mod filter;
pub mod guardrail;

pub use filter::ContentFilter;
pub use guardrail::GuardrailValidator;

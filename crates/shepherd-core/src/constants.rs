/// Shepherd version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on events held by the ledger, regardless of configuration.
pub const MAX_LEDGER_CAPACITY: usize = 1_000_000;

/// Confidence assigned to a recognized dating claim.
pub const DATING_CLAIM_CONFIDENCE: f64 = 0.75;

/// Confidence assigned to claims no curated source covers.
pub const GENERAL_CLAIM_CONFIDENCE: f64 = 0.5;

/// Metadata key carrying the blake3 hash of generated content.
pub const META_CONTENT_HASH: &str = "content_hash";

/// Metadata key carrying the provider error message.
pub const META_ERROR: &str = "error";

/// Metadata key carrying the originating operation name.
pub const META_OPERATION: &str = "operation";

/// Longest accepted retention horizon.
pub const MAX_RETENTION_DAYS: i64 = 3_650;

/// Longest accepted alert-check or cleanup interval (one week).
pub const MAX_INTERVAL_SECS: i64 = 604_800;

/// Longest accepted alert window (30 days).
pub const MAX_ALERT_WINDOW_MINUTES: i64 = 43_200;

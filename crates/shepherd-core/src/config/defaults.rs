// Single source of truth for all default values.

// --- Monitoring ---
pub const DEFAULT_MAX_EVENTS: usize = 10_000;
pub const DEFAULT_RETENTION_DAYS: i64 = 7;
pub const DEFAULT_ALERT_CHECK_INTERVAL_SECS: i64 = 60;
pub const DEFAULT_CLEANUP_INTERVAL_SECS: i64 = 3_600; // 1 hour
pub const DEFAULT_INSTALL_DEFAULT_RULES: bool = true;

// --- Orchestrator ---
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_EXPECT_SCRIPTURE_REFERENCES: bool = true;

// --- Fact check ---
pub const DEFAULT_HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MAX_CLAIMS_PER_PASSAGE: usize = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

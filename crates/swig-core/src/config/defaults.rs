// Single source of truth for all default values.

// --- Rules ---
pub const DEFAULT_RULE_COUNT: usize = crate::constants::DEFAULT_RULE_COUNT;
pub const DEFAULT_SUBJECT_NAME: &str = crate::constants::DEFAULT_SUBJECT_NAME;

// --- Games ---
pub const DEFAULT_EXPIRY_DAYS: i64 = 90;
/// About a century; far inside chrono's representable range.
pub const MAX_EXPIRY_DAYS: i64 = 36_500;
pub const DEFAULT_REROLL_COUNT: usize = 5;
pub const DEFAULT_CUSTOM_RULE_WEIGHT: f64 = 1.0;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "swig.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

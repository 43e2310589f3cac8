//! Shared constants for the basket mining engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "BASKET_LOG";

/// Filter used when `BASKET_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "basket=info";

/// Project-level config file name, looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "basket.toml";

/// Default minimum threshold when ranking rules by confidence.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.0;

/// Default minimum threshold when ranking rules by lift.
pub const DEFAULT_LIFT_THRESHOLD: f64 = 1.0;

/// Rows handed to one rayon task while counting support.
pub const DEFAULT_COUNT_CHUNK_ROWS: usize = 1024;

/// Largest itemset the rule generator will split (subsets are enumerated
/// with a `u64` mask).
pub const MAX_RULE_ITEMSET_LEN: usize = 63;

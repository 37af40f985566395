//! Shared constants for the fabric health engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name, looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "fabric-health.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".fabric-health";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "FABRIC_LOG";

/// Default tracing filter when `FABRIC_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "fabric=info";

// ---- Scoring ----

/// Points deducted per critical finding.
pub const DEFAULT_CRITICAL_WEIGHT: f64 = 10.0;

/// Points deducted per warning finding.
pub const DEFAULT_WARNING_WEIGHT: f64 = 3.0;

/// Points deducted per info finding.
pub const DEFAULT_INFO_WEIGHT: f64 = 0.0;

/// Lowest score still reported as Healthy.
pub const DEFAULT_HEALTHY_THRESHOLD: u32 = 80;

/// Lowest score still reported as Warning.
pub const DEFAULT_WARNING_THRESHOLD: u32 = 60;

// ---- Insights ----

/// Default number of top offenders kept per category.
pub const DEFAULT_TOP_N: usize = 10;

// ---- Reasons ----

/// Reason attached to rows no rule matched.
pub const REASON_NORMAL: &str = "normal";

/// Reason attached to rows missing every required field (opt-in).
pub const REASON_INSUFFICIENT_DATA: &str = "insufficient data";

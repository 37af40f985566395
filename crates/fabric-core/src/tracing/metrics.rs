//! Structured span field definitions.
//!
//! Standard field names used in tracing events across the pipeline, so log
//! queries can rely on them.

/// Checks: per-check evaluation time in milliseconds.
pub const CHECK_EVALUATION_TIME: &str = "check_evaluation_time";

/// Checks: rows classified by one check.
pub const ROWS_CLASSIFIED: &str = "rows_classified";

/// Checks: rows classified above ok.
pub const FLAGGED_ROWS: &str = "flagged_rows";

/// Aggregation: overall health score (0-100).
pub const HEALTH_SCORE: &str = "health_score";

/// Action plan: number of deduplicated remediation items.
pub const ACTION_ITEMS: &str = "action_items";

/// Pipeline: total snapshot analysis time in milliseconds.
pub const ANALYSIS_TIME: &str = "analysis_time";

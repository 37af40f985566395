//! Health aggregation: one score, grade, and status across every check.

pub mod aggregator;
pub mod grade;
pub mod types;

pub use aggregator::HealthAggregator;
pub use grade::Grade;
pub use types::{GroupHealth, HealthScoreReport, HealthStatus, IssueDetails, IssueEntry, Totals};

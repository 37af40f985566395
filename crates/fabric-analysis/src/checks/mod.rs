//! Check evaluation: definitions, registry, port-record merge, summary scan,
//! and the per-category evaluator.

pub mod evaluator;
pub mod merge;
pub mod registry;
pub mod summary;
pub mod types;

pub use evaluator::{CheckEvaluator, EvaluationOptions, INSUFFICIENT_DATA_ISSUE};
pub use merge::{merge_port_records, port_key};
pub use registry::CheckRegistry;
pub use summary::scan_summary;
pub use types::{AnnotatedRow, CheckDefinition, CheckResult, Group, RankMetric, SummaryHit};

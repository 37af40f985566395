//! Core types: scalar values, rows, severity tiers, and snapshots.

pub mod collections;
pub mod row;
pub mod scalar;
pub mod severity;
pub mod snapshot;

pub use row::Row;
pub use scalar::Scalar;
pub use severity::{Severity, SeverityCounts};
pub use snapshot::{Snapshot, Summary};

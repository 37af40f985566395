//! Top-offender ranking per check.

pub mod metrics;
pub mod ranker;

pub use ranker::{top_n, Insight, RankedRow, TopN};

//! Core types, errors, configuration, tracing, and constants shared by the
//! fabric health engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::FabricConfig;
pub use types::{Row, Scalar, Severity, Snapshot, Summary};

//! Observability for the fabric health engine.
//! `tracing` crate with `EnvFilter`, per-module log levels via `FABRIC_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::{init_tracing, log_filter};

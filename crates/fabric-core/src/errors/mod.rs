//! Error handling for the fabric health engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! The analysis core itself never fails on data variance; these errors cover
//! the edges around it: configuration, snapshot decoding, and report output.

pub mod config_error;
pub mod error_code;
pub mod report_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use error_code::FabricErrorCode;
pub use report_error::ReportError;
pub use snapshot_error::SnapshotError;

//! Snapshot decoding errors.

use super::error_code::{self, FabricErrorCode};

/// Ingestion-level failures: the snapshot could not be decoded at all.
/// Field-level variance inside a decoded snapshot is never an error.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Category {category} has malformed rows: {message}")]
    MalformedCategory { category: String, message: String },
}

impl FabricErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}

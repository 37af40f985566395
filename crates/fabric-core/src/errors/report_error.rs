//! Report rendering errors.

use super::error_code::{self, FabricErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Report formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

impl FabricErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFormat(_) => error_code::UNKNOWN_FORMAT,
            _ => error_code::REPORT_ERROR,
        }
    }
}

//! Errors from reading, layering, and validating `fabric-health.toml`.

use super::error_code::{self, FabricErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config layer exists on disk but could not be read.
    #[error("Cannot read config {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    /// A merged value is out of range, e.g. a zero `insights.top_n`.
    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Config cannot be rendered as TOML: {0}")]
    Render(String),
}

impl FabricErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
            Self::Unreadable { .. } | Self::ParseError { .. } | Self::Render(_) => {
                error_code::CONFIG_ERROR
            }
        }
    }
}

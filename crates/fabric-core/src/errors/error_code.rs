//! FabricErrorCode trait for structured error codes.

/// Every error enum implements this to give embedding services a stable,
/// machine-readable code next to the human message.
pub trait FabricErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";

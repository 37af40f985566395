//! Tests for error codes and messages.

use fabric_core::errors::{ConfigError, FabricErrorCode, ReportError, SnapshotError};
use fabric_core::Snapshot;

/// Validation failures carry their own code; read and parse failures share one.
#[test]
fn test_config_error_coded_string() {
    let err = ConfigError::ValidationFailed {
        field: "insights.top_n".to_string(),
        message: "must be greater than 0".to_string(),
    };
    assert_eq!(err.error_code(), "CONFIG_INVALID");
    assert_eq!(
        err.coded_string(),
        "[CONFIG_INVALID] Config validation failed for insights.top_n: must be greater than 0"
    );

    let unreadable = ConfigError::Unreadable {
        path: "/etc/fabric-health.toml".to_string(),
        message: "permission denied".to_string(),
    };
    assert_eq!(unreadable.error_code(), "CONFIG_ERROR");
    assert_eq!(
        unreadable.to_string(),
        "Cannot read config /etc/fabric-health.toml: permission denied"
    );
}

#[test]
fn test_snapshot_error_from_bad_json() {
    let err = Snapshot::from_json("{not json").unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidJson(_)));
    assert_eq!(err.error_code(), "SNAPSHOT_ERROR");
    assert!(err.coded_string().starts_with("[SNAPSHOT_ERROR] Snapshot is not valid JSON"));
}

#[test]
fn test_report_error_codes() {
    let unknown = ReportError::UnknownFormat("xml".to_string());
    assert_eq!(unknown.error_code(), "UNKNOWN_FORMAT");
    assert_eq!(unknown.to_string(), "Unknown report format: xml");

    let format = ReportError::from(std::fmt::Error);
    assert_eq!(format.error_code(), "REPORT_ERROR");
}

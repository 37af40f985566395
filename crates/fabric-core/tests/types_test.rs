//! Tests for the snapshot data model.

use fabric_core::errors::SnapshotError;
use fabric_core::types::scalar::format_number;
use fabric_core::types::{Row, Scalar, Severity, SeverityCounts, Snapshot, Summary};

#[test]
fn test_severity_total_order() {
    assert!(Severity::Critical < Severity::Warning);
    assert!(Severity::Warning < Severity::Info);
    assert!(Severity::Info < Severity::Ok);
    assert_eq!(Severity::Warning.worst(Severity::Critical), Severity::Critical);
    assert!(Severity::Critical.is_more_severe_than(Severity::Info));
    assert!(!Severity::Ok.is_flagged());
    assert_eq!(Severity::all().len(), 4);
}

#[test]
fn test_severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Critical).unwrap();
    assert_eq!(json, "\"critical\"");
}

#[test]
fn test_severity_counts_worst_and_flagged() {
    let mut counts = SeverityCounts::default();
    assert_eq!(counts.worst(), Severity::Ok);
    counts.add(Severity::Info, 2);
    counts.add(Severity::Warning, 1);
    counts.add(Severity::Ok, 10);
    assert_eq!(counts.worst(), Severity::Warning);
    assert_eq!(counts.flagged(), 3);

    let mut other = SeverityCounts::default();
    other.add(Severity::Critical, 1);
    counts.merge(&other);
    assert_eq!(counts.worst(), Severity::Critical);
    assert_eq!(counts.get(Severity::Ok), 10);
}

#[test]
fn test_scalar_numeric_coercion() {
    assert_eq!(Scalar::from(85).as_f64(), Some(85.0));
    assert_eq!(Scalar::from(" 42.5 ").as_f64(), Some(42.5));
    assert_eq!(Scalar::from("3.2%").as_f64(), Some(3.2));
    assert_eq!(Scalar::from("1.5e-13").as_f64(), Some(1.5e-13));
    assert_eq!(Scalar::from(true).as_f64(), Some(1.0));
    assert_eq!(Scalar::from("N/A").as_f64(), None);
    assert_eq!(Scalar::from("NaN").as_f64(), None);
    assert_eq!(Scalar::Null.as_f64(), None);
}

#[test]
fn test_scalar_blank_and_text() {
    assert!(Scalar::Null.is_blank());
    assert!(Scalar::from("   ").is_blank());
    assert!(!Scalar::from(0).is_blank());
    assert_eq!(Scalar::from(80).as_text(), "80");
    assert_eq!(Scalar::from(2.5).to_string(), "2.5");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(80.0), "80");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(1e-12), "1e-12");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn test_scalar_from_nested_json_is_text() {
    let value: Scalar = serde_json::from_str("[1,2]").unwrap();
    assert_eq!(value, Scalar::Text("[1,2]".to_string()));
}

#[test]
fn test_snapshot_from_json_full_shape() {
    let snapshot = Snapshot::from_json(
        r#"{
            "categories": {
                "cable": {
                    "rows": [{"Temperature": 85, "Node Name": "sw-01"}],
                    "summary": {"critical_ports": 3}
                },
                "fan": [{"FanSpeed": 0}],
                "events": null
            },
            "summaries": {"routing": {"unreachable_destinations": 1}}
        }"#,
    )
    .unwrap();

    assert_eq!(snapshot.rows("cable").len(), 1);
    assert_eq!(snapshot.rows("cable")[0].category, "cable");
    assert_eq!(snapshot.rows("fan").len(), 1);
    assert!(snapshot.rows("events").is_empty());
    assert!(snapshot.rows("missing").is_empty());
    assert_eq!(
        snapshot.summary("cable").and_then(|s| s.get("critical_ports")),
        Some(&Scalar::Number(3.0))
    );
    assert!(snapshot.summary("routing").is_some());
    assert_eq!(snapshot.total_rows(), 2);

    let keys: Vec<&str> = snapshot.keys().into_iter().collect();
    assert_eq!(keys, vec!["cable", "events", "fan", "routing"]);
}

#[test]
fn test_snapshot_without_categories_key() {
    let snapshot = Snapshot::from_json(r#"{"ber": [{"Symbol BER": "1e-10"}]}"#).unwrap();
    assert_eq!(snapshot.rows("ber").len(), 1);
}

#[test]
fn test_snapshot_rejects_non_object_rows() {
    let err = Snapshot::from_json(r#"{"categories": {"cable": [1, 2]}}"#).unwrap_err();
    match err {
        SnapshotError::MalformedCategory { category, message } => {
            assert_eq!(category, "cable");
            assert!(message.contains("row 0"));
        }
        other => panic!("expected MalformedCategory, got {other:?}"),
    }
}

#[test]
fn test_snapshot_builder_retags_rows() {
    let mut summary = Summary::new();
    summary.insert("warning_ports".to_string(), Scalar::from(2));
    let snapshot = Snapshot::new()
        .with_rows("congestion", vec![Row::new("other").with("WaitRatioPct", 0.5)])
        .with_summary("congestion", summary);
    assert_eq!(snapshot.rows("congestion")[0].category, "congestion");
    assert!(!snapshot.is_empty());
}

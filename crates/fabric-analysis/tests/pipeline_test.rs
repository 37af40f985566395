//! End-to-end tests: snapshot in, report out.

use fabric_analysis::checks::CheckRegistry;
use fabric_analysis::reporters::{available_formats, create_reporter, Reporter};
use fabric_analysis::reporters::json::JsonReporter;
use fabric_analysis::reporters::console::ConsoleReporter;
use fabric_analysis::{HealthAnalyzer, HealthStatus, KnowledgeBase};
use fabric_core::config::{AnalysisConfig, FabricConfig, InsightConfig};
use fabric_core::errors::ReportError;
use fabric_core::types::{Row, Severity, Snapshot};

const SNAPSHOT_JSON: &str = r#"{
    "categories": {
        "cable": {
            "rows": [
                {"Node Name": "leaf-01", "NodeGUID": "0x1", "PortNumber": 1, "Temperature": 85},
                {"Node Name": "leaf-02", "NodeGUID": "0x2", "PortNumber": 1, "Temperature": 45}
            ]
        },
        "congestion": [
            {"Node Name": "spine-01", "WaitRatioPct": 0.5, "XmitCongestionPct": 0.2}
        ],
        "fan": [
            {"Node Name": "leaf-01", "FanSpeed": 3000, "MinSpeed": 4000}
        ],
        "mystery_table": [
            {"anything": 1}
        ]
    },
    "summaries": {
        "routing": {"unreachable_destinations": 0, "long_paths": 2, "total_paths": 900}
    }
}"#;

fn snapshot() -> Snapshot {
    Snapshot::from_json(SNAPSHOT_JSON).unwrap()
}

/// A mixed snapshot produces a complete report.
#[test]
fn test_end_to_end_report() {
    let kb = KnowledgeBase::new();
    let analyzer = HealthAnalyzer::new(&FabricConfig::default(), &kb);
    let report = analyzer.analyze(&snapshot());

    let cable = report.check("cable").unwrap();
    assert_eq!(cable.critical(), 1);
    assert_eq!(cable.total_rows, 2);
    assert_eq!(report.check("congestion").unwrap().status, Severity::Ok);
    assert_eq!(report.check("fan").unwrap().critical(), 1);

    let routing = report.check("routing").unwrap();
    assert_eq!(routing.warning(), 2);
    assert_eq!(routing.total_rows, 0);

    // Two critical, two warnings: 100 - 20 - 6.
    assert_eq!(report.health.score, 74);
    assert_eq!(report.health.status, HealthStatus::Warning);
    assert_eq!(report.health.issues.len(), 3);
    assert_eq!(report.health.issues[0].severity, Severity::Critical);

    assert_eq!(report.unrecognized_categories, ["mystery_table"]);
    assert!(!report.action_plan.is_empty());
    assert_eq!(report.action_plan[0].priority, 1);
    assert_eq!(report.checks.len(), CheckRegistry::builtin().len());
}

/// Summary-only checks contribute no insights.
#[test]
fn test_insights_only_for_checks_with_rows() {
    let kb = KnowledgeBase::new();
    let config = FabricConfig {
        insights: InsightConfig { top_n: Some(1) },
        ..FabricConfig::default()
    };
    let report = HealthAnalyzer::new(&config, &kb).analyze(&snapshot());
    let ids: Vec<&str> = report.insights.iter().map(|i| i.check_id).collect();
    assert_eq!(ids, ["cable", "fan", "congestion"]);
    let cable = &report.insights[0];
    assert_eq!(cable.items.len(), 1);
    assert_eq!(cable.items[0].node_name.as_deref(), Some("leaf-01"));
}

/// An empty snapshot is healthy with an empty plan.
#[test]
fn test_empty_snapshot_is_healthy() {
    let kb = KnowledgeBase::new();
    let report = HealthAnalyzer::new(&FabricConfig::default(), &kb).analyze(&Snapshot::new());
    assert_eq!(report.health.score, 100);
    assert!(report.health.is_healthy());
    assert!(report.health.issues.is_empty());
    assert!(report.action_plan.is_empty());
    assert!(report.insights.is_empty());
    assert!(report.unrecognized_categories.is_empty());
}

/// Categories of disabled checks are not reported as unrecognized.
#[test]
fn test_disabled_check_is_not_unrecognized() {
    let kb = KnowledgeBase::new();
    let config = FabricConfig {
        analysis: AnalysisConfig {
            disabled_checks: vec!["fan".to_string()],
            ..AnalysisConfig::default()
        },
        ..FabricConfig::default()
    };
    let report = HealthAnalyzer::new(&config, &kb).analyze(&snapshot());
    assert!(report.check("fan").is_none());
    assert_eq!(report.unrecognized_categories, ["mystery_table"]);
    assert_eq!(report.health.totals.critical, 1);
}

/// Config thresholds change the verdict for the same data.
#[test]
fn test_threshold_override_changes_verdict() {
    let kb = KnowledgeBase::new();
    let config = FabricConfig {
        analysis: AnalysisConfig {
            threshold_overrides: [("cable.temperature.critical".to_string(), 90.0)].into(),
            ..AnalysisConfig::default()
        },
        ..FabricConfig::default()
    };
    let report = HealthAnalyzer::new(&config, &kb).analyze(&snapshot());
    let cable = report.check("cable").unwrap();
    assert_eq!(cable.critical(), 0);
    assert_eq!(cable.warning(), 1);
}

/// Analyzers accept a caller-built registry.
#[test]
fn test_custom_registry() {
    let kb = KnowledgeBase::new();
    let registry = CheckRegistry::new(
        CheckRegistry::builtin()
            .checks()
            .iter()
            .filter(|c| c.id == "cable")
            .cloned()
            .collect(),
    );
    let analyzer = HealthAnalyzer::new(&FabricConfig::default(), &kb).with_registry(registry);
    let snapshot = Snapshot::new().with_rows("cable", [Row::new("cable").with("Temperature", 85)]);
    let report = analyzer.analyze(&snapshot);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.health.groups.len(), 1);
    assert_eq!(report.health.score, 90);
}

/// Rendering the same report twice gives the same JSON.
#[test]
fn test_json_report_is_idempotent() {
    let kb = KnowledgeBase::new();
    let analyzer = HealthAnalyzer::new(&FabricConfig::default(), &kb);
    let reporter = JsonReporter::default();
    let first = reporter.generate(&analyzer.analyze(&snapshot())).unwrap();
    let second = reporter.generate(&analyzer.analyze(&snapshot())).unwrap();
    assert_eq!(first, second);

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value["health"]["score"], 74);
    assert_eq!(value["health"]["status"], "warning");
    assert_eq!(value["health"]["grade"], "C");
}

/// Plain console output has the score line, the plan and no ANSI codes.
#[test]
fn test_console_report() {
    let kb = KnowledgeBase::new();
    let report = HealthAnalyzer::new(&FabricConfig::default(), &kb).analyze(&snapshot());
    let text = ConsoleReporter::new(false).generate(&report).unwrap();
    assert!(text.contains("Score 74 / 100  grade C  warning"));
    assert!(text.contains("Cables & Optics"));
    assert!(text.contains("[leaf-01:1]"));
    assert!(text.contains("Action plan"));
    assert!(text.contains("Unrecognized categories: mystery_table"));
    assert!(!text.contains("\x1b["));
}

/// The factory knows every format and rejects others.
#[test]
fn test_reporter_factory() {
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        assert_eq!(reporter.name(), *format);
    }
    assert!(matches!(
        create_reporter("xml"),
        Err(ReportError::UnknownFormat(ref f)) if f == "xml"
    ));
}

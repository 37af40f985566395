//! Tests for per-check evaluation: port merge, summary folding, ordering,
//! and the insufficient-data option.

use fabric_analysis::checks::{
    merge_port_records, port_key, scan_summary, CheckDefinition, CheckEvaluator, CheckRegistry,
    EvaluationOptions, INSUFFICIENT_DATA_ISSUE,
};
use fabric_analysis::rules::catalog;
use fabric_core::config::AnalysisConfig;
use fabric_core::types::{Row, Scalar, Severity, Summary};
use std::io::Write;
use std::sync::{Arc, Mutex};

fn check(id: &str) -> CheckDefinition {
    CheckRegistry::builtin().get(id).cloned().unwrap()
}

fn summary(fields: &[(&str, f64)]) -> Summary {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), Scalar::Number(*v)))
        .collect()
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Two records for one port collapse into a single critical row.
#[test]
fn test_port_records_merge_to_most_severe() {
    let rows = vec![
        Row::new("events")
            .with("NodeGUID", "0x0002c903")
            .with("PortNumber", 1)
            .with("Severity", "critical"),
        Row::new("events")
            .with("NodeGUID", "0x0002c903")
            .with("PortNumber", 1)
            .with("Severity", "warning"),
    ];
    let result = CheckEvaluator::default().evaluate(&check("events"), &rows, None);
    assert_eq!(result.total_rows, 1);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].severity, Severity::Critical);
    assert_eq!(result.status, Severity::Critical);
    assert_eq!(result.critical(), 1);
}

/// Port keys normalize GUID case and padding; the later, worse label wins.
#[test]
fn test_merge_keeps_later_severity_when_more_severe() {
    let rows = vec![
        Row::new("events")
            .with("NodeGUID", "0x02c903")
            .with("Port", "7")
            .with("Severity", "info"),
        Row::new("events")
            .with("Node GUID", "0X0002C903")
            .with("PortNumber", "7")
            .with("Severity", "error")
            .with("Message", "symbol errors"),
    ];
    let merged = merge_port_records(&rows, &check("events").rules);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].get("Severity").unwrap().as_text(), "error");
    assert_eq!(merged[0].get("Message").unwrap().as_text(), "symbol errors");
}

/// A healthy record followed by a critical one for the same port stays critical.
#[test]
fn test_merge_keeps_later_critical_measurement() {
    let rows = vec![
        Row::new("cable").with("NodeGUID", "0x1").with("PortNumber", 1).with("Temperature", 60),
        Row::new("cable").with("NodeGUID", "0x1").with("PortNumber", 1).with("Temperature", 85),
    ];
    let result = CheckEvaluator::default().evaluate(&check("cable"), &rows, None);
    assert_eq!(result.total_rows, 1);
    assert_eq!(result.rows[0].severity, Severity::Critical);
    assert_eq!(result.critical(), 1);
    assert_eq!(result.rows[0].row.get("Temperature"), Some(&Scalar::Number(85.0)));
}

/// Order does not matter: a critical record absorbs a later healthy one.
#[test]
fn test_merge_keeps_earlier_critical_measurement() {
    let rows = vec![
        Row::new("cable").with("NodeGUID", "0x1").with("PortNumber", 1).with("Temperature", 85),
        Row::new("cable")
            .with("NodeGUID", "0x1")
            .with("PortNumber", 1)
            .with("Temperature", 60)
            .with("Node Name", "leaf-01"),
    ];
    let result = CheckEvaluator::default().evaluate(&check("cable"), &rows, None);
    assert_eq!(result.rows[0].severity, Severity::Critical);
    assert_eq!(
        result.rows[0].row.get("Node Name").map(|v| v.as_text().into_owned()),
        Some("leaf-01".to_string())
    );
}

/// Congestion ratios merge toward the worse reading.
#[test]
fn test_merge_congestion_ratio_follows_severity() {
    let rows = vec![
        Row::new("congestion").with("NodeGUID", "0x7").with("PortNumber", 3).with("WaitRatioPct", 0.1),
        Row::new("congestion").with("NodeGUID", "0x7").with("PortNumber", 3).with("WaitRatioPct", 12.0),
    ];
    let result = CheckEvaluator::default().evaluate(&check("congestion"), &rows, None);
    assert_eq!(result.total_rows, 1);
    assert_eq!(result.rows[0].severity, Severity::Critical);
    assert_eq!(result.rows[0].reason, "Congestion 12% at or above 5%");
}

/// A raised alarm flag on a duplicate record is not lost by the merge.
#[test]
fn test_merge_keeps_alarm_flag() {
    let rows = vec![
        Row::new("cable").with("NodeGUID", "0x9").with("PortNumber", 2).with("TX Power Alarm", "0x0000"),
        Row::new("cable").with("NodeGUID", "0x9").with("PortNumber", 2).with("TX Power Alarm", "0x0001"),
    ];
    let merged = merge_port_records(&rows, &check("cable").rules);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].get("TX Power Alarm").map(|v| v.as_text().into_owned()), Some("0x0001".to_string()));
}

/// Rows missing a GUID or port number are never merged.
#[test]
fn test_rows_without_port_identity_pass_through() {
    let rows = vec![
        Row::new("events").with("Severity", "warning"),
        Row::new("events").with("Severity", "warning"),
    ];
    assert_eq!(merge_port_records(&rows, &check("events").rules).len(), 2);
    assert!(port_key(&rows[0]).is_none());
}

/// With merging off every record is evaluated on its own.
#[test]
fn test_merge_can_be_disabled() {
    let rows = vec![
        Row::new("events").with("NodeGUID", "0x1").with("PortNumber", 1).with("Severity", "warning"),
        Row::new("events").with("NodeGUID", "0x1").with("PortNumber", 1).with("Severity", "warning"),
    ];
    let evaluator = CheckEvaluator::new(EvaluationOptions {
        merge_port_records: false,
        ..EvaluationOptions::default()
    });
    let result = evaluator.evaluate(&check("events"), &rows, None);
    assert_eq!(result.total_rows, 2);
    assert_eq!(result.warning(), 2);
}

/// Summary counts drive the status even when no rows are present.
#[test]
fn test_summary_only_counts_without_rows() {
    let s = summary(&[("critical_ports", 3.0)]);
    let result = CheckEvaluator::default().evaluate(&check("cable"), &[], Some(&s));
    assert_eq!(result.critical(), 3);
    assert_eq!(result.flagged_count(), 0);
    assert_eq!(result.total_rows, 0);
    assert_eq!(result.status, Severity::Critical);
    assert_eq!(result.summary_hits.len(), 1);
    assert_eq!(result.row_counts.critical, 0);
}

/// Aggregate fields and zero counts are ignored by the keyword scan.
#[test]
fn test_summary_heuristic_skips_aggregates() {
    let s = summary(&[
        ("total_errors", 40.0),
        ("max_critical_temp", 91.0),
        ("warning_cables", 2.0),
        ("pkey_mismatch", 0.0),
    ]);
    let hits = scan_summary(&s, &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].field, "warning_cables");
    assert_eq!(hits[0].severity, Severity::Warning);
    assert_eq!(hits[0].count, 2);
}

/// An allow-list replaces keyword matching entirely.
#[test]
fn test_summary_allow_list_overrides_heuristic() {
    let s = summary(&[
        ("down_ports", 2.0),
        ("inactive_ports", 4.0),
        ("critical_errors", 9.0),
    ]);
    let result = CheckEvaluator::default().evaluate(&check("link"), &[], Some(&s));
    assert_eq!(result.critical(), 2);
    assert_eq!(result.info(), 4);
    assert_eq!(result.warning(), 0);
}

/// Allow-listed scans log the numeric fields they skip.
#[test]
fn test_summary_allow_list_logs_skipped_fields() {
    let s = summary(&[("down_ports", 1.0), ("critical_errors", 9.0)]);
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, || {
        CheckEvaluator::default().evaluate(&check("link"), &[], Some(&s))
    });
    assert_eq!(result.critical(), 1);
    assert_eq!(result.summary_hits.len(), 1);

    let logs = captured.contents();
    assert!(logs.contains("summary field not in the allow-list"));
    assert!(logs.contains("critical_errors"));
    assert!(!logs.contains("field=down_ports"));
}

/// Rows come back most severe first, input order within a tier.
#[test]
fn test_rows_sorted_most_severe_first_and_stable() {
    let rows = vec![
        Row::new("cable").with("Node Name", "a").with("Temperature", 40),
        Row::new("cable").with("Node Name", "b").with("Temperature", 72),
        Row::new("cable").with("Node Name", "c").with("Temperature", 90),
        Row::new("cable").with("Node Name", "d").with("Temperature", 75),
        Row::new("cable").with("Node Name", "e").with("Temperature", 81),
    ];
    let result = CheckEvaluator::default().evaluate(&check("cable"), &rows, None);
    let order: Vec<String> = result
        .rows
        .iter()
        .map(|r| r.row.get("Node Name").unwrap().as_text().into_owned())
        .collect();
    assert_eq!(order, ["c", "e", "b", "d", "a"]);
    assert_eq!(result.critical(), 2);
    assert_eq!(result.warning(), 2);
    assert_eq!(result.flagged_count(), 4);
    assert_eq!(result.rows[0].index, 2);
}

/// No rows and no summary is an ok result.
#[test]
fn test_empty_input_is_ok() {
    let result = CheckEvaluator::default().evaluate(&check("fan"), &[], None);
    assert_eq!(result.status, Severity::Ok);
    assert_eq!(result.total_rows, 0);
    assert_eq!(result.counts.flagged(), 0);
}

/// Rows lacking every required field are flagged only when asked.
#[test]
fn test_insufficient_data_is_opt_in() {
    let rows = vec![Row::new("counters").with("Node Name", "sw-01")];
    let def = check("counters");

    let default = CheckEvaluator::default().evaluate(&def, &rows, None);
    assert_eq!(default.rows[0].severity, Severity::Ok);

    let evaluator = CheckEvaluator::new(EvaluationOptions {
        flag_insufficient_data: true,
        ..EvaluationOptions::default()
    });
    let flagged = evaluator.evaluate(&def, &rows, None);
    assert_eq!(flagged.rows[0].severity, Severity::Info);
    assert_eq!(flagged.rows[0].issue, Some(INSUFFICIENT_DATA_ISSUE));

    let with_data = vec![Row::new("counters").with("PortRcvErrors", 0)];
    assert_eq!(evaluator.evaluate(&def, &with_data, None).rows[0].severity, Severity::Ok);
}

/// Config disables checks and overrides thresholds by id.
#[test]
fn test_registry_groups_and_config() {
    let registry = CheckRegistry::builtin();
    assert_eq!(registry.len(), catalog::CATEGORIES.len());
    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, catalog::CATEGORIES);
    let group_ids: Vec<&str> = registry.groups().iter().map(|g| g.id).collect();
    assert_eq!(group_ids, ["physical", "link", "traffic", "platform"]);

    let config = AnalysisConfig {
        disabled_checks: vec!["fan".to_string()],
        threshold_overrides: [("cable.temperature.critical".to_string(), 95.0)].into(),
        ..AnalysisConfig::default()
    };
    let configured = CheckRegistry::configured(&config);
    assert!(!configured.contains("fan"));
    assert!(configured.contains("cable"));
    assert_eq!(
        configured.get("cable").unwrap().rules.limit("cable.temperature.critical"),
        Some(95.0)
    );
}

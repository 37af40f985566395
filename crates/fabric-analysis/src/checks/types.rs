//! Core types for check evaluation.

use fabric_core::types::{Row, Severity, SeverityCounts};
use serde::Serialize;

use crate::rules::RuleSet;

/// Magnitude of a row within its category, used to rank offenders.
pub type RankMetric = fn(&Row) -> f64;

/// One registered category check.
#[derive(Debug, Clone)]
pub struct CheckDefinition {
    /// Category id; also the snapshot key its rows arrive under.
    pub id: &'static str,
    pub label: &'static str,
    /// Group id this check belongs to.
    pub group: &'static str,
    pub description: &'static str,
    pub rules: RuleSet,
    /// Snapshot summary to scan, if any.
    pub summary_key: Option<&'static str>,
    /// Explicit summary field → bucket mapping. Empty falls back to the
    /// keyword heuristic.
    pub summary_fields: &'static [(&'static str, Severity)],
    /// Issue type attached to summary hits.
    pub summary_issue: Option<&'static str>,
    /// Merge rows that describe the same (NodeGUID, PortNumber) first.
    pub merge_by_port: bool,
    pub rank_metric: Option<RankMetric>,
}

impl CheckDefinition {
    pub fn new(
        id: &'static str,
        label: &'static str,
        group: &'static str,
        rules: RuleSet,
    ) -> Self {
        Self {
            id,
            label,
            group,
            description: "",
            rules,
            summary_key: Some(id),
            summary_fields: &[],
            summary_issue: None,
            merge_by_port: false,
            rank_metric: None,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn summary_key(mut self, key: Option<&'static str>) -> Self {
        self.summary_key = key;
        self
    }

    pub fn summary_fields(mut self, fields: &'static [(&'static str, Severity)]) -> Self {
        self.summary_fields = fields;
        self
    }

    pub fn summary_issue(mut self, issue: &'static str) -> Self {
        self.summary_issue = Some(issue);
        self
    }

    pub fn merge_by_port(mut self, merge: bool) -> Self {
        self.merge_by_port = merge;
        self
    }

    pub fn rank_metric(mut self, metric: RankMetric) -> Self {
        self.rank_metric = Some(metric);
        self
    }
}

/// A row with the severity and reason assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRow {
    /// Position in the evaluated row list (after port merge).
    pub index: usize,
    pub severity: Severity,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<&'static str>,
    pub row: Row,
}

/// A summary field that contributed to the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryHit {
    pub field: String,
    pub severity: Severity,
    pub count: u64,
}

/// Outcome of evaluating one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub check_id: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    /// Worst severity across rows and summary hits.
    pub status: Severity,
    /// Row counts plus summary contributions.
    pub counts: SeverityCounts,
    /// Counts from classified rows only.
    pub row_counts: SeverityCounts,
    pub summary_hits: Vec<SummaryHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_issue: Option<&'static str>,
    /// Every row, stable-sorted most severe first.
    pub rows: Vec<AnnotatedRow>,
    pub total_rows: usize,
}

impl CheckResult {
    /// Result for a check with no rows and no summary.
    pub fn empty(def: &CheckDefinition) -> Self {
        Self {
            check_id: def.id,
            label: def.label,
            group: def.group,
            status: Severity::Ok,
            counts: SeverityCounts::default(),
            row_counts: SeverityCounts::default(),
            summary_hits: Vec::new(),
            summary_issue: def.summary_issue,
            rows: Vec::new(),
            total_rows: 0,
        }
    }

    pub fn critical(&self) -> u64 {
        self.counts.critical
    }

    pub fn warning(&self) -> u64 {
        self.counts.warning
    }

    pub fn info(&self) -> u64 {
        self.counts.info
    }

    /// Rows classified above ok, most severe first.
    pub fn flagged_rows(&self) -> impl Iterator<Item = &AnnotatedRow> + '_ {
        self.rows.iter().filter(|r| r.severity.is_flagged())
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_rows().count()
    }
}

/// A named set of checks reported together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: &'static str,
    pub label: &'static str,
    /// Member check ids in report order.
    pub checks: Vec<&'static str>,
}

impl Group {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            checks: Vec::new(),
        }
    }
}

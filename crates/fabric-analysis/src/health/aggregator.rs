//! Cross-category aggregation: totals, penalty score, grade, status, and
//! the severity-ordered issue list.

use std::collections::BTreeMap;

use fabric_core::config::ScoringConfig;
use fabric_core::tracing::metrics;
use fabric_core::types::{Severity, SeverityCounts};

use super::grade::Grade;
use super::types::{GroupHealth, HealthScoreReport, HealthStatus, IssueDetails, IssueEntry, Totals};
use crate::checks::{AnnotatedRow, CheckResult, Group, SummaryHit};
use crate::knowledge::KnowledgeBase;
use crate::resolver::{self, aliases};

/// Combines check results into one [`HealthScoreReport`].
#[derive(Debug, Clone)]
pub struct HealthAggregator<'kb> {
    critical_weight: f64,
    warning_weight: f64,
    info_weight: f64,
    healthy_threshold: u32,
    warning_threshold: u32,
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> HealthAggregator<'kb> {
    pub fn new(scoring: &ScoringConfig, knowledge: &'kb KnowledgeBase) -> Self {
        Self {
            critical_weight: scoring.effective_critical_weight(),
            warning_weight: scoring.effective_warning_weight(),
            info_weight: scoring.effective_info_weight(),
            healthy_threshold: scoring.effective_healthy_threshold(),
            warning_threshold: scoring.effective_warning_threshold(),
            knowledge,
        }
    }

    /// `100 - critical·Wc - warning·Ww - info·Wi`, clamped to 0..=100 and
    /// rounded. Non-increasing in every count.
    pub fn score(&self, counts: &SeverityCounts) -> u32 {
        let penalty = counts.critical as f64 * self.critical_weight
            + counts.warning as f64 * self.warning_weight
            + counts.info as f64 * self.info_weight;
        (100.0 - penalty).clamp(0.0, 100.0).round() as u32
    }

    pub fn status(&self, score: u32) -> HealthStatus {
        if score >= self.healthy_threshold {
            HealthStatus::Healthy
        } else if score >= self.warning_threshold {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }

    /// Aggregate `results` under `groups`. Checks with no rows and no summary
    /// contribute nothing; an empty input scores 100.
    pub fn aggregate(&self, results: &[CheckResult], groups: &[Group]) -> HealthScoreReport {
        let mut totals = SeverityCounts::default();
        for result in results {
            totals.merge(&result.counts);
        }

        let groups: Vec<GroupHealth> = groups
            .iter()
            .map(|group| self.group_health(group, results))
            .collect();
        let category_scores: BTreeMap<&'static str, u32> =
            groups.iter().map(|g| (g.id, g.score)).collect();

        let mut issues: Vec<IssueEntry> = results
            .iter()
            .flat_map(|result| self.issues_for(result))
            .collect();
        // Stable: discovery order survives within a tier.
        issues.sort_by_key(|issue| issue.severity);

        let score = self.score(&totals);
        tracing::Span::current().record(metrics::HEALTH_SCORE, score);
        tracing::debug!(
            score,
            critical = totals.critical,
            warning = totals.warning,
            info = totals.info,
            issues = issues.len(),
            "health aggregated"
        );

        HealthScoreReport {
            score,
            grade: Grade::from_score(score),
            status: self.status(score),
            totals: Totals::from(totals),
            category_scores,
            groups,
            issues,
        }
    }

    fn group_health(&self, group: &Group, results: &[CheckResult]) -> GroupHealth {
        let mut counts = SeverityCounts::default();
        let mut status = Severity::Ok;
        for result in results.iter().filter(|r| group.checks.contains(&r.check_id)) {
            counts.merge(&result.counts);
            status = status.worst(result.status);
        }
        GroupHealth {
            id: group.id,
            label: group.label,
            status,
            score: self.score(&counts),
            counts,
            checks: group.checks.clone(),
        }
    }

    fn issues_for<'r>(&'r self, result: &'r CheckResult) -> impl Iterator<Item = IssueEntry> + 'r {
        let rows = result
            .flagged_rows()
            .map(move |row| self.row_issue(result, row));
        let hits = result
            .summary_hits
            .iter()
            .filter(|hit| hit.severity.is_flagged())
            .map(move |hit| self.summary_issue(result, hit));
        rows.chain(hits)
    }

    fn row_issue(&self, result: &CheckResult, row: &AnnotatedRow) -> IssueEntry {
        let text = |field: &[&str]| {
            resolver::resolve_text(&row.row, field).map(|t| t.into_owned())
        };
        IssueEntry {
            category: result.check_id,
            severity: row.severity,
            description: format!("{}: {}", result.label, row.reason),
            node_guid: text(aliases::NODE_GUID),
            node_name: text(aliases::NODE_NAME),
            port_number: text(aliases::PORT_NUMBER),
            issue_type: row.issue,
            details: self.details(row.issue),
        }
    }

    fn summary_issue(&self, result: &CheckResult, hit: &SummaryHit) -> IssueEntry {
        IssueEntry {
            category: result.check_id,
            severity: hit.severity,
            description: format!("{}: summary reports {} {}", result.label, hit.count, hit.field),
            node_guid: None,
            node_name: None,
            port_number: None,
            issue_type: result.summary_issue,
            details: self.details(result.summary_issue),
        }
    }

    fn details(&self, issue: Option<&'static str>) -> IssueDetails {
        IssueDetails {
            kb: issue.map(|id| self.knowledge.lookup(id)),
        }
    }
}

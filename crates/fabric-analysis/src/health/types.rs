//! Health report types.

use std::collections::BTreeMap;
use std::fmt;

use fabric_core::types::{Severity, SeverityCounts};
use serde::Serialize;

use super::grade::Grade;
use crate::knowledge::KbEntry;

/// Overall verdict band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flagged counts across the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub critical: u64,
    pub warning: u64,
    pub info: u64,
}

impl From<SeverityCounts> for Totals {
    fn from(counts: SeverityCounts) -> Self {
        Self {
            critical: counts.critical,
            warning: counts.warning,
            info: counts.info,
        }
    }
}

/// Knowledge attached to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IssueDetails {
    pub kb: Option<&'static KbEntry>,
}

/// One flagged finding, from a row or a summary field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueEntry {
    /// Check id the issue came from.
    pub category: &'static str,
    pub severity: Severity,
    pub description: String,
    pub node_guid: Option<String>,
    pub node_name: Option<String>,
    pub port_number: Option<String>,
    pub issue_type: Option<&'static str>,
    pub details: IssueDetails,
}

/// Score and status of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHealth {
    pub id: &'static str,
    pub label: &'static str,
    /// Worst status among member checks.
    pub status: Severity,
    pub score: u32,
    pub counts: SeverityCounts,
    pub checks: Vec<&'static str>,
}

/// Cross-category verdict for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScoreReport {
    /// 0-100, higher is healthier.
    pub score: u32,
    pub grade: Grade,
    pub status: HealthStatus,
    pub totals: Totals,
    /// Group id → group score.
    pub category_scores: BTreeMap<&'static str, u32>,
    pub groups: Vec<GroupHealth>,
    /// Critical first, then warning, then info; discovery order within a tier.
    pub issues: Vec<IssueEntry>,
}

impl HealthScoreReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }

    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &IssueEntry> + '_ {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

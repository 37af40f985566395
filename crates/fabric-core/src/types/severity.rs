//! Severity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier for a classified row. Variant order is the sort order:
/// `Critical < Warning < Info < Ok`, so an ascending sort puts the most
/// severe rows first and `min` picks the worst of two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Ok,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Ok => "ok",
        }
    }

    pub fn all() -> &'static [Severity] {
        &[Self::Critical, Self::Warning, Self::Info, Self::Ok]
    }

    /// 0 for critical up to 3 for ok.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// A row is flagged when it is classified above ok.
    pub fn is_flagged(&self) -> bool {
        *self != Self::Ok
    }

    /// The more severe of two tiers.
    pub fn worst(self, other: Severity) -> Severity {
        self.min(other)
    }

    pub fn is_more_severe_than(&self, other: Severity) -> bool {
        *self < other
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub warning: u64,
    pub info: u64,
    pub ok: u64,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity, n: u64) {
        let slot = match severity {
            Severity::Critical => &mut self.critical,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
            Severity::Ok => &mut self.ok,
        };
        *slot = slot.saturating_add(n);
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Ok => self.ok,
        }
    }

    pub fn merge(&mut self, other: &SeverityCounts) {
        for &severity in Severity::all() {
            self.add(severity, other.get(severity));
        }
    }

    /// Count of everything above ok.
    pub fn flagged(&self) -> u64 {
        self.critical
            .saturating_add(self.warning)
            .saturating_add(self.info)
    }

    /// Most severe tier with a nonzero count; `Ok` when nothing is flagged.
    pub fn worst(&self) -> Severity {
        [Severity::Critical, Severity::Warning, Severity::Info]
            .into_iter()
            .find(|s| self.get(*s) > 0)
            .unwrap_or(Severity::Ok)
    }
}

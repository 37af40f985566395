//! Knowledge-base entry type.

use fabric_core::types::Severity;
use serde::Serialize;

/// Static explanation and remediation for one issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KbEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// Group the issue belongs to (`physical`, `link`, `traffic`, `platform`, `general`).
    pub category: &'static str,
    /// Default severity of the issue type.
    pub severity: Severity,
    pub explanation: &'static str,
    pub causes: &'static [&'static str],
    /// Recommended actions; list order is priority order.
    pub actions: &'static [&'static str],
    pub reference: &'static str,
}

impl KbEntry {
    /// Every searchable text of the entry.
    pub(crate) fn texts(&self) -> impl Iterator<Item = &'static str> {
        [self.title, self.explanation]
            .into_iter()
            .chain(self.causes.iter().copied())
            .chain(self.actions.iter().copied())
    }
}

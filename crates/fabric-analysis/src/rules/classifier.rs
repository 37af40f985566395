//! First-match-wins classification of one row against one rule set.

use fabric_core::constants::REASON_NORMAL;
use fabric_core::types::{Row, Severity};
use serde::Serialize;

use super::render::render;
use super::types::RuleSet;

/// Severity and rendered reason assigned to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub severity: Severity,
    pub reason: String,
    /// Knowledge-base issue type of the matched rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<&'static str>,
    /// Key of the matched rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl Classification {
    pub fn normal() -> Self {
        Self {
            severity: Severity::Ok,
            reason: REASON_NORMAL.to_string(),
            issue: None,
            rule: None,
        }
    }
}

/// Classify `row` under `rules`. Never fails: missing or malformed fields
/// simply fail to match and the row falls through to ok.
pub fn classify(row: &Row, rules: &RuleSet) -> Classification {
    rules
        .rules
        .iter()
        .find_map(|rule| {
            rule.condition.evaluate(row).map(|observed| Classification {
                severity: rule.severity,
                reason: render(rule.reason, &observed),
                issue: rule.issue,
                rule: Some(rule.key),
            })
        })
        .unwrap_or_else(Classification::normal)
}

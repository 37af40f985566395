//! Remediation plan: knowledge-base actions for every flagged issue,
//! deduplicated by text, most severe first.

use fabric_core::types::collections::FxHashSet;
use fabric_core::types::Severity;
use serde::Serialize;

use crate::health::IssueEntry;
use crate::knowledge::KnowledgeBase;

/// One remediation step. Tags come from the first issue that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPlanItem {
    /// 1-based position in the plan.
    pub priority: usize,
    pub action: &'static str,
    pub severity: Severity,
    /// Check id of the originating issue.
    pub category: &'static str,
    pub kb_id: &'static str,
    pub title: &'static str,
    pub reference: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ActionPlanBuilder<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> ActionPlanBuilder<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Walk `issues` severity-first (stable), append each action of the
    /// issue's entry not yet in the plan. Issues without a registered entry
    /// add nothing. An empty plan means no remediation is needed.
    pub fn build(&self, issues: &[IssueEntry]) -> Vec<ActionPlanItem> {
        let mut ordered: Vec<&IssueEntry> = issues
            .iter()
            .filter(|issue| issue.severity.is_flagged())
            .collect();
        ordered.sort_by_key(|issue| issue.severity);

        let mut seen: FxHashSet<&'static str> = FxHashSet::default();
        let mut plan = Vec::new();
        for issue in ordered {
            let Some(entry) = issue.issue_type.and_then(|id| self.knowledge.get(id)) else {
                continue;
            };
            for &action in entry.actions {
                if !seen.insert(action) {
                    continue;
                }
                plan.push(ActionPlanItem {
                    priority: plan.len() + 1,
                    action,
                    severity: issue.severity,
                    category: issue.category,
                    kb_id: entry.id,
                    title: entry.title,
                    reference: entry.reference,
                });
            }
        }
        plan
    }
}

/// Shorthand for `ActionPlanBuilder::new(knowledge).build(issues)`.
pub fn build_action_plan(issues: &[IssueEntry], knowledge: &KnowledgeBase) -> Vec<ActionPlanItem> {
    ActionPlanBuilder::new(knowledge).build(issues)
}

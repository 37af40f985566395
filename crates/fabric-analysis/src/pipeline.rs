//! End-to-end snapshot analysis: evaluate every check in parallel, then
//! aggregate, rank, and plan sequentially.

use std::time::Instant;

use fabric_core::config::{FabricConfig, ScoringConfig};
use fabric_core::tracing::metrics;
use fabric_core::types::Snapshot;
use rayon::prelude::*;
use serde::Serialize;

use crate::checks::{CheckEvaluator, CheckRegistry, CheckResult, EvaluationOptions};
use crate::health::{HealthAggregator, HealthScoreReport};
use crate::insights::{top_n, Insight};
use crate::knowledge::KnowledgeBase;
use crate::plan::{ActionPlanBuilder, ActionPlanItem};
use crate::rules::catalog;

/// Top offenders of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInsights {
    pub check_id: &'static str,
    pub label: &'static str,
    pub items: Vec<Insight>,
}

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub health: HealthScoreReport,
    /// Per-check results in registry order.
    pub checks: Vec<CheckResult>,
    pub insights: Vec<CheckInsights>,
    pub action_plan: Vec<ActionPlanItem>,
    /// Snapshot categories no check knows about.
    pub unrecognized_categories: Vec<String>,
}

impl AnalysisReport {
    pub fn check(&self, id: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.check_id == id)
    }
}

/// Configured analysis pipeline. Reusable across snapshots.
#[derive(Debug, Clone)]
pub struct HealthAnalyzer<'kb> {
    registry: CheckRegistry,
    evaluator: CheckEvaluator,
    scoring: ScoringConfig,
    top_n: usize,
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> HealthAnalyzer<'kb> {
    pub fn new(config: &FabricConfig, knowledge: &'kb KnowledgeBase) -> Self {
        Self {
            registry: CheckRegistry::configured(&config.analysis),
            evaluator: CheckEvaluator::new(EvaluationOptions::from(&config.analysis)),
            scoring: config.scoring.clone(),
            top_n: config.insights.effective_top_n(),
            knowledge,
        }
    }

    /// Replace the check registry.
    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Analyze one snapshot. Never fails; identical snapshots produce
    /// identical reports.
    pub fn analyze(&self, snapshot: &Snapshot) -> AnalysisReport {
        let span = tracing::info_span!(
            "analyze_snapshot",
            categories = snapshot.keys().len(),
            rows = snapshot.total_rows(),
            health_score = tracing::field::Empty,
            action_items = tracing::field::Empty,
            analysis_time = tracing::field::Empty,
        );
        let _guard = span.enter();
        let start = Instant::now();

        let unrecognized_categories = self.unrecognized(snapshot);

        let checks: Vec<CheckResult> = self
            .registry
            .checks()
            .par_iter()
            .map(|def| {
                let _guard = span.enter();
                let summary = def.summary_key.and_then(|key| snapshot.summary(key));
                self.evaluator.evaluate(def, snapshot.rows(def.id), summary)
            })
            .collect();

        let health = HealthAggregator::new(&self.scoring, self.knowledge)
            .aggregate(&checks, self.registry.groups());

        let insights = self.insights(&checks);
        let action_plan = ActionPlanBuilder::new(self.knowledge).build(&health.issues);

        span.record(metrics::ACTION_ITEMS, action_plan.len());
        span.record(metrics::ANALYSIS_TIME, start.elapsed().as_millis() as u64);
        tracing::info!(
            score = health.score,
            grade = %health.grade,
            status = %health.status,
            issues = health.issues.len(),
            "snapshot analyzed"
        );

        AnalysisReport {
            health,
            checks,
            insights,
            action_plan,
            unrecognized_categories,
        }
    }

    fn insights(&self, checks: &[CheckResult]) -> Vec<CheckInsights> {
        checks
            .iter()
            .filter(|result| !result.rows.is_empty())
            .map(|result| {
                let metric = self.registry.get(result.check_id).and_then(|d| d.rank_metric);
                CheckInsights {
                    check_id: result.check_id,
                    label: result.label,
                    items: top_n(result, self.top_n, metric).map(Insight::from).collect(),
                }
            })
            .collect()
    }

    fn unrecognized(&self, snapshot: &Snapshot) -> Vec<String> {
        let mut unknown = Vec::new();
        for key in snapshot.keys() {
            if self.registry.contains(key) {
                continue;
            }
            if catalog::CATEGORIES.contains(&key) {
                tracing::debug!(category = key, "category present but its check is disabled");
            } else {
                tracing::warn!(category = key, "no check registered for category");
                unknown.push(key.to_string());
            }
        }
        unknown
    }
}

//! Fabric health engine: classifies every row of a diagnostic snapshot,
//! aggregates one score across categories, ranks top offenders, and builds
//! a knowledge-base-backed remediation plan.
//!
//! Data flows one way: snapshot → [`checks`] (one evaluation per category,
//! fanned out) → [`health`] → {[`insights`], [`plan`]} → report.

pub mod checks;
pub mod health;
pub mod insights;
pub mod knowledge;
pub mod pipeline;
pub mod plan;
pub mod reporters;
pub mod resolver;
pub mod rules;

pub use checks::{CheckEvaluator, CheckRegistry, CheckResult};
pub use health::{HealthAggregator, HealthScoreReport, HealthStatus};
pub use knowledge::KnowledgeBase;
pub use pipeline::{AnalysisReport, HealthAnalyzer};
pub use plan::ActionPlanBuilder;
pub use rules::{classify, Classification, RuleSet};

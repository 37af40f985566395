//! Severity rules: declarative per-category rule sets and the single
//! first-match-wins classifier that evaluates them.
//!
//! - `types`: conditions, rules, rule sets
//! - `vocabulary`: categorical-string → severity mapping
//! - `classifier`: `classify(row, rule_set)`
//! - `catalog`: the built-in rule set of every category

pub mod catalog;
pub mod classifier;
pub mod render;
pub mod types;
pub mod vocabulary;

pub use classifier::{classify, Classification};
pub use types::{Condition, Observation, Rule, RuleSet};
pub use vocabulary::severity_from_label;

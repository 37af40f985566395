//! Core types for the rules engine.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use fabric_core::types::scalar::format_number;
use fabric_core::types::{Row, Severity};

use crate::resolver::{self, Aliases};
use super::vocabulary::severity_from_label;

/// Values a matched condition reports into the reason template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    /// Observed value, rendered as `{value}`.
    pub value: String,
    /// Threshold or reference it was compared with, rendered as `{limit}`.
    pub limit: String,
}

impl Observation {
    fn numeric(value: f64, limit: f64) -> Self {
        Self {
            value: format_number(value),
            limit: format_number(limit),
        }
    }

    fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            limit: String::new(),
        }
    }
}

/// A predicate over resolver-coerced fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Numeric value ≥ limit. Missing values coerce to 0.
    AtLeast { field: Aliases, limit: f64 },
    /// Numeric value > limit. Missing values coerce to 0.
    Above { field: Aliases, limit: f64 },
    /// Value present, numeric, and < limit.
    Below { field: Aliases, limit: f64 },
    /// Largest of several numeric values ≥ limit.
    MaxAtLeast { fields: &'static [Aliases], limit: f64 },
    /// `numerator / denominator × 100` ≥ limit, with a positive denominator.
    RatioAtLeast {
        numerator: Aliases,
        denominator: Aliases,
        limit: f64,
    },
    /// Value present and below a positive floor read from another field.
    BelowField { field: Aliases, floor: Aliases },
    /// Value present and at or above a positive ceiling read from another field.
    AtLeastField { field: Aliases, ceiling: Aliases },
    /// Alarm flag set (nonzero).
    Flag { field: Aliases },
    /// Flag present but clear (zero).
    FlagClear { field: Aliases },
    /// Categorical text maps to `tier` through the severity vocabulary.
    Vocabulary { field: Aliases, tier: Severity },
    /// Text equals one of `values`, ASCII case-insensitive.
    TextIn {
        field: Aliases,
        values: &'static [&'static str],
    },
    /// Both fields present and different after normalization.
    Mismatch { left: Aliases, right: Aliases },
    /// Dotted version in `field` older than the one in `reference`.
    VersionBelow { field: Aliases, reference: Aliases },
}

impl Condition {
    pub fn at_least(field: Aliases, limit: f64) -> Self {
        Self::AtLeast { field, limit }
    }

    pub fn above(field: Aliases, limit: f64) -> Self {
        Self::Above { field, limit }
    }

    pub fn below(field: Aliases, limit: f64) -> Self {
        Self::Below { field, limit }
    }

    pub fn max_at_least(fields: &'static [Aliases], limit: f64) -> Self {
        Self::MaxAtLeast { fields, limit }
    }

    pub fn ratio_at_least(numerator: Aliases, denominator: Aliases, limit: f64) -> Self {
        Self::RatioAtLeast {
            numerator,
            denominator,
            limit,
        }
    }

    pub fn flag(field: Aliases) -> Self {
        Self::Flag { field }
    }

    pub fn vocabulary(field: Aliases, tier: Severity) -> Self {
        Self::Vocabulary { field, tier }
    }

    pub fn text_in(field: Aliases, values: &'static [&'static str]) -> Self {
        Self::TextIn { field, values }
    }

    pub fn mismatch(left: Aliases, right: Aliases) -> Self {
        Self::Mismatch { left, right }
    }

    /// Numeric threshold carried by this condition, if any.
    pub fn limit(&self) -> Option<f64> {
        match self {
            Self::AtLeast { limit, .. }
            | Self::Above { limit, .. }
            | Self::Below { limit, .. }
            | Self::MaxAtLeast { limit, .. }
            | Self::RatioAtLeast { limit, .. } => Some(*limit),
            _ => None,
        }
    }

    fn limit_mut(&mut self) -> Option<&mut f64> {
        match self {
            Self::AtLeast { limit, .. }
            | Self::Above { limit, .. }
            | Self::Below { limit, .. }
            | Self::MaxAtLeast { limit, .. }
            | Self::RatioAtLeast { limit, .. } => Some(limit),
            _ => None,
        }
    }

    /// Evaluate against a row. `Some` carries what to render into the reason.
    pub fn evaluate(&self, row: &Row) -> Option<Observation> {
        match self {
            Self::AtLeast { field, limit } => {
                let value = resolver::resolve_number(row, field);
                (value >= *limit).then(|| Observation::numeric(value, *limit))
            }
            Self::Above { field, limit } => {
                let value = resolver::resolve_number(row, field);
                (value > *limit).then(|| Observation::numeric(value, *limit))
            }
            Self::Below { field, limit } => {
                let value = resolver::resolve_f64(row, field)?;
                (value < *limit).then(|| Observation::numeric(value, *limit))
            }
            Self::MaxAtLeast { fields, limit } => {
                let value = fields
                    .iter()
                    .map(|aliases| resolver::resolve_number(row, aliases))
                    .fold(0.0_f64, f64::max);
                (value >= *limit).then(|| Observation::numeric(value, *limit))
            }
            Self::RatioAtLeast {
                numerator,
                denominator,
                limit,
            } => {
                let den = resolver::resolve_number(row, denominator);
                if den <= 0.0 {
                    return None;
                }
                let pct = resolver::resolve_number(row, numerator) / den * 100.0;
                let pct = (pct * 10.0).round() / 10.0;
                (pct >= *limit).then(|| Observation::numeric(pct, *limit))
            }
            Self::BelowField { field, floor } => {
                let value = resolver::resolve_f64(row, field)?;
                let floor = resolver::resolve_number(row, floor);
                (floor > 0.0 && value < floor).then(|| Observation::numeric(value, floor))
            }
            Self::AtLeastField { field, ceiling } => {
                let value = resolver::resolve_f64(row, field)?;
                let ceiling = resolver::resolve_number(row, ceiling);
                (ceiling > 0.0 && value >= ceiling)
                    .then(|| Observation::numeric(value, ceiling))
            }
            Self::Flag { field } => {
                let value = resolver::resolve(row, field)?;
                resolver::parse_flag(value).then(|| Observation::text(value.as_text()))
            }
            Self::FlagClear { field } => {
                let value = resolver::resolve(row, field)?;
                (!resolver::parse_flag(value)).then(|| Observation::text(value.as_text()))
            }
            Self::Vocabulary { field, tier } => {
                let text = resolver::resolve_text(row, field)?;
                (severity_from_label(&text) == Some(*tier)).then(|| Observation::text(text))
            }
            Self::TextIn { field, values } => {
                let text = resolver::resolve_text(row, field)?;
                values
                    .iter()
                    .any(|v| v.eq_ignore_ascii_case(&text))
                    .then(|| Observation::text(text))
            }
            Self::Mismatch { left, right } => {
                let l = resolver::resolve_text(row, left)?;
                let r = resolver::resolve_text(row, right)?;
                (normalize(&l) != normalize(&r)).then(|| Observation {
                    value: l.into_owned(),
                    limit: r.into_owned(),
                })
            }
            Self::VersionBelow { field, reference } => {
                let current = resolver::resolve_text(row, field)?;
                let wanted = resolver::resolve_text(row, reference)?;
                (compare_versions(&current, &wanted)? == Ordering::Less).then(|| Observation {
                    value: current.into_owned(),
                    limit: wanted.into_owned(),
                })
            }
        }
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares dotted numeric versions segment by segment, padding the shorter
/// one with zeros. `None` when either side has no numeric segment.
pub(crate) fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = version_segments(a);
    let b = version_segments(b);
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let len = a.len().max(b.len());
    let pad = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
    Some(
        (0..len)
            .map(|i| pad(&a, i).cmp(&pad(&b, i)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
    )
}

fn version_segments(version: &str) -> Vec<u64> {
    version
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// One declarative rule: when `condition` matches, the row gets `severity`
/// and the rendered `reason`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Stable key `<check>.<measure>.<tier>`, used for threshold overrides.
    pub key: &'static str,
    pub condition: Condition,
    pub severity: Severity,
    /// Reason template; `{value}` and `{limit}` are substituted.
    pub reason: &'static str,
    /// Knowledge-base issue type raised by this rule.
    pub issue: Option<&'static str>,
}

impl Rule {
    pub fn new(key: &'static str, severity: Severity, condition: Condition) -> Self {
        Self {
            key,
            condition,
            severity,
            reason: "",
            issue: None,
        }
    }

    pub fn reason(mut self, reason: &'static str) -> Self {
        self.reason = reason;
        self
    }

    pub fn issue(mut self, issue: &'static str) -> Self {
        self.issue = Some(issue);
        self
    }
}

/// Ordered rules of one category; first match wins, no match is ok.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    pub category: &'static str,
    pub rules: Vec<Rule>,
    /// Measurement fields; a row resolving none of them carries no data
    /// this rule set can judge.
    pub required_fields: Vec<Aliases>,
}

impl RuleSet {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            rules: Vec::new(),
            required_fields: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn require(mut self, field: Aliases) -> Self {
        self.required_fields.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Current threshold of the rule with `key`.
    pub fn limit(&self, key: &str) -> Option<f64> {
        self.rules
            .iter()
            .find(|r| r.key == key)
            .and_then(|r| r.condition.limit())
    }

    /// Replace thresholds of rules whose key appears in `overrides`.
    /// Rule order is untouched. Returns how many rules changed.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, f64>) -> usize {
        let mut applied = 0;
        for rule in &mut self.rules {
            if let (Some(value), Some(limit)) =
                (overrides.get(rule.key), rule.condition.limit_mut())
            {
                *limit = *value;
                applied += 1;
            }
        }
        applied
    }

    /// True when the row resolves at least one required field. Rule sets
    /// without required fields accept every row.
    pub fn has_required_data(&self, row: &Row) -> bool {
        self.required_fields.is_empty() || resolver::any_present(row, &self.required_fields)
    }
}

/// The three categorical rules for one severity column, in tier order.
pub fn vocabulary_rules(
    key: &'static str,
    field: Aliases,
    reason: &'static str,
    issue: &'static str,
) -> [Rule; 3] {
    [Severity::Critical, Severity::Warning, Severity::Info].map(|tier| {
        Rule::new(key, tier, Condition::vocabulary(field, tier))
            .reason(reason)
            .issue(issue)
    })
}

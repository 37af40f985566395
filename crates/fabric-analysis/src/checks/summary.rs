//! Precomputed summary scan.
//!
//! A check either declares which summary fields feed which bucket, or
//! falls back to keyword matching on field names. Aggregate fields
//! (totals, averages, distributions) are skipped by the heuristic since
//! row-level classification already counts what they summarize.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use fabric_core::types::{Severity, Summary};

use super::types::SummaryHit;

const CRITICAL_TOKENS: &[&str] = &["critical", "severe", "error", "violation"];
const WARNING_TOKENS: &[&str] = &["warning", "mismatch", "missing", "alert"];
const SKIP_TOKENS: &[&str] = &["total", "avg", "max", "min", "healthy", "distribution"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Critical,
    Warning,
    Skip,
}

static TOKENS: LazyLock<Vec<(&'static str, TokenKind)>> = LazyLock::new(|| {
    CRITICAL_TOKENS
        .iter()
        .map(|t| (*t, TokenKind::Critical))
        .chain(WARNING_TOKENS.iter().map(|t| (*t, TokenKind::Warning)))
        .chain(SKIP_TOKENS.iter().map(|t| (*t, TokenKind::Skip)))
        .collect()
});

static MATCHER: LazyLock<Option<AhoCorasick>> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(TOKENS.iter().map(|(token, _)| *token))
        .ok()
});

/// Scan `summary` for counts. With a non-empty `allow_list` only the listed
/// fields are read, into their declared bucket.
pub fn scan_summary(summary: &Summary, allow_list: &[(&str, Severity)]) -> Vec<SummaryHit> {
    if allow_list.is_empty() {
        return scan_heuristic(summary);
    }
    for (field, value) in summary {
        let listed = allow_list.iter().any(|(name, _)| *name == field.as_str());
        if !listed && count_of(value.as_f64()).is_some() {
            tracing::debug!(field = %field, "summary field not in the allow-list, skipped");
        }
    }
    allow_list
        .iter()
        .filter_map(|(field, severity)| {
            let count = summary.get(*field).and_then(|v| count_of(v.as_f64()))?;
            Some(SummaryHit {
                field: (*field).to_string(),
                severity: *severity,
                count,
            })
        })
        .collect()
}

fn scan_heuristic(summary: &Summary) -> Vec<SummaryHit> {
    summary
        .iter()
        .filter_map(|(field, value)| {
            let severity = bucket_for(field)?;
            let count = count_of(value.as_f64())?;
            Some(SummaryHit {
                field: field.clone(),
                severity,
                count,
            })
        })
        .collect()
}

/// Bucket a summary field name falls into, if any.
pub fn bucket_for(field: &str) -> Option<Severity> {
    let (mut critical, mut warning) = (false, false);
    for kind in token_kinds(field) {
        match kind {
            TokenKind::Skip => return None,
            TokenKind::Critical => critical = true,
            TokenKind::Warning => warning = true,
        }
    }
    if critical {
        Some(Severity::Critical)
    } else if warning {
        Some(Severity::Warning)
    } else {
        None
    }
}

fn token_kinds(field: &str) -> Vec<TokenKind> {
    match MATCHER.as_ref() {
        Some(matcher) => matcher
            .find_overlapping_iter(field)
            .filter_map(|m| TOKENS.get(m.pattern().as_usize()).map(|(_, kind)| *kind))
            .collect(),
        None => {
            let lowered = field.to_ascii_lowercase();
            TOKENS
                .iter()
                .filter(|(token, _)| lowered.contains(token))
                .map(|(_, kind)| *kind)
                .collect()
        }
    }
}

/// Positive finite values round to a count; anything else contributes nothing.
fn count_of(value: Option<f64>) -> Option<u64> {
    let rounded = value?.round();
    (rounded >= 1.0).then_some(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_markers_win_over_severity_tokens() {
        assert_eq!(bucket_for("total_errors"), None);
        assert_eq!(bucket_for("max_critical_temp"), None);
        assert_eq!(bucket_for("critical_ports"), Some(Severity::Critical));
        assert_eq!(bucket_for("PKey_Mismatch"), Some(Severity::Warning));
        assert_eq!(bucket_for("ports_scanned"), None);
    }

    #[test]
    fn fractional_and_negative_values_do_not_count() {
        assert_eq!(count_of(Some(0.4)), None);
        assert_eq!(count_of(Some(-3.0)), None);
        assert_eq!(count_of(Some(2.6)), Some(3));
        assert_eq!(count_of(None), None);
    }
}

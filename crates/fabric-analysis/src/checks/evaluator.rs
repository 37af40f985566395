//! Runs a check's rule set over its rows and folds in the summary.

use std::borrow::Cow;
use std::time::Instant;

use fabric_core::config::AnalysisConfig;
use fabric_core::constants::REASON_INSUFFICIENT_DATA;
use fabric_core::tracing::metrics;
use fabric_core::types::{Row, Severity, SeverityCounts, Summary};

use super::merge::merge_port_records;
use super::summary::scan_summary;
use super::types::{AnnotatedRow, CheckDefinition, CheckResult};
use crate::rules::{classify, Classification};

/// Knowledge-base issue type for rows without judgeable data.
pub const INSUFFICIENT_DATA_ISSUE: &str = "insufficient_data";

/// Behavior switches for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Honor each check's port-record merge.
    pub merge_port_records: bool,
    /// Rows with none of the required fields become info instead of ok.
    pub flag_insufficient_data: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            merge_port_records: true,
            flag_insufficient_data: false,
        }
    }
}

impl From<&AnalysisConfig> for EvaluationOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            merge_port_records: config.effective_merge_port_records(),
            flag_insufficient_data: config.effective_flag_insufficient_data(),
        }
    }
}

/// Evaluates one check at a time. Holds no state between calls, so a single
/// evaluator can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckEvaluator {
    options: EvaluationOptions,
}

impl CheckEvaluator {
    pub fn new(options: EvaluationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EvaluationOptions {
        self.options
    }

    /// Classify every row, count per tier, stable-sort most severe first,
    /// then add summary contributions. Zero rows and no summary yields an
    /// empty ok result.
    pub fn evaluate(
        &self,
        def: &CheckDefinition,
        rows: &[Row],
        summary: Option<&Summary>,
    ) -> CheckResult {
        let span = tracing::debug_span!(
            "evaluate_check",
            check = def.id,
            rows_classified = tracing::field::Empty,
            flagged_rows = tracing::field::Empty,
            check_evaluation_time = tracing::field::Empty,
        );
        let _guard = span.enter();
        let start = Instant::now();

        let rows: Cow<'_, [Row]> = if def.merge_by_port && self.options.merge_port_records {
            Cow::Owned(merge_port_records(rows, &def.rules))
        } else {
            Cow::Borrowed(rows)
        };

        let mut annotated: Vec<AnnotatedRow> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let verdict = self.classify_row(def, row);
                AnnotatedRow {
                    index,
                    severity: verdict.severity,
                    reason: verdict.reason,
                    issue: verdict.issue,
                    row: row.clone(),
                }
            })
            .collect();
        // Stable: equal severities keep input order.
        annotated.sort_by_key(|r| r.severity);

        let mut row_counts = SeverityCounts::default();
        for row in &annotated {
            row_counts.add(row.severity, 1);
        }

        let summary_hits = summary
            .map(|s| scan_summary(s, def.summary_fields))
            .unwrap_or_default();
        let mut counts = row_counts;
        for hit in &summary_hits {
            counts.add(hit.severity, hit.count);
        }

        let flagged = annotated.iter().filter(|r| r.severity.is_flagged()).count();
        let elapsed_ms = start.elapsed().as_millis() as u64;
        span.record(metrics::ROWS_CLASSIFIED, annotated.len());
        span.record(metrics::FLAGGED_ROWS, flagged);
        span.record(metrics::CHECK_EVALUATION_TIME, elapsed_ms);
        tracing::debug!(
            critical = counts.critical,
            warning = counts.warning,
            info = counts.info,
            summary_hits = summary_hits.len(),
            "check evaluated"
        );

        CheckResult {
            check_id: def.id,
            label: def.label,
            group: def.group,
            status: counts.worst(),
            counts,
            row_counts,
            summary_hits,
            summary_issue: def.summary_issue,
            total_rows: annotated.len(),
            rows: annotated,
        }
    }

    fn classify_row(&self, def: &CheckDefinition, row: &Row) -> Classification {
        if self.options.flag_insufficient_data && !def.rules.has_required_data(row) {
            return Classification {
                severity: Severity::Info,
                reason: REASON_INSUFFICIENT_DATA.to_string(),
                issue: Some(INSUFFICIENT_DATA_ISSUE),
                rule: None,
            };
        }
        classify(row, &def.rules)
    }
}

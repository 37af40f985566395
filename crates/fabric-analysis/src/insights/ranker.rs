//! Bounded top-N extraction over one check's annotated rows.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::vec;

use fabric_core::types::Severity;
use serde::Serialize;

use crate::checks::{AnnotatedRow, CheckResult, RankMetric};
use crate::resolver::{self, aliases};

/// A row chosen by [`top_n`], with its 1-based rank and metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub metric: f64,
    pub row: &'a AnnotatedRow,
}

/// Owned, serializable form of a [`RankedRow`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub rank: usize,
    pub severity: Severity,
    pub metric: f64,
    pub reason: String,
    pub node_name: Option<String>,
    pub node_guid: Option<String>,
    pub port_number: Option<String>,
}

impl From<RankedRow<'_>> for Insight {
    fn from(ranked: RankedRow<'_>) -> Self {
        let row = &ranked.row.row;
        let text = |field: &[&str]| resolver::resolve_text(row, field).map(|t| t.into_owned());
        Self {
            rank: ranked.rank,
            severity: ranked.row.severity,
            metric: ranked.metric,
            reason: ranked.row.reason.clone(),
            node_name: text(aliases::NODE_NAME),
            node_guid: text(aliases::NODE_GUID),
            port_number: text(aliases::PORT_NUMBER),
        }
    }
}

/// Ranked rows, most severe first, then larger metric, then input order.
///
/// Finite and restartable: clone before iterating to replay.
#[derive(Debug, Clone)]
pub struct TopN<'a> {
    rows: &'a [AnnotatedRow],
    picked: vec::IntoIter<(usize, f64)>,
    rank: usize,
}

impl<'a> Iterator for TopN<'a> {
    type Item = RankedRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (position, metric) = self.picked.next()?;
        let row = self.rows.get(position)?;
        self.rank += 1;
        Some(RankedRow {
            rank: self.rank,
            metric,
            row,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.picked.size_hint()
    }
}

impl ExactSizeIterator for TopN<'_> {}

impl FusedIterator for TopN<'_> {}

/// Select at most `n` rows of `result`. Without a metric, rows rank by
/// severity and input order alone. Does not touch `result`.
pub fn top_n(result: &CheckResult, n: usize, metric: Option<RankMetric>) -> TopN<'_> {
    let rows = result.rows.as_slice();
    let mut keyed: Vec<(usize, f64)> = rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let value = metric.map_or(0.0, |f| f(&row.row));
            (position, if value.is_finite() { value } else { f64::MIN })
        })
        .collect();

    let order = |a: &(usize, f64), b: &(usize, f64)| -> Ordering {
        let (sa, sb) = (rows[a.0].severity, rows[b.0].severity);
        sa.cmp(&sb)
            .then_with(|| b.1.total_cmp(&a.1))
            .then_with(|| rows[a.0].index.cmp(&rows[b.0].index))
    };

    if n == 0 {
        keyed.clear();
    } else if n < keyed.len() {
        keyed.select_nth_unstable_by(n - 1, order);
        keyed.truncate(n);
    }
    keyed.sort_by(order);

    TopN {
        rows,
        picked: keyed.into_iter(),
        rank: 0,
    }
}

//! Port-record merge: rows describing the same (NodeGUID, PortNumber)
//! collapse into one before classification.

use fabric_core::types::collections::FxHashMap;
use fabric_core::types::{Row, Severity};

use crate::resolver::{self, aliases};
use crate::rules::{classify, RuleSet};

/// Normalized port identity, or `None` when the row lacks either part.
pub fn port_key(row: &Row) -> Option<(String, String)> {
    let guid = resolver::resolve_text(row, aliases::NODE_GUID)?;
    let port = resolver::resolve_text(row, aliases::PORT_NUMBER)?;
    let guid = guid.to_ascii_lowercase();
    let guid = guid.strip_prefix("0x").unwrap_or(&guid);
    let guid = guid.trim_start_matches('0');
    Some((guid.to_string(), port.into_owned()))
}

struct Merged {
    row: Row,
    severity: Severity,
}

/// Merge rows sharing a port key, keeping first-seen order. Rows without a
/// key pass through untouched.
///
/// Each record is classified under `rules`. A record more severe than the
/// merged row so far becomes its base and the earlier fields only fill
/// blanks; otherwise the record only fills blanks. A fill that would lower
/// the merged severity is dropped, so the merged row is never classified
/// below its worst record.
pub fn merge_port_records(rows: &[Row], rules: &RuleSet) -> Vec<Row> {
    let mut merged: Vec<Merged> = Vec::with_capacity(rows.len());
    let mut positions: FxHashMap<(String, String), usize> = FxHashMap::default();

    for row in rows {
        let severity = classify(row, rules).severity;
        let Some(key) = port_key(row) else {
            merged.push(Merged {
                row: row.clone(),
                severity,
            });
            continue;
        };
        match positions.get(&key).and_then(|&pos| merged.get_mut(pos)) {
            Some(target) => absorb(target, row, severity, rules),
            None => {
                positions.insert(key, merged.len());
                merged.push(Merged {
                    row: row.clone(),
                    severity,
                });
            }
        }
    }
    merged.into_iter().map(|m| m.row).collect()
}

fn absorb(target: &mut Merged, incoming: &Row, incoming_severity: Severity, rules: &RuleSet) {
    let (base, base_severity, extra) = if incoming_severity.is_more_severe_than(target.severity) {
        (incoming.clone(), incoming_severity, &target.row)
    } else {
        (target.row.clone(), target.severity, incoming)
    };

    let mut candidate = base.clone();
    fill_blanks(&mut candidate, extra);
    let candidate_severity = classify(&candidate, rules).severity;

    // Lower sorts as more severe.
    *target = if candidate_severity <= base_severity {
        Merged {
            row: candidate,
            severity: candidate_severity,
        }
    } else {
        tracing::debug!(
            kept = %base_severity,
            rejected = %candidate_severity,
            "port merge kept the more severe record unfilled"
        );
        Merged {
            row: base,
            severity: base_severity,
        }
    };
}

fn fill_blanks(target: &mut Row, source: &Row) {
    for (field, value) in &source.fields {
        if value.is_blank() {
            continue;
        }
        let existing = target.fields.entry(field.clone()).or_default();
        if existing.is_blank() {
            *existing = value.clone();
        }
    }
}

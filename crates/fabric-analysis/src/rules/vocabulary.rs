//! Fixed vocabulary for categorical severity strings.

use fabric_core::types::Severity;

const CRITICAL_WORDS: &[&str] = &["critical", "severe", "error", "failed"];
const WARNING_WORDS: &[&str] = &["warning", "warn", "alert", "degraded"];
const INFO_WORDS: &[&str] = &["info", "notice"];
const OK_WORDS: &[&str] = &["ok", "healthy", "normal", "good"];

/// Maps a categorical label to a tier. Matching is exact after trimming and
/// lowercasing; anything outside the vocabulary is `None`.
pub fn severity_from_label(label: &str) -> Option<Severity> {
    let label = label.trim().to_ascii_lowercase();
    let label = label.as_str();
    if CRITICAL_WORDS.contains(&label) {
        Some(Severity::Critical)
    } else if WARNING_WORDS.contains(&label) {
        Some(Severity::Warning)
    } else if INFO_WORDS.contains(&label) {
        Some(Severity::Info)
    } else if OK_WORDS.contains(&label) {
        Some(Severity::Ok)
    } else {
        None
    }
}

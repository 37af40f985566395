//! Field resolver: reads one canonical value from a row through an ordered
//! list of alias field names.
//!
//! Upstream tables renamed their columns several times ("Node Name" vs
//! "NodeName", "PortNumber" vs "Port"). Every lookup in the engine goes
//! through an alias list so all historical names resolve without
//! reconfiguration. Alias order is fixed per field and always tried first
//! to last.

pub mod aliases;
pub mod flags;

use std::borrow::Cow;

use fabric_core::types::{Row, Scalar};

pub use flags::parse_flag;

/// An ordered list of alternate names for one concept.
pub type Aliases = &'static [&'static str];

/// First alias whose value is present: non-null, and for text non-empty
/// after trimming. `None` when no alias resolves.
pub fn resolve<'r>(row: &'r Row, aliases: &[&str]) -> Option<&'r Scalar> {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|value| !value.is_blank())
}

/// Like [`resolve`], returning `fallback` when no alias resolves.
pub fn resolve_or<'r>(row: &'r Row, aliases: &[&str], fallback: &'r Scalar) -> &'r Scalar {
    resolve(row, aliases).unwrap_or(fallback)
}

/// Resolved value as trimmed text.
pub fn resolve_text<'r>(row: &'r Row, aliases: &[&str]) -> Option<Cow<'r, str>> {
    resolve(row, aliases).map(|value| match value.as_text() {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    })
}

/// Resolved value as a finite number, or `None` when absent or not numeric.
pub fn resolve_f64(row: &Row, aliases: &[&str]) -> Option<f64> {
    resolve(row, aliases).and_then(Scalar::as_f64)
}

/// Resolved value as a finite number. Missing and non-numeric values
/// coerce to 0; never fails.
pub fn resolve_number(row: &Row, aliases: &[&str]) -> f64 {
    resolve_f64(row, aliases).unwrap_or(0.0)
}

/// Resolved value read as an alarm flag. See [`parse_flag`].
pub fn resolve_flag(row: &Row, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|value| !value.is_blank())
        .is_some_and(parse_flag)
}

/// True when at least one alias of any of the given fields resolves.
pub fn any_present(row: &Row, fields: &[Aliases]) -> bool {
    fields.iter().any(|aliases| resolve(row, aliases).is_some())
}

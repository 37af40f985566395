//! Static knowledge base: issue type → explanation, causes, ordered
//! remediation actions.
//!
//! Built once and shared read-only; there is no mutation API.

mod entries;
pub mod search;
pub mod types;

use std::sync::LazyLock;

use fabric_core::types::collections::{BTreeMap, FxHashMap};

pub use search::KbSearch;
pub use types::KbEntry;

use entries::{ENTRIES, UNKNOWN_ISSUE};

static SHARED: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::new);

/// Immutable registry of [`KbEntry`] values keyed by issue id.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: &'static [KbEntry],
    index: FxHashMap<&'static str, usize>,
}

impl KnowledgeBase {
    /// The built-in registry.
    pub fn new() -> Self {
        Self::from_entries(ENTRIES)
    }

    /// Registry over a custom entry table. On duplicate ids the first wins.
    pub fn from_entries(entries: &'static [KbEntry]) -> Self {
        let mut index = FxHashMap::default();
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.id).or_insert(position);
        }
        Self { entries, index }
    }

    /// Process-wide built-in registry.
    pub fn shared() -> &'static KnowledgeBase {
        &SHARED
    }

    /// Entry for `id`, or the generic "unknown issue" entry. Never fails.
    pub fn lookup(&self, id: &str) -> &'static KbEntry {
        self.get(id).unwrap_or(&UNKNOWN_ISSUE)
    }

    pub fn get(&self, id: &str) -> Option<&'static KbEntry> {
        let entries = self.entries;
        self.index.get(id).and_then(|&position| entries.get(position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The fallback entry returned for unregistered ids.
    pub fn unknown() -> &'static KbEntry {
        &UNKNOWN_ISSUE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static KbEntry> {
        self.entries.iter()
    }

    pub fn search(&self, query: &str) -> KbSearch<'static> {
        KbSearch::new(self.entries, query)
    }

    /// Entries grouped by category, registry order within each group.
    pub fn list_by_group(&self) -> BTreeMap<&'static str, Vec<&'static KbEntry>> {
        let mut groups: BTreeMap<&'static str, Vec<&'static KbEntry>> = BTreeMap::new();
        for entry in self.entries {
            groups.entry(entry.category).or_default().push(entry);
        }
        groups
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

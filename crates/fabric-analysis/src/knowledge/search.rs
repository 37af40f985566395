//! Lazy, restartable knowledge-base search.

use std::slice;

use super::types::KbEntry;

/// Entries whose title, explanation, causes, or actions contain the query,
/// ASCII case-insensitive. An empty query matches every entry.
///
/// Cloning the iterator restarts from the clone point; collecting it twice
/// from a fresh [`KnowledgeBase::search`](super::KnowledgeBase::search)
/// yields the same sequence.
#[derive(Debug, Clone)]
pub struct KbSearch<'a> {
    entries: slice::Iter<'a, KbEntry>,
    needle: String,
}

impl<'a> KbSearch<'a> {
    pub(crate) fn new(entries: &'a [KbEntry], query: &str) -> Self {
        Self {
            entries: entries.iter(),
            needle: query.trim().to_lowercase(),
        }
    }

    fn matches(&self, entry: &KbEntry) -> bool {
        self.needle.is_empty()
            || entry
                .texts()
                .any(|text| text.to_lowercase().contains(&self.needle))
    }
}

impl<'a> Iterator for KbSearch<'a> {
    type Item = &'a KbEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            if self.matches(entry) {
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

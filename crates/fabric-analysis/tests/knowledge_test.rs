//! Tests for the knowledge base: lookup fallback, search, grouping, and
//! coverage of every issue type the rules can raise.

use fabric_analysis::checks::CheckRegistry;
use fabric_analysis::knowledge::KnowledgeBase;
use fabric_analysis::rules::catalog;

/// Known issue types return their entry.
#[test]
fn test_lookup_known_issue() {
    let kb = KnowledgeBase::new();
    let entry = kb.lookup("cable_overheat");
    assert_eq!(entry.id, "cable_overheat");
    assert_eq!(entry.category, "physical");
    assert!(!entry.actions.is_empty());
    assert!(!entry.explanation.is_empty());
}

/// Unknown issue types return the generic entry.
#[test]
fn test_lookup_unknown_falls_back() {
    let kb = KnowledgeBase::new();
    let entry = kb.lookup("definitely_not_registered");
    assert_eq!(entry.id, KnowledgeBase::unknown().id);
    assert!(kb.get("definitely_not_registered").is_none());
    assert!(!kb.contains("definitely_not_registered"));
}

/// No two entries share an id.
#[test]
fn test_ids_are_unique() {
    let kb = KnowledgeBase::new();
    let mut ids: Vec<&str> = kb.iter().map(|e| e.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(kb.len(), total);
}

/// Every issue type a rule can raise has an entry.
#[test]
fn test_every_raised_issue_is_registered() {
    let kb = KnowledgeBase::shared();
    for category in catalog::CATEGORIES {
        for rule in catalog::rule_set(category).unwrap().rules {
            let issue = rule.issue.unwrap_or_else(|| panic!("rule {} raises no issue", rule.key));
            assert!(kb.contains(issue), "issue {issue} of {} not registered", rule.key);
        }
    }
    for check in CheckRegistry::builtin().checks() {
        if let Some(issue) = check.summary_issue {
            assert!(kb.contains(issue), "summary issue {issue} not registered");
        }
    }
    assert!(kb.contains("insufficient_data"));
}

/// Search ignores case.
#[test]
fn test_search_is_case_insensitive() {
    let kb = KnowledgeBase::new();
    let lower: Vec<&str> = kb.search("firmware").map(|e| e.id).collect();
    let upper: Vec<&str> = kb.search("FIRMWARE").map(|e| e.id).collect();
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert!(lower.contains(&"firmware_outdated"));
}

/// An empty query matches every entry.
#[test]
fn test_empty_search_matches_everything() {
    let kb = KnowledgeBase::new();
    assert_eq!(kb.search("").count(), kb.len());
    assert_eq!(kb.search("   ").count(), kb.len());
}

/// Iterating a search twice gives the same hits.
#[test]
fn test_search_is_restartable() {
    let kb = KnowledgeBase::new();
    let search = kb.search("cable");
    let first: Vec<&str> = search.clone().map(|e| e.id).collect();
    let second: Vec<&str> = search.map(|e| e.id).collect();
    assert_eq!(first, second);
    let again: Vec<&str> = kb.search("cable").map(|e| e.id).collect();
    assert_eq!(first, again);
}

/// Unmatched queries yield nothing.
#[test]
fn test_search_without_hits() {
    let kb = KnowledgeBase::new();
    assert_eq!(kb.search("zzzz-no-such-text").count(), 0);
}

/// Grouped listings cover the whole knowledge base.
#[test]
fn test_list_by_group_covers_all_entries() {
    let kb = KnowledgeBase::new();
    let groups = kb.list_by_group();
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, kb.len());
    for (group, entries) in &groups {
        assert!(entries.iter().all(|e| e.category == *group));
    }
    assert!(groups.contains_key("physical"));
    assert!(groups.contains_key("platform"));
}

//! Suggestion lookup over a history snapshot.
//!
//! Despite the "fuzzy" name the match is literal, case-insensitive substring
//! containment. Results keep the snapshot's order; nothing is scored.

use crate::types::history::{SearchHistoryItem, SUGGESTION_LIMIT};

/// Returns up to five suggestions for `query` from `history`.
///
/// An empty or whitespace-only query yields the head of `history` unchanged.
pub fn get_fuzzy_suggestions(query: &str, history: &[SearchHistoryItem]) -> Vec<SearchHistoryItem> {
    suggest_with_limit(query, history, SUGGESTION_LIMIT)
}

/// Same as [`get_fuzzy_suggestions`] with a caller-chosen result limit.
pub fn suggest_with_limit(
    query: &str,
    history: &[SearchHistoryItem],
    limit: usize,
) -> Vec<SearchHistoryItem> {
    if query.trim().is_empty() {
        return history.iter().take(limit).cloned().collect();
    }

    let needle = query.to_lowercase();
    history
        .iter()
        .filter(|item| item.query.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

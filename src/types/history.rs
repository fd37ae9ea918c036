use serde::{Deserialize, Serialize};

/// Default cap on the number of remembered queries.
pub const MAX_HISTORY_SIZE: usize = 20;

/// Default number of suggestions returned for a query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Represents a single recorded search query.
///
/// Serialized exactly as `{"id": .., "query": .., "timestamp": ..}`; this is the
/// persisted shape, so adding or renaming fields breaks existing stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub id: String,
    pub query: String,
    /// Creation time in milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

impl SearchHistoryItem {
    /// Returns true if `other` names the same query, ignoring case.
    pub fn matches_query(&self, other: &str) -> bool {
        self.query.to_lowercase() == other.to_lowercase()
    }
}

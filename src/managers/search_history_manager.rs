//! Search history store.
//!
//! Keeps a bounded, most-recent-first list of past queries as a single JSON
//! blob in a [`KeyValueStorage`]. Every mutation reads the whole list, edits
//! it in memory and writes the whole list back; there are no partial updates.
//!
//! Queries are unique ignoring case: re-adding one bumps it to the front and
//! stores the new spelling.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::services::suggestions;
use crate::storage::KeyValueStorage;
use crate::types::errors::HistoryError;
use crate::types::history::SearchHistoryItem;
use crate::types::settings::StoreSettings;

/// Source of the current time in milliseconds since the UNIX epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// Search history backed by a key-value storage.
pub struct SearchHistoryStore<S: KeyValueStorage> {
    storage: S,
    storage_key: String,
    max_history_size: usize,
    suggestion_limit: usize,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStorage> SearchHistoryStore<S> {
    /// Creates a store with default settings (`app-search-history`, cap 20).
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, &StoreSettings::default())
    }

    /// Creates a store using the key and limits from `settings`.
    pub fn with_settings(storage: S, settings: &StoreSettings) -> Self {
        Self {
            storage,
            storage_key: settings.storage_key(),
            max_history_size: settings.max_history_size,
            suggestion_limit: settings.suggestion_limit,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the time source.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Applies new key and limits. A lowered cap takes effect on the next read.
    pub fn configure(&mut self, settings: &StoreSettings) {
        self.storage_key = settings.storage_key();
        self.max_history_size = settings.max_history_size;
        self.suggestion_limit = settings.suggestion_limit;
    }

    /// Swaps the storage backend, returning the previous one.
    pub fn replace_storage(&mut self, storage: S) -> S {
        std::mem::replace(&mut self.storage, storage)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns a snapshot of the history, most recent first.
    ///
    /// A missing blob is an empty history. So is a blob that does not parse:
    /// that case is logged and never returned as an error. Only storage
    /// faults propagate. Entries past the cap are not returned.
    pub fn get_history(&self) -> Result<Vec<SearchHistoryItem>, HistoryError> {
        let raw = match self.storage.read(&self.storage_key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<SearchHistoryItem>>(&raw) {
            Ok(mut items) => {
                items.truncate(self.max_history_size);
                Ok(items)
            }
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "stored search history is malformed, treating it as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Records `query` at the front of the history.
    ///
    /// Any entry with the same query (ignoring case) is dropped first. The
    /// query is stored verbatim. Entries past the cap are evicted from the tail.
    pub async fn add_to_history(&mut self, query: &str) -> Result<(), HistoryError> {
        let mut history = self.get_history()?;
        history.retain(|item| !item.matches_query(query));

        let now = self.clock.now_millis();
        let item = SearchHistoryItem {
            id: Self::unique_id(now, &history),
            query: query.to_string(),
            timestamp: now,
        };
        history.insert(0, item);
        history.truncate(self.max_history_size);

        self.persist(&history)
    }

    /// Removes the entry with exactly this id. Unknown ids are a no-op.
    pub async fn remove_from_history(&mut self, id: &str) -> Result<(), HistoryError> {
        let mut history = self.get_history()?;
        history.retain(|item| item.id != id);
        self.persist(&history)
    }

    /// Replaces the stored history with an empty list.
    pub async fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.persist(&[])
    }

    /// Suggestions for `query` drawn from the stored history.
    pub fn suggestions(&self, query: &str) -> Result<Vec<SearchHistoryItem>, HistoryError> {
        let history = self.get_history()?;
        Ok(suggestions::suggest_with_limit(
            query,
            &history,
            self.suggestion_limit,
        ))
    }

    fn persist(&mut self, history: &[SearchHistoryItem]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(history)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;
        self.storage.write(&self.storage_key, &json)?;
        debug!(key = %self.storage_key, entries = history.len(), "search history written");
        Ok(())
    }

    /// Stringified timestamp, bumped past any id still in `history` so two
    /// adds within the same millisecond stay distinguishable.
    fn unique_id(now: i64, history: &[SearchHistoryItem]) -> String {
        let mut candidate = now;
        while history.iter().any(|item| item.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

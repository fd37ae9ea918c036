use serde::{Deserialize, Serialize};

use super::history::{MAX_HISTORY_SIZE, SUGGESTION_LIMIT};

/// Suffix appended to the namespace to form the storage key.
pub const STORAGE_KEY_SUFFIX: &str = "search-history";

/// Top-level store settings, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreSettings {
    /// Application namespace; the history lives under `<namespace>-search-history`.
    pub namespace: String,
    pub max_history_size: usize,
    pub suggestion_limit: usize,
    pub backend: StorageBackend,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            namespace: "app".to_string(),
            max_history_size: MAX_HISTORY_SIZE,
            suggestion_limit: SUGGESTION_LIMIT,
            backend: StorageBackend::Sqlite,
        }
    }
}

impl StoreSettings {
    /// Returns the fixed key the history blob is stored under.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.namespace, STORAGE_KEY_SUFFIX)
    }

    /// Checks value ranges that serde alone cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.namespace.trim().is_empty() {
            return Err("namespace must not be empty".to_string());
        }
        if self.max_history_size == 0 {
            return Err("max_history_size must be at least 1".to_string());
        }
        if self.suggestion_limit == 0 {
            return Err("suggestion_limit must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Which key-value backend holds the history blob.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

//! App core.
//!
//! Holds the settings engine and the search history store, and chooses the
//! storage backend from settings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::managers::search_history_manager::SearchHistoryStore;
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage, SqliteStorage};
use crate::types::errors::StorageError;
use crate::types::settings::{StorageBackend, StoreSettings};

/// Storage chosen at runtime.
pub type BoxedStorage = Box<dyn KeyValueStorage + Send>;

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "search-history.db";

/// Directory name used by the file backend inside the data directory.
pub const FILE_STORAGE_DIR: &str = "storage";

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub store: SearchHistoryStore<BoxedStorage>,
    backend: StorageBackend,
    data_dir: PathBuf,
}

impl App {
    /// Loads settings and opens the configured storage backend.
    ///
    /// A settings file that fails to load is logged and replaced by defaults;
    /// a backend that fails to open is an error.
    pub fn new(
        config_path: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            warn!(path = %settings_engine.get_config_path(), error = %e, "failed to load settings, using defaults");
        }

        let data_dir = data_dir.unwrap_or_else(platform::get_data_dir);
        let settings = settings_engine.get_settings().clone();
        let storage = open_storage(settings.backend, &data_dir)?;
        let store = SearchHistoryStore::with_settings(storage, &settings);

        info!(
            backend = ?settings.backend,
            data_dir = %data_dir.display(),
            key = %store.storage_key(),
            "search history ready"
        );

        Ok(Self {
            settings_engine,
            store,
            backend: settings.backend,
            data_dir,
        })
    }

    /// Updates one setting and applies it to the running store.
    ///
    /// If the new settings cannot be applied (the new backend fails to open),
    /// the previous settings are restored on disk and the store is left as it
    /// was.
    pub fn set_setting(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let previous = self.settings_engine.get_settings().clone();
        self.settings_engine.set_value(key, value)?;

        if let Err(e) = self.apply_settings() {
            warn!(key, error = %e, "failed to apply settings, restoring previous values");
            if let Err(restore_err) = self.settings_engine.replace(previous) {
                error!(error = %restore_err, "failed to restore previous settings");
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Pushes the current settings into the store, reopening storage if the
    /// backend changed. Switching away from `memory` discards its contents.
    ///
    /// The new backend is opened before anything else changes, so on error
    /// the store keeps its old storage, key and limits.
    pub fn apply_settings(&mut self) -> Result<(), StorageError> {
        let settings: StoreSettings = self.settings_engine.get_settings().clone();
        let storage = if settings.backend != self.backend {
            Some(open_storage(settings.backend, &self.data_dir)?)
        } else {
            None
        };

        if let Some(storage) = storage {
            self.store.replace_storage(storage);
            self.backend = settings.backend;
            info!(backend = ?settings.backend, "storage backend switched");
        }
        self.store.configure(&settings);
        Ok(())
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }
}

/// Opens the storage for `backend` under `data_dir`.
pub fn open_storage(backend: StorageBackend, data_dir: &Path) -> Result<BoxedStorage, StorageError> {
    let storage: BoxedStorage = match backend {
        StorageBackend::Sqlite => {
            fs::create_dir_all(data_dir)?;
            Box::new(SqliteStorage::open(data_dir.join(DATABASE_FILE))?)
        }
        StorageBackend::File => Box::new(FileStorage::new(data_dir.join(FILE_STORAGE_DIR))),
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    };
    Ok(storage)
}

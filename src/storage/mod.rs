//! Key-value persistence surface used by the search history store.
//!
//! A backend only has to read and replace whole string values by key. The
//! history store never issues partial updates.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::types::errors::StorageError;

/// Trait defining the key-value storage operations.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

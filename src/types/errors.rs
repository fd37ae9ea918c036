use std::fmt;

// === StorageError ===

/// Errors raised by a key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// A file system operation failed.
    Io(String),
    /// A SQLite operation failed.
    Database(String),
    /// The key cannot be used with this backend.
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {}", key),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

// === HistoryError ===

/// Errors related to search history operations.
///
/// Malformed stored data and unknown ids are not errors; only faults from the
/// underlying storage surface here.
#[derive(Debug)]
pub enum HistoryError {
    /// The storage backend failed to read or write.
    Storage(StorageError),
    /// The history list could not be serialized.
    Serialization(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Storage(e) => write!(f, "History storage error: {}", e),
            HistoryError::Serialization(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Storage(e) => Some(e),
            HistoryError::Serialization(_) => None,
        }
    }
}

impl From<StorageError> for HistoryError {
    fn from(e: StorageError) -> Self {
        HistoryError::Storage(e)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

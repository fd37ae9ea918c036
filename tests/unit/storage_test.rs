//! Unit tests for the key-value storage backends.

use search_history::storage::{FileStorage, KeyValueStorage, MemoryStorage, SqliteStorage};
use search_history::types::errors::StorageError;
use rstest::rstest;
use tempfile::TempDir;

fn exercise(storage: &mut dyn KeyValueStorage) {
    assert_eq!(storage.read("app-search-history").unwrap(), None);

    storage.write("app-search-history", "[]").unwrap();
    assert_eq!(storage.read("app-search-history").unwrap().as_deref(), Some("[]"));

    storage
        .write("app-search-history", r#"[{"id":"1","query":"q","timestamp":1}]"#)
        .unwrap();
    assert_eq!(
        storage.read("app-search-history").unwrap().as_deref(),
        Some(r#"[{"id":"1","query":"q","timestamp":1}]"#)
    );

    // other keys are untouched
    assert_eq!(storage.read("other-search-history").unwrap(), None);
}

#[rstest]
#[case::memory("memory")]
#[case::sqlite("sqlite")]
#[case::file("file")]
fn test_backend_read_write_replace(#[case] backend: &str) {
    let dir = TempDir::new().unwrap();
    let mut storage: Box<dyn KeyValueStorage> = match backend {
        "memory" => Box::new(MemoryStorage::new()),
        "sqlite" => Box::new(SqliteStorage::open_in_memory().unwrap()),
        _ => Box::new(FileStorage::new(dir.path().join("kv"))),
    };
    exercise(storage.as_mut());
}

#[test]
fn test_sqlite_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");

    {
        let mut storage = SqliteStorage::open(&path).unwrap();
        storage.write("k", "v1").unwrap();
    }

    let storage = SqliteStorage::open(&path).unwrap();
    assert_eq!(storage.read("k").unwrap().as_deref(), Some("v1"));
}

#[test]
fn test_file_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let mut first = FileStorage::new(dir.path());
    first.write("app-search-history", "[1]").unwrap();

    let second = FileStorage::new(dir.path());
    assert_eq!(second.read("app-search-history").unwrap().as_deref(), Some("[1]"));
    assert!(dir.path().join("app-search-history.json").exists());
    assert!(
        !dir.path().join("app-search-history.json.tmp").exists(),
        "temporary file must be renamed away"
    );
}

#[test]
fn test_file_rejects_traversal_key() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert!(matches!(
        storage.write("../outside", "x"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(
        storage.read("../outside"),
        Err(StorageError::InvalidKey(_))
    ));
}

#[test]
fn test_file_write_into_unwritable_location_fails() {
    let dir = TempDir::new().unwrap();
    // a regular file where the storage directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a dir").unwrap();

    let mut storage = FileStorage::new(&blocker);
    assert!(matches!(storage.write("k", "v"), Err(StorageError::Io(_))));
}

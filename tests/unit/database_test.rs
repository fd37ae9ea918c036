//! Unit tests for the database layer (connection + migrations).

use search_history::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use search_history::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_kv_store() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_store should exist after migrations");
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let result = run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed (idempotent)");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_open_file_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let db = Database::open(&db_path);
    assert!(db.is_ok(), "open with file path should succeed");
    assert!(db_path.exists(), "Database file should exist on disk");
}

#[test]
fn test_reopened_file_keeps_kv_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("kv.db");

    {
        let db = Database::open(&db_path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES ('app-search-history', '[]', 1)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&db_path).unwrap();
    let value: String = db
        .connection()
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'app-search-history'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "[]");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

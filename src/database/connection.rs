//! The SQLite file behind [`SqliteStorage`](crate::storage::SqliteStorage).
//!
//! A [`Database`] is only handed out once the `kv_store` table exists, so
//! storage code can query it without checking the schema itself.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// Connection to a key-value database at the current schema version.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the key-value database at `path`, creating the file and the
    /// `kv_store` table on first use. Older files are migrated in place.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrations::run_all(&db.conn)?;
        Ok(db)
    }

    /// Empty key-value database that lives as long as this value.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        migrations::run_all(&db.conn)?;
        Ok(db)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

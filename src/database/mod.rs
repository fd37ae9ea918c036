//! SQLite database layer backing the `sqlite` storage backend.
//!
//! Provides connection management and schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use search_history::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("search-history.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;

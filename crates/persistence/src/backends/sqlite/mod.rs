//! SQLite backend implementation.
//!
//! Supports both in-memory databases (used by tests) and file-based
//! databases. An in-memory database is served by a single pooled connection
//! so every request sees the same data.
//!
//! # Example
//!
//! ```no_run
//! use advocate_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("./data/advocates.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE advocates (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     first_name TEXT NOT NULL,
//!     last_name TEXT NOT NULL,
//!     city TEXT NOT NULL,
//!     degree TEXT NOT NULL,
//!     specialties TEXT NOT NULL DEFAULT '[]',  -- JSON array of tags
//!     years_of_experience INTEGER NOT NULL,
//!     phone_number INTEGER NOT NULL,
//!     created_at TEXT NOT NULL
//! );
//! ```
//!
//! Substring filters compare `unicode_lower(column)` against a lowercased
//! needle with `LIKE`. `unicode_lower` is registered on every pooled
//! connection, since SQLite's own `lower` and `LIKE` fold ASCII only.

mod backend;
pub mod query_builder;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use query_builder::{QueryBuilder, SqlFragment, SqlParam};
pub use schema::SCHEMA_VERSION;

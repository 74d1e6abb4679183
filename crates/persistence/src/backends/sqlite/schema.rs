//! SQLite schema definition and migrations.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
///
/// Safe to call repeatedly: a fresh database is created at the current
/// version. A database recorded at any other version is refused.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    match get_schema_version(conn)? {
        None => {
            create_schema_v1(conn)?;
            set_schema_version(conn, SCHEMA_VERSION)?;
            tracing::debug!(version = SCHEMA_VERSION, "Created advocate schema");
        }
        Some(SCHEMA_VERSION) => {}
        Some(version) => {
            return Err(migration_error(format!(
                "Unknown schema version {} (supported: {})",
                version, SCHEMA_VERSION
            )));
        }
    }

    Ok(())
}

fn get_schema_version(conn: &Connection) -> StorageResult<Option<i32>> {
    let version = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get::<_, Option<i32>>(0)
        })
        .map_err(|e| migration_error(format!("Failed to read schema version: {}", e)))?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| migration_error(format!("Failed to record schema version: {}", e)))?;
    Ok(())
}

/// Creates the version 1 schema.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    // AUTOINCREMENT keeps ids strictly increasing, never reusing a deleted id.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS advocates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            city TEXT NOT NULL,
            degree TEXT NOT NULL,
            specialties TEXT NOT NULL DEFAULT '[]',
            years_of_experience INTEGER NOT NULL CHECK (years_of_experience >= 0),
            phone_number INTEGER NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create advocates table: {}", e)))?;

    create_indexes(conn)
}

/// Create indexes on every filterable column.
fn create_indexes(conn: &Connection) -> StorageResult<()> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_advocates_first_name ON advocates(first_name)",
        "CREATE INDEX IF NOT EXISTS idx_advocates_last_name ON advocates(last_name)",
        "CREATE INDEX IF NOT EXISTS idx_advocates_city ON advocates(city)",
        "CREATE INDEX IF NOT EXISTS idx_advocates_degree ON advocates(degree)",
        "CREATE INDEX IF NOT EXISTS idx_advocates_years ON advocates(years_of_experience)",
        "CREATE INDEX IF NOT EXISTS idx_advocates_phone ON advocates(phone_number)",
    ];

    for index_sql in &indexes {
        conn.execute(index_sql, [])
            .map_err(|e| migration_error(format!("Failed to create index: {}", e)))?;
    }

    Ok(())
}

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

//! [`AdvocateStorage`] implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params, params_from_iter};

use crate::core::{AdvocateStorage, BackendKind};
use crate::error::StorageResult;
use crate::types::{Advocate, AdvocateQuery, NewAdvocate};

use super::SqliteBackend;
use super::backend::internal_error;
use super::query_builder::QueryBuilder;

const INSERT_SQL: &str = "INSERT INTO advocates \
     (first_name, last_name, city, degree, specialties, years_of_experience, phone_number, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

#[async_trait]
impl AdvocateStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    async fn find(&self, query: &AdvocateQuery) -> StorageResult<Vec<Advocate>> {
        let conn = self.get_connection()?;
        let fragment = QueryBuilder::new().build_select(query);

        tracing::trace!(sql = %fragment.sql, params = fragment.params.len(), "Executing advocate query");

        let mut stmt = conn
            .prepare(&fragment.sql)
            .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params_from_iter(fragment.params.iter()), row_to_advocate)
            .map_err(|e| internal_error(format!("Failed to execute query: {}", e)))?;

        let mut advocates = Vec::new();
        for row in rows {
            advocates.push(row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?);
        }

        Ok(advocates)
    }

    async fn insert(&self, advocate: NewAdvocate) -> StorageResult<Advocate> {
        advocate.validate()?;
        let conn = self.get_connection()?;
        insert_row(&conn, advocate, Utc::now())
    }

    async fn insert_many(&self, advocates: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        for advocate in &advocates {
            advocate.validate()?;
        }

        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let created_at = Utc::now();
        let mut created = Vec::with_capacity(advocates.len());
        for advocate in advocates {
            created.push(insert_row(&tx, advocate, created_at)?);
        }

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit transaction: {}", e)))?;

        tracing::debug!(count = created.len(), "Inserted advocates");
        Ok(created)
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM advocates", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count advocates: {}", e)))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}

fn insert_row(
    conn: &Connection,
    advocate: NewAdvocate,
    created_at: DateTime<Utc>,
) -> StorageResult<Advocate> {
    let specialties = serde_json::to_string(&advocate.specialties)?;

    conn.execute(
        INSERT_SQL,
        params![
            advocate.first_name,
            advocate.last_name,
            advocate.city,
            advocate.degree,
            specialties,
            advocate.years_of_experience,
            advocate.phone_number,
            created_at,
        ],
    )
    .map_err(|e| internal_error(format!("Failed to insert advocate: {}", e)))?;

    Ok(advocate.into_advocate(conn.last_insert_rowid(), created_at))
}

/// Maps a row selected with `SELECT_COLUMNS` to an advocate.
fn row_to_advocate(row: &Row<'_>) -> rusqlite::Result<Advocate> {
    let specialties_json: String = row.get(5)?;
    let specialties: Vec<String> = serde_json::from_str(&specialties_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Advocate {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        city: row.get(3)?,
        degree: row.get(4)?,
        specialties,
        years_of_experience: row.get(6)?,
        phone_number: row.get(7)?,
        created_at: row.get(8)?,
    })
}

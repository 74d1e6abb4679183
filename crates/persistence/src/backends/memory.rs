//! In-memory advocate storage.
//!
//! Evaluates [`AdvocateQuery`] directly against a vector of records. Text
//! containment folds case with full Unicode lowercasing, the same folding
//! the SQLite backend applies through `unicode_lower`.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::core::{AdvocateStorage, BackendKind};
use crate::error::StorageResult;
use crate::types::{Advocate, AdvocateQuery, NewAdvocate};

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Advocate>,
    last_id: i64,
}

/// Advocate storage held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: RwLock<MemoryState>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdvocateStorage for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn find(&self, query: &AdvocateQuery) -> StorageResult<Vec<Advocate>> {
        let state = self.state.read();

        let mut matched: Vec<&Advocate> = state.rows.iter().filter(|a| query.matches(a)).collect();
        matched.sort_by(|a, b| query.compare(a, b));

        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn insert(&self, advocate: NewAdvocate) -> StorageResult<Advocate> {
        advocate.validate()?;

        let mut state = self.state.write();
        state.last_id += 1;
        let created = advocate.into_advocate(state.last_id, Utc::now());
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn insert_many(&self, advocates: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        for advocate in &advocates {
            advocate.validate()?;
        }

        let created_at = Utc::now();
        let mut state = self.state.write();
        let mut created = Vec::with_capacity(advocates.len());
        for advocate in advocates {
            state.last_id += 1;
            created.push(advocate.into_advocate(state.last_id, created_at));
        }
        state.rows.extend(created.iter().cloned());
        Ok(created)
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.state.read().rows.len() as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

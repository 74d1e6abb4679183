//! Core advocate storage trait.
//!
//! This module defines [`AdvocateStorage`], the storage collaborator consumed
//! by the query executor. It is handed to every core function explicitly;
//! there is no global database handle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Advocate, AdvocateQuery, NewAdvocate};

use super::backend::BackendKind;

/// Storage collaborator for advocate records.
///
/// Reads are expressed as an [`AdvocateQuery`]: AND-combined conditions,
/// ascending sort keys, limit and offset. Implementations must apply them in
/// that order (filter, sort, then slice) and return rows in sort order.
///
/// The write methods exist for seeding and tests; the query path never
/// mutates storage.
///
/// # Example
///
/// ```ignore
/// use advocate_persistence::core::AdvocateStorage;
/// use advocate_persistence::types::{AdvocateQuery, NewAdvocate};
///
/// async fn example<S: AdvocateStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage
///         .insert(NewAdvocate::new("Ada", "Lovelace", "London", "PhD", 10, 5551234567))
///         .await?;
///     assert_eq!(created.first_name, "Ada");
///
///     let first_page = storage.find(&AdvocateQuery::new(10)).await?;
///     assert_eq!(first_page.len(), 1);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait AdvocateStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the kind of backend.
    fn backend_kind(&self) -> BackendKind;

    /// Runs a read query and returns the matching page in sort order.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the query cannot be executed.
    async fn find(&self, query: &AdvocateQuery) -> StorageResult<Vec<Advocate>>;

    /// Inserts one advocate, assigning its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank required fields, or a backend
    /// error if the write fails.
    async fn insert(&self, advocate: NewAdvocate) -> StorageResult<Advocate>;

    /// Inserts several advocates atomically, in order.
    ///
    /// Ids are assigned in input order. Either every row is written or none.
    async fn insert_many(&self, advocates: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>>;

    /// Counts all stored advocates.
    async fn count(&self) -> StorageResult<u64>;

    /// Verifies that the backend can serve reads.
    async fn health_check(&self) -> StorageResult<()>;
}

#[async_trait]
impl<S> AdvocateStorage for Arc<S>
where
    S: AdvocateStorage + ?Sized,
{
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn backend_kind(&self) -> BackendKind {
        (**self).backend_kind()
    }

    async fn find(&self, query: &AdvocateQuery) -> StorageResult<Vec<Advocate>> {
        (**self).find(query).await
    }

    async fn insert(&self, advocate: NewAdvocate) -> StorageResult<Advocate> {
        (**self).insert(advocate).await
    }

    async fn insert_many(&self, advocates: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        (**self).insert_many(advocates).await
    }

    async fn count(&self) -> StorageResult<u64> {
        (**self).count().await
    }

    async fn health_check(&self) -> StorageResult<()> {
        (**self).health_check().await
    }
}

//! Query executor.
//!
//! Composes the filter conditions, the sort order and the page into a
//! single [`AdvocateQuery`] and runs it against a storage collaborator.

use tracing::debug;

use crate::core::AdvocateStorage;
use crate::error::StorageResult;
use crate::types::{Advocate, AdvocateFilter, AdvocateQuery, PageRequest, SortOrder};

use super::conditions::build_all_conditions;

/// Builds the complete, immutable query for a page of advocates.
pub fn build_query(
    page: PageRequest,
    filter: Option<&AdvocateFilter>,
    order: SortOrder,
) -> AdvocateQuery {
    AdvocateQuery::new(page.page_size())
        .with_conditions(build_all_conditions(filter))
        .with_sort(order.sort_keys())
        .with_offset(page.offset())
}

/// Returns one ordered page of advocates matching `filter`.
///
/// A page past the end of the matching rows is empty, not an error.
/// Storage failures propagate unchanged.
///
/// # Example
///
/// ```no_run
/// use advocate_persistence::backends::memory::InMemoryBackend;
/// use advocate_persistence::search::list_advocates;
/// use advocate_persistence::types::{AdvocateFilter, PageRequest, SortOrder};
///
/// # async fn example() -> advocate_persistence::error::StorageResult<()> {
/// let backend = InMemoryBackend::new();
/// let filter = AdvocateFilter::new().with_city("London");
/// let page = PageRequest::parse(Some("2"), Some("5"));
///
/// let advocates = list_advocates(&backend, page, Some(&filter), SortOrder::Id).await?;
/// assert!(advocates.len() <= 5);
/// # Ok(())
/// # }
/// ```
pub async fn list_advocates<S>(
    storage: &S,
    page: PageRequest,
    filter: Option<&AdvocateFilter>,
    order: SortOrder,
) -> StorageResult<Vec<Advocate>>
where
    S: AdvocateStorage + ?Sized,
{
    let query = build_query(page, filter, order);

    debug!(
        backend = storage.backend_name(),
        conditions = query.conditions.len(),
        limit = query.limit,
        offset = query.offset,
        order = %order,
        "Listing advocates"
    );

    storage.find(&query).await
}

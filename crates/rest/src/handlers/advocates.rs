//! Advocate listing handler.
//!
//! `GET [base]/api/advocates?params`
//!
//! Every filter and pagination value is normalized rather than validated, so
//! this endpoint answers `200 OK` for any query string. Only a storage
//! failure produces an error response.

use advocate_persistence::core::AdvocateStorage;
use advocate_persistence::search::list_advocates;
use advocate_persistence::types::Advocate;
use axum::{Json, extract::State};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::AdvocateParams;
use crate::responses::DataEnvelope;
use crate::state::AppState;

/// Handler for the advocate listing.
///
/// # Query Parameters
///
/// - `page`, `pageSize` - 1-based page and page size (clamped)
/// - `firstName`, `lastName`, `city`, `degree` - case-insensitive substring
/// - `specialties` - comma-separated or repeated; matches any tag
/// - `yearsOfExperience` - exact; overrides the bounds below
/// - `minYearsOfExperience`, `maxYearsOfExperience` - inclusive bounds
///
/// # Response
///
/// - `200 OK` - `{ "data": [Advocate, ...] }`
/// - `500 Internal Server Error` - the storage query failed
pub async fn list_advocates_handler<S>(
    State(state): State<AppState<S>>,
    params: AdvocateParams,
) -> RestResult<Json<DataEnvelope<Vec<Advocate>>>>
where
    S: AdvocateStorage + Send + Sync,
{
    let filter = params.filter();
    let page = params.page_request(state.page_limits());

    debug!(
        filter = ?filter,
        page = page.page(),
        page_size = page.page_size(),
        "Processing advocate listing request"
    );

    let advocates = list_advocates(state.storage(), page, Some(&filter), state.sort_order()).await?;

    Ok(Json(DataEnvelope::new(advocates)))
}

//! Advocate query parameter extractor.
//!
//! Collects the raw query pairs in request order and hands them to the
//! normalizers in the persistence crate. This extractor never rejects a
//! request: a query string that cannot be decoded is treated as empty.

use std::convert::Infallible;

use advocate_persistence::types::{AdvocateFilter, PageLimits, PageRequest};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use tracing::warn;

/// Name of the page number parameter.
pub const PAGE: &str = "page";

/// Name of the page size parameter.
pub const PAGE_SIZE: &str = "pageSize";

/// Axum extractor for the advocate listing parameters.
///
/// # Example
///
/// ```rust,ignore
/// use advocate_rest::extractors::AdvocateParams;
///
/// async fn list_handler(params: AdvocateParams) {
///     let filter = params.filter();
///     let page = params.page_request(PageLimits::default());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvocateParams {
    pairs: Vec<(String, String)>,
}

impl AdvocateParams {
    /// Creates params with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates params from raw name/value pairs in request order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the first value given for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if no parameters were given.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over all pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Normalizes the filter parameters.
    pub fn filter(&self) -> AdvocateFilter {
        AdvocateFilter::from_pairs(self.iter())
    }

    /// Normalizes the pagination parameters.
    ///
    /// When `page` or `pageSize` repeats, the first value is used.
    pub fn page_request(&self, limits: PageLimits) -> PageRequest {
        PageRequest::parse_with_limits(self.first(PAGE), self.first(PAGE_SIZE), limits)
    }
}

impl<S> FromRequestParts<S> for AdvocateParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                warn!(error = %rejection, "Ignoring malformed query string");
                Vec::new()
            }
        };

        Ok(Self { pairs })
    }
}

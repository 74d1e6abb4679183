//! Core types for advocates, filters, pagination and queries.
//!
//! - [`Advocate`] / [`NewAdvocate`] - the stored record and its insert payload
//! - [`AdvocateFilter`] - request-scoped, fully-optional filter
//! - [`PageRequest`] / [`PageLimits`] - normalized offset pagination
//! - [`Condition`] / [`AdvocateQuery`] - storage-neutral predicates and reads

mod advocate;
mod filter;
mod pagination;
mod query;

pub use advocate::{Advocate, NewAdvocate};
pub use filter::{AdvocateFilter, parse_integer, params, split_list, trim_to_optional};
pub use pagination::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits, PageRequest, parse_leading_int,
};
pub use query::{AdvocateQuery, Column, Condition, SortKey, SortOrder};

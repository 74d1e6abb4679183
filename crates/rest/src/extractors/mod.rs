//! Axum extractors for the advocate API.
//!
//! - [`AdvocateParams`] - Raw query pairs, normalized into a filter and a page

mod advocate_params;

pub use advocate_params::AdvocateParams;

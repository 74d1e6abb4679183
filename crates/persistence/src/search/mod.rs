//! Advocate search.
//!
//! - [`conditions`] - pure translation of a filter into predicates
//! - [`executor`] - composition of predicates, ordering and paging into a
//!   storage read

pub mod conditions;
pub mod executor;

pub use conditions::{
    build_all_conditions, build_specialties_condition, build_string_conditions,
    build_years_of_experience_conditions,
};
pub use executor::{build_query, list_advocates};

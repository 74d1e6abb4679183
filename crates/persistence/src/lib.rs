//! Advocate Directory Persistence Layer
//!
//! This crate turns raw, untrusted filter and pagination input into a
//! storage-neutral query over the advocate collection and runs it against a
//! pluggable storage backend.
//!
//! # Features
//!
//! - **Forgiving input**: malformed filters and pagination values are
//!   normalized away, never rejected
//! - **Storage-neutral queries**: [`types::Condition`] trees translated per backend
//! - **Bounded pages**: page sizes are clamped to a configurable maximum
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! The in-memory backend is always available.
//!
//! # Architecture
//!
//! - [`types`] - Advocate records, filters, pagination and query types
//! - [`search`] - Condition building and the query executor
//! - [`core`] - The [`AdvocateStorage`] trait
//! - [`backends`] - Backend implementations
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```
//! use advocate_persistence::search::build_query;
//! use advocate_persistence::types::{AdvocateFilter, PageRequest, SortOrder};
//!
//! let filter = AdvocateFilter::from_pairs([
//!     ("firstName", " ann "),
//!     ("specialties", "cardio,neuro"),
//!     ("minYearsOfExperience", "abc"),
//! ]);
//! assert_eq!(filter.first_name.as_deref(), Some("ann"));
//! assert_eq!(filter.min_years_of_experience, None);
//!
//! let page = PageRequest::parse(Some("3"), Some("500"));
//! assert_eq!(page.page_size(), 50);
//! assert_eq!(page.offset(), 100);
//!
//! let query = build_query(page, Some(&filter), SortOrder::Id);
//! assert_eq!(query.conditions.len(), 2);
//! assert_eq!(query.limit, 50);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Advocate, AdvocateFilter, AdvocateQuery, NewAdvocate, PageRequest, SortOrder};

// Re-export core traits
pub use core::{AdvocateStorage, BackendKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

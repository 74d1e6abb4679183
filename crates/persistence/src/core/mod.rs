//! Core storage traits and abstractions.
//!
//! - [`AdvocateStorage`] - the storage collaborator: query-shaped reads and a
//!   small write path used by seeding and tests
//! - [`BackendKind`] - backend identification

pub mod backend;
pub mod storage;

pub use backend::BackendKind;
pub use storage::AdvocateStorage;

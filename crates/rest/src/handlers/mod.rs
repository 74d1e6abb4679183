//! HTTP request handlers.
//!
//! - [`advocates`] - List and filter advocates
//! - [`health`] - Health check endpoints

pub mod advocates;
pub mod health;

// Re-export handlers for convenience
pub use advocates::list_advocates_handler;
pub use health::{health_handler, liveness_handler};

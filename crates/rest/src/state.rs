//! Application state for the advocate API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration. Both
//! are read-only after startup.

use std::sync::Arc;

use advocate_persistence::core::AdvocateStorage;
use advocate_persistence::types::{PageLimits, SortOrder};

use crate::config::ServerConfig;

/// Shared application state.
///
/// The storage backend is generic so tests can substitute an in-memory or
/// failing implementation.
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: AdvocateStorage> AppState<S> {
    /// Creates a new application state.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the page size bounds applied to requests.
    pub fn page_limits(&self) -> PageLimits {
        self.config.page_limits()
    }

    /// Returns the configured result order.
    pub fn sort_order(&self) -> SortOrder {
        self.config.sort_order
    }
}

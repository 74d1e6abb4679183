//! REST API test harness.
//!
//! Builds a [`TestServer`] over a real router and a seeded backend.

#![allow(dead_code)]

use std::sync::Arc;

use advocate_persistence::backends::sqlite::SqliteBackend;
use advocate_persistence::core::{AdvocateStorage, BackendKind};
use advocate_persistence::error::{BackendError, StorageError, StorageResult};
use advocate_persistence::types::{Advocate, AdvocateQuery, NewAdvocate};
use advocate_rest::{ServerConfig, create_app_with_config};
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

/// The default fixture: `First{n}`/`Last{n}` with predictable attributes.
pub fn make_advocate(n: u32) -> NewAdvocate {
    NewAdvocate::new(
        format!("First{}", n),
        format!("Last{}", n),
        "City",
        "Degree",
        1 + (n % 30),
        1_000_000_000 + i64::from(n),
    )
    .with_specialties(["one"])
}

/// Creates a test server over an in-memory SQLite database.
pub fn create_test_server(config: ServerConfig) -> (TestServer, Arc<SqliteBackend>) {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    let backend = Arc::new(backend);

    let app = create_app_with_config(Arc::clone(&backend), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server holding `First1..First{count}`.
pub async fn create_seeded_server(count: u32) -> (TestServer, Arc<SqliteBackend>) {
    let (server, backend) = create_test_server(ServerConfig::for_testing());
    let batch = (1..=count).map(make_advocate).collect();
    backend.insert_many(batch).await.expect("Failed to seed");
    (server, backend)
}

/// Extracts `data[*].firstName` from a listing body.
pub fn first_names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data must be an array")
        .iter()
        .map(|a| a["firstName"].as_str().unwrap_or_default().to_string())
        .collect()
}

pub fn expected_names(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|n| format!("First{}", n)).collect()
}

/// A backend whose every call fails, standing in for a dead database.
pub struct FailingStorage;

fn unavailable() -> StorageError {
    StorageError::Backend(BackendError::Unavailable {
        backend_name: "failing".to_string(),
        message: "database is down".to_string(),
    })
}

#[async_trait]
impl AdvocateStorage for FailingStorage {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    fn backend_kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn find(&self, _query: &AdvocateQuery) -> StorageResult<Vec<Advocate>> {
        Err(unavailable())
    }

    async fn insert(&self, _advocate: NewAdvocate) -> StorageResult<Advocate> {
        Err(unavailable())
    }

    async fn insert_many(&self, _advocates: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        Err(unavailable())
    }

    async fn count(&self) -> StorageResult<u64> {
        Err(unavailable())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Err(unavailable())
    }
}

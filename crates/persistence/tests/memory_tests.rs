//! In-memory backend integration tests.
//!
//! The same scenarios as the SQLite suite, so both backends agree.

mod common;

use advocate_persistence::backends::memory::InMemoryBackend;

use common::*;

#[tokio::test]
async fn test_default_page_and_clamp() {
    scenario_default_page(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_pagination_boundary() {
    scenario_pagination_boundary(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_invalid_paging_falls_back_to_defaults() {
    scenario_invalid_paging_defaults(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_specialties_any_of() {
    scenario_specialties_any_of(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_exact_years_overrides_range() {
    scenario_exact_years_overrides_range(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_case_insensitive_substring() {
    scenario_case_insensitive_substring(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_non_ascii_case_insensitive() {
    scenario_non_ascii_case_insensitive(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_wildcards_are_literal() {
    scenario_wildcards_are_literal(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_name_order() {
    scenario_name_order(&InMemoryBackend::new()).await;
}

#[tokio::test]
async fn test_idempotent_reads() {
    scenario_idempotent_reads(&InMemoryBackend::new()).await;
}

//! Shared fixtures and scenarios for backend integration tests.
//!
//! Each scenario takes any [`AdvocateStorage`] so that every backend is held
//! to the same behavior.

#![allow(dead_code)]

use advocate_persistence::core::AdvocateStorage;
use advocate_persistence::search::list_advocates;
use advocate_persistence::types::{Advocate, AdvocateFilter, NewAdvocate, PageRequest, SortOrder};

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

/// Inserts `First1..First{count}` in order.
pub async fn seed<S: AdvocateStorage>(storage: &S, count: u32) {
    let batch = (1..=count).map(make_advocate).collect();
    storage.insert_many(batch).await.expect("seeding failed");
}

pub fn first_names(advocates: &[Advocate]) -> Vec<String> {
    advocates.iter().map(|a| a.first_name.clone()).collect()
}

pub fn expected_names(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|n| format!("First{}", n)).collect()
}

async fn page_of<S: AdvocateStorage>(
    storage: &S,
    page: Option<&str>,
    page_size: Option<&str>,
    filter: Option<&AdvocateFilter>,
) -> Vec<Advocate> {
    list_advocates(storage, PageRequest::parse(page, page_size), filter, SortOrder::Id)
        .await
        .expect("query failed")
}

// ============================================================================
// Scenarios
// ============================================================================

pub async fn scenario_default_page<S: AdvocateStorage>(storage: &S) {
    seed(storage, 65).await;

    let page = page_of(storage, None, None, None).await;
    assert_eq!(first_names(&page), expected_names(1..=10));

    let page = page_of(storage, Some("3"), Some("5"), None).await;
    assert_eq!(first_names(&page), expected_names(11..=15));

    let page = page_of(storage, None, Some("100"), None).await;
    assert_eq!(page.len(), 50);
    assert_eq!(page[0].first_name, "First1");
}

pub async fn scenario_pagination_boundary<S: AdvocateStorage>(storage: &S) {
    seed(storage, 23).await;

    let last = page_of(storage, Some("3"), Some("10"), None).await;
    assert_eq!(first_names(&last), expected_names(21..=23));

    let past_end = page_of(storage, Some("4"), Some("10"), None).await;
    assert!(past_end.is_empty());

    let huge = page_of(storage, Some("99999999999999999999"), None, None).await;
    assert!(huge.is_empty());
}

pub async fn scenario_invalid_paging_defaults<S: AdvocateStorage>(storage: &S) {
    seed(storage, 15).await;

    for bad in ["0", "-3", "abc"] {
        let page = page_of(storage, Some(bad), Some(bad), None).await;
        assert_eq!(first_names(&page), expected_names(1..=10), "input {:?}", bad);
    }
}

pub async fn scenario_specialties_any_of<S: AdvocateStorage>(storage: &S) {
    let tags = ["cardio", "peds", "neuro"];
    let batch = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| make_advocate(i as u32 + 1).with_specialties([*tag]))
        .collect();
    storage.insert_many(batch).await.expect("seeding failed");

    let filter = AdvocateFilter::from_pairs([("specialties", "cardio,neuro")]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(first_names(&page), vec!["First1", "First3"]);

    let filter = AdvocateFilter::from_pairs([("specialties", "Cardio")]);
    assert!(page_of(storage, None, None, Some(&filter)).await.is_empty());
}

pub async fn scenario_exact_years_overrides_range<S: AdvocateStorage>(storage: &S) {
    // make_advocate(4) has 5 years of experience.
    seed(storage, 10).await;

    let filter = AdvocateFilter::from_pairs([
        ("yearsOfExperience", "5"),
        ("minYearsOfExperience", "9"),
        ("maxYearsOfExperience", "2"),
    ]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(first_names(&page), vec!["First4"]);

    let filter = AdvocateFilter::from_pairs([
        ("minYearsOfExperience", "3"),
        ("maxYearsOfExperience", "5"),
    ]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(first_names(&page), expected_names(2..=4));
}

pub async fn scenario_case_insensitive_substring<S: AdvocateStorage>(storage: &S) {
    storage
        .insert_many(vec![
            NewAdvocate::new("Alice", "Smith", "Boston", "MD", 4, 6175550100),
            NewAdvocate::new("Bob", "Malik", "Denver", "PhD", 8, 3035550100),
        ])
        .await
        .expect("seeding failed");

    for needle in ["ali", "ALI"] {
        let filter = AdvocateFilter::from_pairs([("firstName", needle)]);
        let page = page_of(storage, None, None, Some(&filter)).await;
        assert_eq!(first_names(&page), vec!["Alice"], "needle {:?}", needle);
    }

    // Filters on different fields combine with AND.
    let filter = AdvocateFilter::from_pairs([("lastName", "ali"), ("city", "den")]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(first_names(&page), vec!["Bob"]);

    let filter = AdvocateFilter::from_pairs([("lastName", "ali"), ("city", "bos")]);
    assert!(page_of(storage, None, None, Some(&filter)).await.is_empty());
}

pub async fn scenario_non_ascii_case_insensitive<S: AdvocateStorage>(storage: &S) {
    storage
        .insert_many(vec![
            NewAdvocate::new("Émile", "Durand", "Zürich", "MD", 4, 6175550100),
            NewAdvocate::new("Emma", "Stone", "Oslo", "PhD", 8, 3035550100),
        ])
        .await
        .expect("seeding failed");

    for needle in ["Émile", "ÉMILE", "émile", "MIL"] {
        let filter = AdvocateFilter::from_pairs([("firstName", needle)]);
        let page = page_of(storage, None, None, Some(&filter)).await;
        assert_eq!(first_names(&page), vec!["Émile"], "needle {:?}", needle);
    }

    let filter = AdvocateFilter::from_pairs([("city", "ZÜR")]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(first_names(&page), vec!["Émile"]);

    // Folding is case only, not accent stripping.
    let filter = AdvocateFilter::from_pairs([("firstName", "emile")]);
    assert!(page_of(storage, None, None, Some(&filter)).await.is_empty());
}

pub async fn scenario_wildcards_are_literal<S: AdvocateStorage>(storage: &S) {
    storage
        .insert_many(vec![
            NewAdvocate::new("Dee", "Plain", "Austin", "MSW", 2, 5125550100),
            NewAdvocate::new("Dee", "100%", "Austin", "MSW", 2, 5125550101),
        ])
        .await
        .expect("seeding failed");

    let filter = AdvocateFilter::from_pairs([("lastName", "%")]);
    let page = page_of(storage, None, None, Some(&filter)).await;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].last_name, "100%");
}

pub async fn scenario_name_order<S: AdvocateStorage>(storage: &S) {
    storage
        .insert_many(vec![
            NewAdvocate::new("Zoe", "Adams", "X", "Y", 1, 1),
            NewAdvocate::new("Amy", "Young", "X", "Y", 1, 2),
            NewAdvocate::new("Amy", "Baker", "X", "Y", 1, 3),
        ])
        .await
        .expect("seeding failed");

    let page = list_advocates(storage, PageRequest::default(), None, SortOrder::Name)
        .await
        .expect("query failed");
    let names: Vec<_> = page
        .iter()
        .map(|a| format!("{} {}", a.first_name, a.last_name))
        .collect();
    assert_eq!(names, vec!["Amy Baker", "Amy Young", "Zoe Adams"]);
}

pub async fn scenario_idempotent_reads<S: AdvocateStorage>(storage: &S) {
    seed(storage, 30).await;
    let filter = AdvocateFilter::from_pairs([("firstName", "first2")]);

    let first = page_of(storage, Some("1"), Some("5"), Some(&filter)).await;
    let second = page_of(storage, Some("1"), Some("5"), Some(&filter)).await;
    assert_eq!(first, second);
    assert_eq!(first_names(&first), vec!["First2", "First20", "First21", "First22", "First23"]);
}

//! Condition builder.
//!
//! Turns an [`AdvocateFilter`] into the list of independent [`Condition`]s
//! that a query combines with AND. Pure: no I/O, no side effects.
//!
//! | Filter field | Condition |
//! |--------------|-----------|
//! | firstName, lastName, city, degree | case-insensitive substring |
//! | yearsOfExperience | equality (bounds ignored) |
//! | min/maxYearsOfExperience | inclusive `>=` / `<=` |
//! | specialties | OR of exact tag membership |

use crate::types::{AdvocateFilter, Column, Condition};

/// Builds substring conditions for the text fields that are present.
pub fn build_string_conditions(filter: &AdvocateFilter) -> Vec<Condition> {
    let fields = [
        (&filter.first_name, Column::FirstName),
        (&filter.last_name, Column::LastName),
        (&filter.city, Column::City),
        (&filter.degree, Column::Degree),
    ];

    fields
        .into_iter()
        .filter_map(|(value, column)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| Condition::contains(column, value))
        })
        .collect()
}

/// Builds years-of-experience conditions.
///
/// An exact value produces a single equality and the bounds are ignored.
pub fn build_years_of_experience_conditions(filter: &AdvocateFilter) -> Vec<Condition> {
    if let Some(years) = filter.years_of_experience {
        return vec![Condition::equals(Column::YearsOfExperience, years)];
    }

    let mut conditions = Vec::new();
    if let Some(min) = filter.min_years_of_experience {
        conditions.push(Condition::gte(Column::YearsOfExperience, min));
    }
    if let Some(max) = filter.max_years_of_experience {
        conditions.push(Condition::lte(Column::YearsOfExperience, max));
    }
    conditions
}

/// Builds the any-of specialties condition.
///
/// Tags are trimmed, empties dropped and duplicates collapsed, keeping first
/// occurrence order. A single tag yields a bare membership condition.
pub fn build_specialties_condition(tags: Option<&[String]>) -> Option<Condition> {
    let mut distinct: Vec<&str> = Vec::new();
    for tag in tags?.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !distinct.contains(&tag) {
            distinct.push(tag);
        }
    }

    if distinct.is_empty() {
        return None;
    }

    Some(Condition::any(
        distinct
            .into_iter()
            .map(|tag| Condition::has_tag(Column::Specialties, tag))
            .collect(),
    ))
}

/// Builds every condition for a filter. No filter means no restriction.
pub fn build_all_conditions(filter: Option<&AdvocateFilter>) -> Vec<Condition> {
    let Some(filter) = filter else {
        return Vec::new();
    };

    let mut conditions = build_string_conditions(filter);
    conditions.extend(build_years_of_experience_conditions(filter));
    conditions.extend(build_specialties_condition(filter.specialties.as_deref()));
    conditions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_filter_yields_nothing() {
        assert!(build_all_conditions(None).is_empty());
        assert!(build_all_conditions(Some(&AdvocateFilter::new())).is_empty());
    }

    #[test]
    fn test_string_conditions_only_for_present_fields() {
        let filter = AdvocateFilter::new().with_first_name("ali").with_city("Lon");
        assert_eq!(
            build_string_conditions(&filter),
            vec![
                Condition::contains(Column::FirstName, "ali"),
                Condition::contains(Column::City, "Lon"),
            ]
        );
    }

    #[test]
    fn test_blank_string_field_is_skipped() {
        let filter = AdvocateFilter {
            degree: Some("   ".to_string()),
            last_name: Some(" Smith ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_string_conditions(&filter),
            vec![Condition::contains(Column::LastName, "Smith")]
        );
    }

    #[test]
    fn test_exact_years_overrides_range() {
        let filter = AdvocateFilter::new()
            .with_years_of_experience(5)
            .with_years_range(Some(0), Some(3));
        assert_eq!(
            build_years_of_experience_conditions(&filter),
            vec![Condition::equals(Column::YearsOfExperience, 5)]
        );
    }

    #[test]
    fn test_years_range() {
        let both = AdvocateFilter::new().with_years_range(Some(2), Some(8));
        assert_eq!(
            build_years_of_experience_conditions(&both),
            vec![
                Condition::gte(Column::YearsOfExperience, 2),
                Condition::lte(Column::YearsOfExperience, 8),
            ]
        );

        let max_only = AdvocateFilter::new().with_years_range(None, Some(8));
        assert_eq!(
            build_years_of_experience_conditions(&max_only),
            vec![Condition::lte(Column::YearsOfExperience, 8)]
        );
    }

    #[test]
    fn test_single_specialty_is_not_wrapped() {
        assert_eq!(
            build_specialties_condition(Some(&tags(&["cardio"]))),
            Some(Condition::has_tag(Column::Specialties, "cardio"))
        );
    }

    #[test]
    fn test_multiple_specialties_are_ored() {
        assert_eq!(
            build_specialties_condition(Some(&tags(&["cardio", " neuro ", "", "cardio"]))),
            Some(Condition::Any(vec![
                Condition::has_tag(Column::Specialties, "cardio"),
                Condition::has_tag(Column::Specialties, "neuro"),
            ]))
        );
    }

    #[test]
    fn test_empty_specialties_yield_nothing() {
        assert_eq!(build_specialties_condition(None), None);
        assert_eq!(build_specialties_condition(Some(&[])), None);
        assert_eq!(build_specialties_condition(Some(&tags(&[" ", ""]))), None);
    }

    #[test]
    fn test_all_conditions_in_category_order() {
        let filter = AdvocateFilter::new()
            .with_specialties(["peds"])
            .with_years_range(Some(3), None)
            .with_degree("MD");
        assert_eq!(
            build_all_conditions(Some(&filter)),
            vec![
                Condition::contains(Column::Degree, "MD"),
                Condition::gte(Column::YearsOfExperience, 3),
                Condition::has_tag(Column::Specialties, "peds"),
            ]
        );
    }
}

//! Storage-neutral query types.
//!
//! A query against the advocate collection is a list of [`Condition`]s
//! combined with AND, a list of ascending [`SortKey`]s, a limit and an
//! offset. Backends translate these into their native form; the in-memory
//! backend evaluates [`Condition::matches`] directly.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::advocate::Advocate;

/// A named column of the advocate collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Identity.
    Id,
    /// First name (text).
    FirstName,
    /// Last name (text).
    LastName,
    /// City (text).
    City,
    /// Degree (text).
    Degree,
    /// Specialty tags (list of text).
    Specialties,
    /// Years of experience (integer).
    YearsOfExperience,
    /// Phone number (integer).
    PhoneNumber,
    /// Creation timestamp.
    CreatedAt,
}

impl Column {
    /// Returns the storage column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::City => "city",
            Column::Degree => "degree",
            Column::Specialties => "specialties",
            Column::YearsOfExperience => "years_of_experience",
            Column::PhoneNumber => "phone_number",
            Column::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A boolean predicate over a single advocate.
///
/// # Examples
///
/// ```
/// use advocate_persistence::types::{Column, Condition};
///
/// let cardio_or_neuro = Condition::any(vec![
///     Condition::has_tag(Column::Specialties, "cardio"),
///     Condition::has_tag(Column::Specialties, "neuro"),
/// ]);
/// assert!(matches!(cardio_or_neuro, Condition::Any(ref c) if c.len() == 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Case-insensitive substring containment on a text column.
    Contains {
        /// Text column to search.
        column: Column,
        /// Needle, matched literally.
        value: String,
    },
    /// Integer equality.
    Eq {
        /// Integer column.
        column: Column,
        /// Required value.
        value: i64,
    },
    /// Integer lower bound, inclusive.
    Gte {
        /// Integer column.
        column: Column,
        /// Smallest accepted value.
        value: i64,
    },
    /// Integer upper bound, inclusive.
    Lte {
        /// Integer column.
        column: Column,
        /// Largest accepted value.
        value: i64,
    },
    /// List column contains this exact tag.
    HasTag {
        /// List column.
        column: Column,
        /// Tag, compared case-sensitively.
        tag: String,
    },
    /// At least one inner condition holds. Empty never matches.
    Any(Vec<Condition>),
    /// Every inner condition holds. Empty always matches.
    All(Vec<Condition>),
}

impl Condition {
    /// Creates a substring-containment condition.
    pub fn contains(column: Column, value: impl Into<String>) -> Self {
        Condition::Contains {
            column,
            value: value.into(),
        }
    }

    /// Creates an equality condition.
    pub fn equals(column: Column, value: i64) -> Self {
        Condition::Eq { column, value }
    }

    /// Creates an inclusive lower-bound condition.
    pub fn gte(column: Column, value: i64) -> Self {
        Condition::Gte { column, value }
    }

    /// Creates an inclusive upper-bound condition.
    pub fn lte(column: Column, value: i64) -> Self {
        Condition::Lte { column, value }
    }

    /// Creates a tag-membership condition.
    pub fn has_tag(column: Column, tag: impl Into<String>) -> Self {
        Condition::HasTag {
            column,
            tag: tag.into(),
        }
    }

    /// Combines conditions with OR, collapsing a single condition.
    pub fn any(mut conditions: Vec<Condition>) -> Self {
        if conditions.len() == 1 {
            if let Some(only) = conditions.pop() {
                return only;
            }
        }
        Condition::Any(conditions)
    }

    /// Combines conditions with AND, collapsing a single condition.
    pub fn all(mut conditions: Vec<Condition>) -> Self {
        if conditions.len() == 1 {
            if let Some(only) = conditions.pop() {
                return only;
            }
        }
        Condition::All(conditions)
    }

    /// Evaluates the condition against an advocate.
    ///
    /// A condition naming a column of the wrong kind (e.g. `Contains` on
    /// `YearsOfExperience`) never matches.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        match self {
            Condition::Contains { column, value } => advocate
                .text(*column)
                .is_some_and(|text| text.to_lowercase().contains(&value.to_lowercase())),
            Condition::Eq { column, value } => advocate.integer(*column) == Some(*value),
            Condition::Gte { column, value } => {
                advocate.integer(*column).is_some_and(|v| v >= *value)
            }
            Condition::Lte { column, value } => {
                advocate.integer(*column).is_some_and(|v| v <= *value)
            }
            Condition::HasTag { column, tag } => advocate
                .tags(*column)
                .is_some_and(|tags| tags.iter().any(|t| t == tag)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(advocate)),
            Condition::All(conditions) => conditions.iter().all(|c| c.matches(advocate)),
        }
    }
}

/// An ascending sort on one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The column to sort by.
    pub column: Column,
}

impl SortKey {
    /// Sorts ascending by `column`.
    pub fn asc(column: Column) -> Self {
        Self { column }
    }
}

/// The result ordering applied by the query executor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending identity (insertion order).
    #[default]
    Id,
    /// Ascending first name, then last name, then identity.
    Name,
}

impl SortOrder {
    /// Returns the sort keys this ordering expands to.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        match self {
            SortOrder::Id => vec![SortKey::asc(Column::Id)],
            SortOrder::Name => vec![
                SortKey::asc(Column::FirstName),
                SortKey::asc(Column::LastName),
                SortKey::asc(Column::Id),
            ],
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Id => write!(f, "id"),
            SortOrder::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortOrder::Id),
            "name" => Ok(SortOrder::Name),
            other => Err(format!("unknown sort order '{}' (expected 'id' or 'name')", other)),
        }
    }
}

/// A complete read against the advocate collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocateQuery {
    /// Conditions, combined with AND. Empty selects everything.
    pub conditions: Vec<Condition>,
    /// Ascending sort keys, applied in order.
    pub sort: Vec<SortKey>,
    /// Maximum number of rows to return.
    pub limit: u32,
    /// Number of matching rows to skip.
    pub offset: u64,
}

impl AdvocateQuery {
    /// Creates a query selecting everything in identity order.
    pub fn new(limit: u32) -> Self {
        Self {
            conditions: Vec::new(),
            sort: SortOrder::Id.sort_keys(),
            limit,
            offset: 0,
        }
    }

    /// Sets the conditions.
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the sort keys.
    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the offset.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Returns true if an advocate satisfies every condition.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.conditions.iter().all(|c| c.matches(advocate))
    }

    /// Compares two advocates under this query's sort keys.
    pub fn compare(&self, a: &Advocate, b: &Advocate) -> Ordering {
        self.sort
            .iter()
            .map(|key| a.compare_by(b, key.column))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::NewAdvocate;

    fn advocate(id: i64, first: &str, last: &str, years: u32, tags: &[&str]) -> Advocate {
        NewAdvocate::new(first, last, "Springfield", "MD", years, 5550000000 + id)
            .with_specialties(tags.iter().copied())
            .into_advocate(id, Utc::now())
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let alice = advocate(1, "Alice", "Smith", 5, &[]);
        assert!(Condition::contains(Column::FirstName, "ali").matches(&alice));
        assert!(Condition::contains(Column::FirstName, "ALI").matches(&alice));
        assert!(Condition::contains(Column::FirstName, "lic").matches(&alice));
        assert!(!Condition::contains(Column::FirstName, "bob").matches(&alice));
    }

    #[test]
    fn test_contains_on_integer_column_never_matches() {
        let alice = advocate(1, "Alice", "Smith", 5, &[]);
        assert!(!Condition::contains(Column::YearsOfExperience, "5").matches(&alice));
    }

    #[test]
    fn test_integer_comparisons() {
        let a = advocate(1, "A", "B", 5, &[]);
        assert!(Condition::equals(Column::YearsOfExperience, 5).matches(&a));
        assert!(Condition::gte(Column::YearsOfExperience, 5).matches(&a));
        assert!(Condition::lte(Column::YearsOfExperience, 5).matches(&a));
        assert!(!Condition::gte(Column::YearsOfExperience, 6).matches(&a));
        assert!(!Condition::lte(Column::YearsOfExperience, 4).matches(&a));
    }

    #[test]
    fn test_has_tag_is_exact() {
        let a = advocate(1, "A", "B", 5, &["cardio", "peds"]);
        assert!(Condition::has_tag(Column::Specialties, "peds").matches(&a));
        assert!(!Condition::has_tag(Column::Specialties, "Peds").matches(&a));
        assert!(!Condition::has_tag(Column::Specialties, "card").matches(&a));
    }

    #[test]
    fn test_any_and_all() {
        let a = advocate(1, "A", "B", 5, &["cardio"]);
        let cardio = Condition::has_tag(Column::Specialties, "cardio");
        let neuro = Condition::has_tag(Column::Specialties, "neuro");

        assert!(Condition::Any(vec![cardio.clone(), neuro.clone()]).matches(&a));
        assert!(!Condition::All(vec![cardio, neuro]).matches(&a));
        assert!(!Condition::Any(vec![]).matches(&a));
        assert!(Condition::All(vec![]).matches(&a));
    }

    #[test]
    fn test_any_collapses_single_condition() {
        let only = Condition::has_tag(Column::Specialties, "cardio");
        assert_eq!(Condition::any(vec![only.clone()]), only);
        assert_eq!(Condition::all(vec![only.clone()]), only);
    }

    #[test]
    fn test_name_order_breaks_ties_on_last_name_then_id() {
        let query = AdvocateQuery::new(10).with_sort(SortOrder::Name.sort_keys());
        let a = advocate(2, "Ann", "Baker", 1, &[]);
        let b = advocate(1, "Ann", "Carter", 1, &[]);
        let c = advocate(3, "Ann", "Baker", 1, &[]);

        assert_eq!(query.compare(&a, &b), Ordering::Less);
        assert_eq!(query.compare(&a, &c), Ordering::Less);
        assert_eq!(query.compare(&c, &a), Ordering::Greater);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("id".parse::<SortOrder>().unwrap(), SortOrder::Id);
        assert_eq!(" Name ".parse::<SortOrder>().unwrap(), SortOrder::Name);
        assert!("date".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Id);
    }

    #[test]
    fn test_query_matches_is_and() {
        let a = advocate(1, "Alice", "Smith", 5, &["cardio"]);
        let query = AdvocateQuery::new(10).with_conditions(vec![
            Condition::contains(Column::FirstName, "ali"),
            Condition::equals(Column::YearsOfExperience, 6),
        ]);
        assert!(!query.matches(&a));
        assert!(AdvocateQuery::new(10).matches(&a));
    }
}

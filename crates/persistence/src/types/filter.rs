//! Advocate filter and its normalization from raw query parameters.
//!
//! Query parameters arrive as loosely-typed strings that may repeat, be
//! blank, or fail to parse. [`AdvocateFilter::from_pairs`] turns them into a
//! strictly-typed, fully-optional filter. Nothing here ever fails: a value
//! that cannot be used is treated as absent.

use serde::{Deserialize, Serialize};

/// Query parameter names recognized by the filter.
pub mod params {
    /// Substring match on first name.
    pub const FIRST_NAME: &str = "firstName";
    /// Substring match on last name.
    pub const LAST_NAME: &str = "lastName";
    /// Substring match on city.
    pub const CITY: &str = "city";
    /// Substring match on degree.
    pub const DEGREE: &str = "degree";
    /// Any-of match on specialty tags.
    pub const SPECIALTIES: &str = "specialties";
    /// Exact years of experience.
    pub const YEARS_OF_EXPERIENCE: &str = "yearsOfExperience";
    /// Inclusive lower bound on years of experience.
    pub const MIN_YEARS_OF_EXPERIENCE: &str = "minYearsOfExperience";
    /// Inclusive upper bound on years of experience.
    pub const MAX_YEARS_OF_EXPERIENCE: &str = "maxYearsOfExperience";
}

/// Request-scoped filter over advocates.
///
/// Every field is optional; an absent field does not restrict results.
/// Present string fields are trimmed and non-empty; a present specialty
/// list is non-empty and holds trimmed, non-empty tags.
///
/// # Examples
///
/// ```
/// use advocate_persistence::types::AdvocateFilter;
///
/// let filter = AdvocateFilter::from_pairs([
///     ("firstName", "  ali "),
///     ("specialties", "cardio, ,neuro"),
///     ("yearsOfExperience", "abc"),
///     ("unknown", "ignored"),
/// ]);
///
/// assert_eq!(filter.first_name.as_deref(), Some("ali"));
/// assert_eq!(filter.specialties, Some(vec!["cardio".to_string(), "neuro".to_string()]));
/// assert_eq!(filter.years_of_experience, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateFilter {
    /// Substring of the first name.
    pub first_name: Option<String>,
    /// Substring of the last name.
    pub last_name: Option<String>,
    /// Substring of the city.
    pub city: Option<String>,
    /// Substring of the degree.
    pub degree: Option<String>,
    /// Tags, at least one of which must be present on a match.
    pub specialties: Option<Vec<String>>,
    /// Exact years of experience. Overrides the bounds when present.
    pub years_of_experience: Option<i64>,
    /// Inclusive lower bound on years of experience.
    pub min_years_of_experience: Option<i64>,
    /// Inclusive upper bound on years of experience.
    pub max_years_of_experience: Option<i64>,
}

impl AdvocateFilter {
    /// Creates a filter with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes raw query pairs, in request order, into a filter.
    ///
    /// Repeated scalar parameters keep their last value. Repeated
    /// `specialties` parameters accumulate. Unknown names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();
        let mut specialties: Vec<String> = Vec::new();

        for (name, value) in pairs {
            let value = value.as_ref();
            match name.as_ref() {
                params::FIRST_NAME => filter.first_name = trim_to_optional(value),
                params::LAST_NAME => filter.last_name = trim_to_optional(value),
                params::CITY => filter.city = trim_to_optional(value),
                params::DEGREE => filter.degree = trim_to_optional(value),
                params::SPECIALTIES => specialties.extend(split_list(value)),
                params::YEARS_OF_EXPERIENCE => filter.years_of_experience = parse_integer(value),
                params::MIN_YEARS_OF_EXPERIENCE => {
                    filter.min_years_of_experience = parse_integer(value)
                }
                params::MAX_YEARS_OF_EXPERIENCE => {
                    filter.max_years_of_experience = parse_integer(value)
                }
                _ => {}
            }
        }

        if !specialties.is_empty() {
            filter.specialties = Some(specialties);
        }

        filter
    }

    /// Sets the first-name substring.
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the last-name substring.
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the city substring.
    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Sets the degree substring.
    pub fn with_degree(mut self, value: impl Into<String>) -> Self {
        self.degree = Some(value.into());
        self
    }

    /// Sets the specialty tags.
    pub fn with_specialties<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specialties = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the exact years of experience.
    pub fn with_years_of_experience(mut self, years: i64) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    /// Sets the inclusive bounds on years of experience.
    pub fn with_years_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_years_of_experience = min;
        self.max_years_of_experience = max;
        self
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trims a value, treating an empty result as absent.
pub fn trim_to_optional(input: &str) -> Option<String> {
    let value = input.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Splits a comma-separated value into trimmed, non-empty tokens.
pub fn split_list(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Converts a value to an integer if it is a finite, integral number.
///
/// Decimal and exponent forms are accepted as long as they denote an
/// integer (`"5.0"`, `"1e2"`); `"5.5"`, `"abc"`, `"Infinity"`, hex
/// literals such as `"0x1A"` and blank input are absent.
pub fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let number: f64 = trimmed.parse().ok()?;
    // 2^63 is exactly representable, so the upper bound is exclusive
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.is_finite() && number.fract() == 0.0 && in_range).then(|| number as i64)
}

//! Advocate records.
//!
//! This module defines [`Advocate`], the only entity of the directory, and
//! [`NewAdvocate`], the payload accepted by the write path.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StorageResult, ValidationError};

use super::query::Column;

/// A stored advocate.
///
/// The `id` is assigned by the storage backend on insertion and never
/// changes; `created_at` is set once at the same moment. Records are
/// read-only from the query side.
///
/// # Examples
///
/// ```
/// use advocate_persistence::types::Advocate;
/// use chrono::Utc;
///
/// let advocate = Advocate {
///     id: 1,
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     city: "London".to_string(),
///     degree: "PhD".to_string(),
///     specialties: vec!["algorithms".to_string()],
///     years_of_experience: 10,
///     phone_number: 5551234567,
///     created_at: Utc::now(),
/// };
///
/// let json = serde_json::to_value(&advocate).unwrap();
/// assert_eq!(json["firstName"], "Ada");
/// assert_eq!(json["yearsOfExperience"], 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Auto-assigned, monotonically increasing identity.
    pub id: i64,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// City of practice.
    pub city: String,

    /// Degree or credential (e.g. "MD", "PhD", "MSW").
    pub degree: String,

    /// Specialty tags. Only membership matters for matching.
    #[serde(default)]
    pub specialties: Vec<String>,

    /// Years of experience.
    pub years_of_experience: u32,

    /// Phone number. Stored wide because it exceeds 32-bit range.
    pub phone_number: i64,

    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

impl Advocate {
    /// Returns the value of a text column, if `column` is one.
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::FirstName => Some(&self.first_name),
            Column::LastName => Some(&self.last_name),
            Column::City => Some(&self.city),
            Column::Degree => Some(&self.degree),
            _ => None,
        }
    }

    /// Returns the value of an integer column, if `column` is one.
    pub fn integer(&self, column: Column) -> Option<i64> {
        match column {
            Column::Id => Some(self.id),
            Column::YearsOfExperience => Some(i64::from(self.years_of_experience)),
            Column::PhoneNumber => Some(self.phone_number),
            _ => None,
        }
    }

    /// Returns the tags of a list column, if `column` is one.
    pub fn tags(&self, column: Column) -> Option<&[String]> {
        match column {
            Column::Specialties => Some(&self.specialties),
            _ => None,
        }
    }

    /// Compares two advocates on a single column, ascending.
    ///
    /// Text compares bytewise, which is the order SQLite's default
    /// `BINARY` collation produces.
    pub fn compare_by(&self, other: &Self, column: Column) -> Ordering {
        match column {
            Column::Specialties => self.specialties.cmp(&other.specialties),
            Column::CreatedAt => self.created_at.cmp(&other.created_at),
            _ => match (self.text(column), other.text(column)) {
                (Some(a), Some(b)) => a.cmp(b),
                _ => self.integer(column).cmp(&other.integer(column)),
            },
        }
    }
}

/// The insertion payload for an advocate.
///
/// Identity and creation time are assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvocate {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// City of practice.
    pub city: String,
    /// Degree or credential.
    pub degree: String,
    /// Specialty tags, empty by default.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Years of experience.
    pub years_of_experience: u32,
    /// Phone number.
    pub phone_number: i64,
}

impl NewAdvocate {
    /// Creates a payload with no specialties.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
        years_of_experience: u32,
        phone_number: i64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            degree: degree.into(),
            specialties: Vec::new(),
            years_of_experience,
            phone_number,
        }
    }

    /// Sets the specialty tags.
    pub fn with_specialties<I, T>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that every required text attribute is non-blank.
    pub fn validate(&self) -> StorageResult<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("city", &self.city),
            ("degree", &self.degree),
        ];

        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingRequiredField {
                field: (*field).to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Materializes the stored record once the backend has assigned identity.
    pub fn into_advocate(self, id: i64, created_at: DateTime<Utc>) -> Advocate {
        Advocate {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties: self.specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Advocate {
        NewAdvocate::new("Ada", "Lovelace", "London", "PhD", 10, 1111111111)
            .with_specialties(["algorithms"])
            .into_advocate(1, Utc::now())
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["specialties"], serde_json::json!(["algorithms"]));
        assert_eq!(json["phoneNumber"], 1111111111_i64);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_phone_number_exceeds_i32() {
        let advocate = NewAdvocate::new("A", "B", "C", "D", 1, 9_999_999_999)
            .into_advocate(1, Utc::now());
        let json = serde_json::to_value(&advocate).unwrap();
        assert_eq!(json["phoneNumber"], 9_999_999_999_i64);
    }

    #[test]
    fn test_column_accessors() {
        let advocate = ada();
        assert_eq!(advocate.text(Column::City), Some("London"));
        assert_eq!(advocate.text(Column::Id), None);
        assert_eq!(advocate.integer(Column::YearsOfExperience), Some(10));
        assert_eq!(advocate.integer(Column::FirstName), None);
        assert_eq!(advocate.tags(Column::Specialties).map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_compare_by_text_is_bytewise() {
        let a = ada();
        let mut b = ada();
        b.first_name = "ada".to_string();
        // Uppercase sorts before lowercase bytewise
        assert_eq!(a.compare_by(&b, Column::FirstName), Ordering::Less);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let payload = NewAdvocate::new("Ada", "  ", "London", "PhD", 1, 1);
        let err = payload.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: lastName");
    }

    #[test]
    fn test_specialties_default_to_empty() {
        let payload: NewAdvocate = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "city": "London",
            "degree": "PhD",
            "yearsOfExperience": 3,
            "phoneNumber": 5550000000_i64
        }))
        .unwrap();
        assert!(payload.specialties.is_empty());
    }
}

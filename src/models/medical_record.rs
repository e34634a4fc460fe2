//! Medical record entity model
//!
//! This module contains the MedicalRecord entity and the age computation
//! used by every view that classifies residents as children or adults. Age
//! is never stored; it is derived from the birthdate as whole calendar years
//! at a reference date.

use crate::models::traits::{EntityModel, full_name};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Birthdate, medications and allergies for a resident, identified by the
/// same full-name key as the resident itself.
///
/// A resident without a medical record is represented as an absent value at
/// every use site, never as a record with sentinel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    /// First name (identity component)
    pub first_name: String,
    /// Last name (identity component)
    pub last_name: String,
    /// Calendar birthdate; external textual form is `MM/dd/yyyy`
    #[serde(with = "birthdate_format")]
    pub birthdate: NaiveDate,
    /// Medications, free-form dose-encoded strings, order preserved
    pub medications: Vec<String>,
    /// Allergies, order preserved
    pub allergies: Vec<String>,
}

impl MedicalRecord {
    /// Create a new MedicalRecord
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
        medications: Vec<String>,
        allergies: Vec<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            medications,
            allergies,
        }
    }

    /// Full-name identity of this record
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Whole calendar years between the birthdate and a reference date.
    ///
    /// Calendar-date subtraction, not a 365-day approximation: the year
    /// difference is reduced by one when the birthday has not yet occurred
    /// in the reference year.
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> i32 {
        let years = reference_date.year() - self.birthdate.year();
        let adjustment = if reference_date.month() < self.birthdate.month()
            || (reference_date.month() == self.birthdate.month()
                && reference_date.day() < self.birthdate.day())
        {
            1
        } else {
            0
        };
        years - adjustment
    }

    /// Whether this record classifies as a child at the reference date.
    ///
    /// A resident is a child iff age is strictly below `majority_age`;
    /// exactly `majority_age` classifies as an adult.
    #[must_use]
    pub fn is_child_at(&self, reference_date: &NaiveDate, majority_age: i32) -> bool {
        self.age_at(reference_date) < majority_age
    }

    /// Whether this record classifies as an adult at the reference date.
    #[must_use]
    pub fn is_adult_at(&self, reference_date: &NaiveDate, majority_age: i32) -> bool {
        !self.is_child_at(reference_date, majority_age)
    }
}

impl EntityModel for MedicalRecord {
    fn key(&self) -> String {
        self.full_name()
    }
}

/// Serde adapter for the `MM/dd/yyyy` textual birthdate form used by the
/// on-disk snapshot.
pub mod birthdate_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, FORMAT).map_err(D::Error::custom)
    }
}

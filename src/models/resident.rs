//! Resident entity model
//!
//! This module contains the Resident entity, the central person record of
//! the directory. A resident is identified by full name and carries the
//! contact and address attributes the aggregate views join on.

use crate::models::traits::{EntityModel, full_name};
use serde::{Deserialize, Serialize};

/// A person record identified by full name, with contact and address
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// First name (identity component)
    pub first_name: String,
    /// Last name (identity component)
    pub last_name: String,
    /// Street address; households are residents sharing this exact string
    pub address: String,
    /// City of residence
    pub city: String,
    /// Postal code
    pub zip: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
}

impl Resident {
    /// Create a new Resident
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            zip: zip.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Full-name identity of this resident
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

impl EntityModel for Resident {
    fn key(&self) -> String {
        self.full_name()
    }
}

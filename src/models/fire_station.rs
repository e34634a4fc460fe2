//! Fire-station coverage assignment model
//!
//! This module contains the CoverageAssignment entity binding a street
//! address to a fire-station number. Identity is the (address, station)
//! pair: the same address may be bound to several stations at once, and the
//! coverage map resolves single-address lookups deterministically.

use crate::models::traits::EntityModel;
use serde::{Deserialize, Serialize};

/// A binding of a street address to a fire-station number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageAssignment {
    /// Covered street address, matched exactly against resident addresses
    pub address: String,
    /// Station number, a decimal-digit token compared as a string
    pub station_number: String,
}

impl CoverageAssignment {
    /// Create a new CoverageAssignment
    #[must_use]
    pub fn new(address: impl Into<String>, station_number: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            station_number: station_number.into(),
        }
    }

    /// Whether this assignment is the exact (address, station) pair
    #[must_use]
    pub fn matches(&self, address: &str, station_number: &str) -> bool {
        self.address == address && self.station_number == station_number
    }
}

impl EntityModel for CoverageAssignment {
    fn key(&self) -> String {
        format!("{}|{}", self.address, self.station_number)
    }
}

//! Result shapes for the aggregate views
//!
//! Plain-data structs handed to the HTTP layer; they carry no framework
//! types and serialize with the same camelCase convention as the entities.
//! A resident without a medical record surfaces here as an absent age and
//! empty medication/allergy lists, never as an error.

use serde::Serialize;
use std::collections::BTreeMap;

/// One resident listed in a station-coverage result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredResident {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
}

/// Residents covered by one station, with adult/child totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCoverage {
    pub residents: Vec<CoveredResident>,
    pub adult_count: usize,
    pub child_count: usize,
}

/// A co-resident listed alongside a child alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMember {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// One child at an address, with the other members of the household
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAlert {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub age: i32,
    pub other_residents: Vec<HouseholdMember>,
}

/// Contact and medical summary of one resident, as used by the fire and
/// flood views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalSummary {
    pub last_name: String,
    pub phone: String,
    /// Absent when the resident has no medical record
    pub age: Option<i32>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

/// The covering station and the residents at one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FireInfo {
    pub station_number: String,
    pub residents: Vec<MedicalSummary>,
}

/// One resident matched by a surname lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub last_name: String,
    pub address: String,
    pub email: String,
    /// Absent when the resident has no medical record
    pub age: Option<i32>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

/// Flood view result: address to household medical summaries.
///
/// The `BTreeMap` is deliberate: ascending lexicographic address order is
/// an observable contract of the flood view.
pub type FloodGrouping = BTreeMap<String, Vec<MedicalSummary>>;

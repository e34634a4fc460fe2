//! Shared helpers for the integration tests: entity builders with sensible
//! defaults and a seeded directory mirroring a small dispatch snapshot.

use chrono::{Datelike, Local, NaiveDate};
use dispatch_directory::{
    CoverageAssignment, Directory, DirectoryConfig, MedicalRecord, Resident,
};
use std::sync::Arc;

/// A birthdate exactly `years` whole years before today, so the holder's
/// age is exactly `years` regardless of when the tests run.
pub fn birthdate_years_ago(years: i32) -> NaiveDate {
    let today = Local::now().date_naive();
    NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day()).unwrap_or_else(|| {
        // Running on Feb 29 with no leap-day counterpart in the target year
        NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day() - 1).unwrap()
    })
}

pub fn resident(first: &str, last: &str, address: &str, phone: &str) -> Resident {
    Resident::new(
        first,
        last,
        address,
        "Culver",
        "97451",
        phone,
        format!("{}.{}@email.com", first.to_lowercase(), last.to_lowercase()),
    )
}

pub fn record(first: &str, last: &str, age: i32, medications: Vec<&str>, allergies: Vec<&str>) -> MedicalRecord {
    MedicalRecord::new(
        first,
        last,
        birthdate_years_ago(age),
        medications.into_iter().map(String::from).collect(),
        allergies.into_iter().map(String::from).collect(),
    )
}

/// A directory seeded with a small but representative dataset:
///
/// - "1509 Culver St", station "3": the Boyd household of John (36), Jacob
///   (33), Tenley (8), Roger (5) and Felicia, who has no medical record.
///   That is 5 residents, 3 adults (Felicia counts as one) and 2 children.
/// - "29 15th St", station "2": Jonanathan Marrack (33).
/// - "644 Gershwin Cir", station "1": Peter Duncan (24).
pub fn seed_directory() -> Arc<Directory> {
    let residents = vec![
        resident("John", "Boyd", "1509 Culver St", "841-874-6512"),
        resident("Jacob", "Boyd", "1509 Culver St", "841-874-6513"),
        resident("Tenley", "Boyd", "1509 Culver St", "841-874-6512"),
        resident("Roger", "Boyd", "1509 Culver St", "841-874-6512"),
        resident("Felicia", "Boyd", "1509 Culver St", "841-874-6544"),
        resident("Jonanathan", "Marrack", "29 15th St", "841-874-6513"),
        resident("Peter", "Duncan", "644 Gershwin Cir", "841-874-6512"),
    ];
    let records = vec![
        record(
            "John",
            "Boyd",
            36,
            vec!["aznol:350mg", "hydrapermazol:100mg"],
            vec!["nillacilan"],
        ),
        record("Jacob", "Boyd", 33, vec!["pharmacol:5000mg"], vec![]),
        record("Tenley", "Boyd", 8, vec![], vec!["peanut"]),
        record("Roger", "Boyd", 5, vec![], vec![]),
        record("Jonanathan", "Marrack", 33, vec![], vec![]),
        record("Peter", "Duncan", 24, vec![], vec!["shellfish"]),
    ];
    let assignments = vec![
        CoverageAssignment::new("1509 Culver St", "3"),
        CoverageAssignment::new("29 15th St", "2"),
        CoverageAssignment::new("644 Gershwin Cir", "1"),
    ];
    Arc::new(Directory::with_data(
        &DirectoryConfig::default(),
        residents,
        records,
        assignments,
    ))
}

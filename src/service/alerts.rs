//! Alert aggregation service
//!
//! The seven read-only views over the directory. Every view resolves its
//! selector through the coverage map or directly against the resident
//! store, joins residents with their medical record by full-name key, and
//! shapes the result as plain data. Views are computed fresh on every call
//! and never mutate store state; reads across the three stores within one
//! call are not transactionally consistent with each other, but each store
//! is only ever observed through its own lock.

use crate::error::{DirectoryError, Result};
use crate::models::{MedicalRecord, Resident};
use crate::service::views::{
    ChildAlert, CoveredResident, FireInfo, FloodGrouping, HouseholdMember, MedicalSummary,
    PersonInfo, StationCoverage,
};
use crate::store::Directory;
use chrono::{Local, NaiveDate};
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Read-only aggregation over the three stores.
#[derive(Debug, Clone)]
pub struct AlertService {
    directory: Arc<Directory>,
}

impl AlertService {
    /// Create a service over a shared directory
    #[must_use]
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// Residents at every address assigned to a station, with adult and
    /// child totals.
    ///
    /// A station with no assigned addresses yields an empty result, not an
    /// error. Residents without a medical record count as adults.
    pub fn station_coverage(&self, station_number: &str) -> Result<StationCoverage> {
        require_selector(station_number, "station number")?;
        let today = today();
        let majority_age = self.directory.medical_records.majority_age();

        let addresses = self.directory.coverage.find_all_for_station(station_number)?;
        let residents = self.directory.residents.find_at_addresses(&addresses)?;
        let records = self.directory.medical_records.all_by_full_name()?;

        let mut adult_count = 0;
        let mut child_count = 0;
        let covered = residents
            .iter()
            .map(|r| {
                match records.get(&r.full_name()) {
                    Some(record) if record.is_child_at(&today, majority_age) => child_count += 1,
                    _ => adult_count += 1,
                }
                CoveredResident {
                    first_name: r.first_name.clone(),
                    last_name: r.last_name.clone(),
                    address: r.address.clone(),
                    phone: r.phone.clone(),
                }
            })
            .collect();

        debug!(
            "station coverage for '{station_number}': {} residents ({adult_count} adults, {child_count} children)",
            residents.len()
        );
        Ok(StationCoverage {
            residents: covered,
            adult_count,
            child_count,
        })
    }

    /// Children at an address, each with the other residents of the same
    /// household.
    ///
    /// Results are distinct by full name; the "other residents" list
    /// excludes the subject child only, and residents without a medical
    /// record are never child candidates but still appear as co-residents.
    pub fn child_alert(&self, address: &str) -> Result<Vec<ChildAlert>> {
        require_selector(address, "address")?;
        let today = today();
        let majority_age = self.directory.medical_records.majority_age();

        let household = self.directory.residents.find_at_address(address)?;
        let records = self.directory.medical_records.all_by_full_name()?;

        let alerts = household
            .iter()
            .unique_by(|r| r.full_name())
            .filter_map(|r| {
                let record = records.get(&r.full_name())?;
                if !record.is_child_at(&today, majority_age) {
                    return None;
                }
                let other_residents = household
                    .iter()
                    .filter(|o| o.full_name() != r.full_name())
                    .unique_by(|o| o.full_name())
                    .map(|o| HouseholdMember {
                        first_name: o.first_name.clone(),
                        last_name: o.last_name.clone(),
                        phone: o.phone.clone(),
                    })
                    .collect();
                Some(ChildAlert {
                    first_name: r.first_name.clone(),
                    last_name: r.last_name.clone(),
                    address: r.address.clone(),
                    age: record.age_at(&today),
                    other_residents,
                })
            })
            .collect();
        Ok(alerts)
    }

    /// Phone numbers of every resident at every address covered by a
    /// station; not de-duplicated.
    pub fn phone_roster(&self, station_number: &str) -> Result<Vec<String>> {
        require_selector(station_number, "station number")?;
        let addresses = self.directory.coverage.find_all_for_station(station_number)?;
        self.directory
            .residents
            .find_phone_numbers_at_addresses(&addresses)
    }

    /// The covering station for an address plus the medical summary of every
    /// resident there.
    ///
    /// Fails with `NotFound` when no assignment covers the address.
    pub fn fire_info(&self, address: &str) -> Result<FireInfo> {
        require_selector(address, "address")?;
        let today = today();

        let assignment = self
            .directory
            .coverage
            .find_at_address(address)?
            .ok_or_else(|| {
                DirectoryError::not_found(format!("no station covers address '{address}'"))
            })?;

        let residents = self.directory.residents.find_at_address(address)?;
        let records = self.directory.medical_records.all_by_full_name()?;
        let summaries = residents
            .iter()
            .map(|r| medical_summary(r, &records, &today))
            .collect();

        Ok(FireInfo {
            station_number: assignment.station_number,
            residents: summaries,
        })
    }

    /// Households covered by any of the given stations, grouped by address.
    ///
    /// Addresses iterate in ascending lexicographic order regardless of the
    /// insertion order of the underlying assignments.
    pub fn flood_grouping(&self, station_numbers: &[String]) -> Result<FloodGrouping> {
        if station_numbers.is_empty() {
            return Err(DirectoryError::invalid_argument(
                "station set must not be empty",
            ));
        }
        for station in station_numbers {
            require_selector(station, "station number")?;
        }
        let today = today();

        let addresses = self.directory.coverage.find_all_for_stations(station_numbers)?;
        let records = self.directory.medical_records.all_by_full_name()?;

        let mut grouping = FloodGrouping::new();
        // An address covered by several requested stations appears once per
        // assignment; the grouping keys it a single time.
        for address in addresses.iter().unique() {
            let residents = self.directory.residents.find_at_address(address)?;
            let summaries = residents
                .iter()
                .map(|r| medical_summary(r, &records, &today))
                .collect();
            grouping.insert(address.clone(), summaries);
        }
        Ok(grouping)
    }

    /// Residents with an exact last name, with contact and medical summary.
    pub fn surname_lookup(&self, last_name: &str) -> Result<Vec<PersonInfo>> {
        require_selector(last_name, "last name")?;
        let today = today();

        let residents = self.directory.residents.find_by_last_name(last_name)?;
        let records = self.directory.medical_records.all_by_full_name()?;

        Ok(residents
            .iter()
            .map(|r| {
                let record = records.get(&r.full_name());
                PersonInfo {
                    last_name: r.last_name.clone(),
                    address: r.address.clone(),
                    email: r.email.clone(),
                    age: record.map(|m| m.age_at(&today)),
                    medications: record.map(|m| m.medications.clone()).unwrap_or_default(),
                    allergies: record.map(|m| m.allergies.clone()).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Emails of residents whose city matches exactly; not de-duplicated.
    pub fn city_emails(&self, city: &str) -> Result<Vec<String>> {
        require_selector(city, "city")?;
        self.directory.residents.find_all_emails_in_city(city)
    }
}

/// Reference date for age computation: today, evaluated once per view call.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn require_selector(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::invalid_argument(format!(
            "{what} must not be blank"
        )));
    }
    Ok(())
}

fn medical_summary(
    resident: &Resident,
    records: &FxHashMap<String, Arc<MedicalRecord>>,
    today: &NaiveDate,
) -> MedicalSummary {
    let record = records.get(&resident.full_name());
    MedicalSummary {
        last_name: resident.last_name.clone(),
        phone: resident.phone.clone(),
        age: record.map(|m| m.age_at(today)),
        medications: record.map(|m| m.medications.clone()).unwrap_or_default(),
        allergies: record.map(|m| m.allergies.clone()).unwrap_or_default(),
    }
}

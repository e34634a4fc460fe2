//! Directory gateway
//!
//! The single mutation path for application code. Validates required fields
//! before delegating to the stores, enforces the cross-store rule that a
//! medical record may only be created for an existing resident, and cascades
//! resident removal to the matching medical record.

use crate::error::{DirectoryError, Result};
use crate::models::{CoverageAssignment, MedicalRecord, Resident, full_name};
use crate::store::Directory;
use log::{debug, info};
use std::sync::Arc;

/// Validated create/update/remove operations over the directory.
#[derive(Debug, Clone)]
pub struct DirectoryGateway {
    directory: Arc<Directory>,
}

impl DirectoryGateway {
    /// Create a gateway over a shared directory
    #[must_use]
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    // --- residents ---

    /// Add a resident; fails with `AlreadyExists` on identity collision.
    pub fn add_resident(&self, resident: Resident) -> Result<()> {
        validate_resident(&resident)?;
        self.directory.residents.create(resident.clone())?;
        info!("added resident '{}'", resident.full_name());
        Ok(())
    }

    /// Update a resident's non-identity fields; fails with `NotFound` if
    /// absent.
    pub fn update_resident(&self, resident: Resident) -> Result<()> {
        validate_resident(&resident)?;
        self.directory.residents.update(resident.clone())?;
        info!("updated resident '{}'", resident.full_name());
        Ok(())
    }

    /// Remove a resident and, with it, their medical record.
    ///
    /// Returns whether a resident was removed. Each removal is atomic under
    /// its store's lock; the record never outlives its resident through this
    /// path.
    pub fn remove_resident(&self, first_name: &str, last_name: &str) -> Result<bool> {
        require_field(first_name, "first name")?;
        require_field(last_name, "last name")?;
        let key = full_name(first_name, last_name);

        let removed = self.directory.residents.remove(&key)?;
        if removed {
            info!("removed resident '{key}'");
            if self.directory.medical_records.remove(&key)? {
                debug!("cascaded removal of medical record '{key}'");
            }
        }
        Ok(removed)
    }

    // --- medical records ---

    /// Add a medical record for an existing resident.
    ///
    /// Fails with `NotFound` when no resident shares the record's identity,
    /// and with `AlreadyExists` when a record for that identity exists.
    pub fn add_medical_record(&self, record: MedicalRecord) -> Result<()> {
        require_field(&record.first_name, "first name")?;
        require_field(&record.last_name, "last name")?;
        let key = record.full_name();
        if self.directory.residents.find_by_full_name(&key)?.is_none() {
            return Err(DirectoryError::not_found(format!(
                "no resident '{key}' for medical record"
            )));
        }
        self.directory.medical_records.create(record)?;
        info!("added medical record '{key}'");
        Ok(())
    }

    /// Update a record's birthdate, medications and allergies; fails with
    /// `NotFound` if absent.
    pub fn update_medical_record(&self, record: MedicalRecord) -> Result<()> {
        require_field(&record.first_name, "first name")?;
        require_field(&record.last_name, "last name")?;
        let key = record.full_name();
        self.directory.medical_records.update(record)?;
        info!("updated medical record '{key}'");
        Ok(())
    }

    /// Remove a medical record; the resident is left untouched. Returns
    /// whether a record was removed.
    pub fn remove_medical_record(&self, first_name: &str, last_name: &str) -> Result<bool> {
        require_field(first_name, "first name")?;
        require_field(last_name, "last name")?;
        let key = full_name(first_name, last_name);
        let removed = self.directory.medical_records.remove(&key)?;
        if removed {
            info!("removed medical record '{key}'");
        }
        Ok(removed)
    }

    // --- coverage assignments ---

    /// Add a coverage assignment; fails with `AlreadyExists` on an exact
    /// (address, station) duplicate.
    pub fn add_coverage(&self, assignment: CoverageAssignment) -> Result<()> {
        require_field(&assignment.address, "address")?;
        require_field(&assignment.station_number, "station number")?;
        self.directory.coverage.create(assignment.clone())?;
        info!(
            "assigned station '{}' to '{}'",
            assignment.station_number, assignment.address
        );
        Ok(())
    }

    /// Rebind an address from one station to another; fails with `NotFound`
    /// if no matching (address, old station) assignment exists.
    pub fn update_coverage(&self, address: &str, old_station: &str, new_station: &str) -> Result<()> {
        require_field(address, "address")?;
        require_field(old_station, "station number")?;
        require_field(new_station, "station number")?;
        self.directory.coverage.update(address, old_station, new_station)?;
        info!("rebound '{address}' from station '{old_station}' to '{new_station}'");
        Ok(())
    }

    /// Remove a coverage assignment; returns whether one was removed.
    pub fn remove_coverage(&self, assignment: &CoverageAssignment) -> Result<bool> {
        require_field(&assignment.address, "address")?;
        require_field(&assignment.station_number, "station number")?;
        let removed = self.directory.coverage.remove(assignment)?;
        if removed {
            info!(
                "unassigned station '{}' from '{}'",
                assignment.station_number, assignment.address
            );
        }
        Ok(removed)
    }
}

fn require_field(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::invalid_argument(format!(
            "{what} must not be blank"
        )));
    }
    Ok(())
}

fn validate_resident(resident: &Resident) -> Result<()> {
    require_field(&resident.first_name, "first name")?;
    require_field(&resident.last_name, "last name")?;
    require_field(&resident.address, "address")?;
    Ok(())
}

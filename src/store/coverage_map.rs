//! Coverage map
//!
//! Owns the fire-station coverage assignments. Identity is the (address,
//! station) pair, so the same address may be bound to several stations;
//! single-address lookups resolve to the lexicographically smallest station
//! number, which makes the "first match" of the original design
//! deterministic.

use crate::error::{DirectoryError, Result};
use crate::models::CoverageAssignment;
use std::sync::RwLock;

/// The set of (address, station) coverage assignments.
#[derive(Debug, Default)]
pub struct CoverageMap {
    assignments: RwLock<Vec<CoverageAssignment>>,
}

impl CoverageMap {
    /// Create a new empty `CoverageMap`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `CoverageMap` seeded with an initial set of assignments.
    ///
    /// Exact pair duplicates in the seed data are dropped with a warning;
    /// duplicate addresses bound to different stations are kept.
    #[must_use]
    pub fn with_assignments(assignments: Vec<CoverageAssignment>) -> Self {
        let mut seeded: Vec<CoverageAssignment> = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            if seeded
                .iter()
                .any(|a| a.matches(&assignment.address, &assignment.station_number))
            {
                log::warn!(
                    "duplicate coverage assignment ({}, {}) in seed data, dropped",
                    assignment.address,
                    assignment.station_number
                );
                continue;
            }
            seeded.push(assignment);
        }
        Self {
            assignments: RwLock::new(seeded),
        }
    }

    /// Add an assignment; fails with `AlreadyExists` if the exact
    /// (address, station) pair exists.
    pub fn create(&self, assignment: CoverageAssignment) -> Result<()> {
        let mut guard = self.assignments.write()?;
        if guard
            .iter()
            .any(|a| a.matches(&assignment.address, &assignment.station_number))
        {
            return Err(DirectoryError::already_exists(format!(
                "coverage assignment ({}, {})",
                assignment.address, assignment.station_number
            )));
        }
        guard.push(assignment);
        Ok(())
    }

    /// Rebind an address from one station to another; fails with `NotFound`
    /// if no (address, old station) assignment exists.
    pub fn update(&self, address: &str, old_station: &str, new_station: &str) -> Result<()> {
        let mut guard = self.assignments.write()?;
        match guard.iter_mut().find(|a| a.matches(address, old_station)) {
            Some(assignment) => {
                assignment.station_number = new_station.to_string();
                Ok(())
            }
            None => Err(DirectoryError::not_found(format!(
                "coverage assignment ({address}, {old_station})"
            ))),
        }
    }

    /// Remove the exact (address, station) pair; returns whether one was
    /// removed.
    pub fn remove(&self, assignment: &CoverageAssignment) -> Result<bool> {
        let mut guard = self.assignments.write()?;
        match guard
            .iter()
            .position(|a| a.matches(&assignment.address, &assignment.station_number))
        {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get the assignment covering an address.
    ///
    /// When several assignments share the address, the one with the
    /// lexicographically smallest station number wins; this tie-break is
    /// part of the contract.
    pub fn find_at_address(&self, address: &str) -> Result<Option<CoverageAssignment>> {
        Ok(self
            .assignments
            .read()?
            .iter()
            .filter(|a| a.address == address)
            .min_by(|a, b| a.station_number.cmp(&b.station_number))
            .cloned())
    }

    /// Addresses assigned to a station
    pub fn find_all_for_station(&self, station_number: &str) -> Result<Vec<String>> {
        Ok(self
            .assignments
            .read()?
            .iter()
            .filter(|a| a.station_number == station_number)
            .map(|a| a.address.clone())
            .collect())
    }

    /// Addresses assigned to any of the given stations, one entry per
    /// matching assignment.
    ///
    /// An address covered by two requested stations appears twice; callers
    /// de-duplicate where their view requires it.
    pub fn find_all_for_stations(&self, station_numbers: &[String]) -> Result<Vec<String>> {
        Ok(self
            .assignments
            .read()?
            .iter()
            .filter(|a| station_numbers.iter().any(|s| *s == a.station_number))
            .map(|a| a.address.clone())
            .collect())
    }

    /// Get all assignments
    pub fn find_all(&self) -> Result<Vec<CoverageAssignment>> {
        Ok(self.assignments.read()?.clone())
    }

    /// Count the assignments in the map
    pub fn count(&self) -> Result<usize> {
        Ok(self.assignments.read()?.len())
    }
}

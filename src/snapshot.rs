//! On-disk snapshot loading
//!
//! The directory is seeded once at process start from a JSON snapshot: an
//! object with three array fields, `persons`, `medicalrecords` and
//! `firestations`, with attributes in camelCase and birthdates as
//! `MM/dd/yyyy` strings. The stores themselves never touch files; they are
//! handed the parsed collections through [`Directory::from_snapshot`].

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::models::{CoverageAssignment, MedicalRecord, Resident};
use crate::store::Directory;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The parsed contents of an on-disk snapshot file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Resident records
    #[serde(default)]
    pub persons: Vec<Resident>,
    /// Medical records
    #[serde(default, rename = "medicalrecords")]
    pub medical_records: Vec<MedicalRecord>,
    /// Coverage assignments
    #[serde(default, rename = "firestations")]
    pub fire_stations: Vec<CoverageAssignment>,
}

impl Snapshot {
    /// Read and decode a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DirectoryError::Snapshot(format!(
                "snapshot file not found: {}",
                path.display()
            )));
        }
        let file = File::open(path).map_err(|e| {
            DirectoryError::Snapshot(format!("failed to open {}: {e}", path.display()))
        })?;
        let snapshot: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DirectoryError::Snapshot(format!("failed to decode {}: {e}", path.display()))
        })?;
        info!(
            "loaded snapshot {}: {} residents, {} medical records, {} coverage assignments",
            path.display(),
            snapshot.persons.len(),
            snapshot.medical_records.len(),
            snapshot.fire_stations.len()
        );
        Ok(snapshot)
    }
}

impl Directory {
    /// Seed a directory from a parsed snapshot.
    #[must_use]
    pub fn from_snapshot(config: &DirectoryConfig, snapshot: Snapshot) -> Self {
        Self::with_data(
            config,
            snapshot.persons,
            snapshot.medical_records,
            snapshot.fire_stations,
        )
    }
}

//! In-memory stores for the three record kinds
//!
//! Each store owns its collection behind a read/write lock; the
//! [`Directory`] bundles the three and is created once at process start,
//! then shared by reference with the alert service and the gateway. Nothing
//! in the crate reaches the collections through ambient global state.

pub mod coverage_map;
pub mod medical_record_store;
pub mod resident_store;

pub use coverage_map::CoverageMap;
pub use medical_record_store::MedicalRecordStore;
pub use resident_store::ResidentStore;

use crate::config::DirectoryConfig;
use crate::models::{CoverageAssignment, MedicalRecord, Resident};

/// The three stores of the dispatch directory, bundled for shared use.
#[derive(Debug)]
pub struct Directory {
    /// Resident records, keyed by full name
    pub residents: ResidentStore,
    /// Medical records, keyed by full name
    pub medical_records: MedicalRecordStore,
    /// Fire-station coverage assignments
    pub coverage: CoverageMap,
}

impl Directory {
    /// Create an empty directory
    #[must_use]
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            residents: ResidentStore::new(),
            medical_records: MedicalRecordStore::new(config),
            coverage: CoverageMap::new(),
        }
    }

    /// Create a directory seeded with already-parsed startup collections.
    ///
    /// The directory takes sole ownership of the records; the caller hands
    /// them over once and mutates only through the gateway afterwards.
    #[must_use]
    pub fn with_data(
        config: &DirectoryConfig,
        residents: Vec<Resident>,
        medical_records: Vec<MedicalRecord>,
        assignments: Vec<CoverageAssignment>,
    ) -> Self {
        Self {
            residents: ResidentStore::with_residents(residents),
            medical_records: MedicalRecordStore::with_records(config, medical_records),
            coverage: CoverageMap::with_assignments(assignments),
        }
    }
}

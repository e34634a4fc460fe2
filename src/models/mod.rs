//! Domain models for the dispatch directory
//!
//! This module contains the three record kinds the directory owns and the
//! identity convention they share.

pub mod fire_station;
pub mod medical_record;
pub mod resident;
pub mod traits;

// Re-export commonly used types
pub use fire_station::CoverageAssignment;
pub use medical_record::MedicalRecord;
pub use resident::Resident;
pub use traits::{EntityModel, full_name};

//! An in-memory directory and alert-aggregation engine for emergency-dispatch
//! tooling: residents, medical records and fire-station coverage assignments,
//! joined into cross-referenced operational views.

pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod snapshot;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result};
pub use models::{CoverageAssignment, MedicalRecord, Resident};

// Stores
pub use store::{CoverageMap, Directory, MedicalRecordStore, ResidentStore};

// Services
pub use service::{AlertService, DirectoryGateway};

// Snapshot loading
pub use snapshot::Snapshot;

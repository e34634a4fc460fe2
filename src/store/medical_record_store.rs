//! Medical record store
//!
//! Owns the medical records, keyed by the same full-name identity as the
//! resident store, and carries the majority-age threshold every view uses
//! for child/adult classification. Locking follows the same read/write
//! discipline as the resident store.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::models::{EntityModel, MedicalRecord};
use chrono::Local;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// A queryable collection of medical records, at most one per full-name
/// identity.
#[derive(Debug)]
pub struct MedicalRecordStore {
    /// Records indexed by full name
    records: RwLock<FxHashMap<String, Arc<MedicalRecord>>>,
    /// Age at which a resident stops classifying as a child
    majority_age: i32,
}

impl MedicalRecordStore {
    /// Create a new empty `MedicalRecordStore`
    #[must_use]
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            records: RwLock::new(FxHashMap::default()),
            majority_age: config.majority_age,
        }
    }

    /// Create a `MedicalRecordStore` seeded with an initial set of records.
    ///
    /// Later entries win on duplicate identity, as in the resident store.
    #[must_use]
    pub fn with_records(config: &DirectoryConfig, records: Vec<MedicalRecord>) -> Self {
        let mut map = FxHashMap::default();
        for record in records {
            let key = record.key();
            if map.insert(key.clone(), Arc::new(record)).is_some() {
                log::warn!("duplicate medical record '{key}' in seed data, keeping the later entry");
            }
        }
        Self {
            records: RwLock::new(map),
            majority_age: config.majority_age,
        }
    }

    /// The configured majority-age threshold
    #[must_use]
    pub fn majority_age(&self) -> i32 {
        self.majority_age
    }

    /// Add a record; fails with `AlreadyExists` if the identity collides.
    ///
    /// The cross-store rule that a record may only be created for an
    /// existing resident is enforced by the gateway, which owns both stores.
    pub fn create(&self, record: MedicalRecord) -> Result<()> {
        let mut guard = self.records.write()?;
        let key = record.key();
        if guard.contains_key(&key) {
            return Err(DirectoryError::already_exists(format!(
                "medical record '{key}'"
            )));
        }
        guard.insert(key, Arc::new(record));
        Ok(())
    }

    /// Replace birthdate, medications and allergies of an existing record;
    /// fails with `NotFound` if no record with that identity exists.
    pub fn update(&self, record: MedicalRecord) -> Result<()> {
        let mut guard = self.records.write()?;
        let key = record.key();
        if !guard.contains_key(&key) {
            return Err(DirectoryError::not_found(format!("medical record '{key}'")));
        }
        guard.insert(key, Arc::new(record));
        Ok(())
    }

    /// Remove a record by full name; returns whether one was removed.
    pub fn remove(&self, full_name: &str) -> Result<bool> {
        Ok(self.records.write()?.remove(full_name).is_some())
    }

    /// Get a record by full-name identity
    pub fn find_by_full_name(&self, full_name: &str) -> Result<Option<Arc<MedicalRecord>>> {
        Ok(self.records.read()?.get(full_name).cloned())
    }

    /// Get every record keyed by full-name identity.
    ///
    /// Views take this map once and join against it, instead of hitting the
    /// lock per resident.
    pub fn all_by_full_name(&self) -> Result<FxHashMap<String, Arc<MedicalRecord>>> {
        Ok(self.records.read()?.clone())
    }

    /// Count the records in the store
    pub fn count(&self) -> Result<usize> {
        Ok(self.records.read()?.len())
    }

    /// Whole-year age of a record holder as of today
    #[must_use]
    pub fn age_of(&self, record: &MedicalRecord) -> i32 {
        record.age_at(&Local::now().date_naive())
    }

    /// Whether a record holder classifies as a child today (age strictly
    /// below the majority-age threshold)
    #[must_use]
    pub fn is_child(&self, record: &MedicalRecord) -> bool {
        record.is_child_at(&Local::now().date_naive(), self.majority_age)
    }

    /// Whether a record holder classifies as an adult today
    #[must_use]
    pub fn is_adult(&self, record: &MedicalRecord) -> bool {
        !self.is_child(record)
    }
}

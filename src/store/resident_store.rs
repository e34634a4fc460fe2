//! Resident store
//!
//! Owns the resident records, keyed by full-name identity. All access goes
//! through a read/write lock; readers clone `Arc`s out of the guarded map,
//! so no returned collection can observe a concurrent structural mutation.

use crate::error::{DirectoryError, Result};
use crate::models::{EntityModel, Resident};
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// A queryable collection of residents, at most one per full-name identity.
#[derive(Debug, Default)]
pub struct ResidentStore {
    /// Residents indexed by full name
    residents: RwLock<FxHashMap<String, Arc<Resident>>>,
}

impl ResidentStore {
    /// Create a new empty `ResidentStore`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `ResidentStore` seeded with an initial set of residents.
    ///
    /// Later entries win on duplicate identity; a duplicate in the seed data
    /// is logged, not rejected, since the snapshot is the trusted initial
    /// state.
    #[must_use]
    pub fn with_residents(residents: Vec<Resident>) -> Self {
        let mut map = FxHashMap::default();
        for resident in residents {
            let key = resident.key();
            if map.insert(key.clone(), Arc::new(resident)).is_some() {
                log::warn!("duplicate resident '{key}' in seed data, keeping the later entry");
            }
        }
        Self {
            residents: RwLock::new(map),
        }
    }

    /// Add a resident; fails with `AlreadyExists` if the identity collides.
    pub fn create(&self, resident: Resident) -> Result<()> {
        let mut guard = self.residents.write()?;
        let key = resident.key();
        if guard.contains_key(&key) {
            return Err(DirectoryError::already_exists(format!("resident '{key}'")));
        }
        guard.insert(key, Arc::new(resident));
        Ok(())
    }

    /// Replace every non-identity field of an existing resident; fails with
    /// `NotFound` if no resident with that identity exists.
    pub fn update(&self, resident: Resident) -> Result<()> {
        let mut guard = self.residents.write()?;
        let key = resident.key();
        if !guard.contains_key(&key) {
            return Err(DirectoryError::not_found(format!("resident '{key}'")));
        }
        guard.insert(key, Arc::new(resident));
        Ok(())
    }

    /// Remove a resident by full name; returns whether one was removed.
    pub fn remove(&self, full_name: &str) -> Result<bool> {
        Ok(self.residents.write()?.remove(full_name).is_some())
    }

    /// Get all residents
    pub fn find_all(&self) -> Result<Vec<Arc<Resident>>> {
        Ok(self.residents.read()?.values().cloned().collect())
    }

    /// Get a resident by full-name identity
    pub fn find_by_full_name(&self, full_name: &str) -> Result<Option<Arc<Resident>>> {
        Ok(self.residents.read()?.get(full_name).cloned())
    }

    /// Get residents with this exact last name (case-sensitive)
    pub fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Arc<Resident>>> {
        self.filter(|r| r.last_name == last_name)
    }

    /// Get the household at an address: residents whose address string
    /// matches exactly.
    pub fn find_at_address(&self, address: &str) -> Result<Vec<Arc<Resident>>> {
        self.filter(|r| r.address == address)
    }

    /// Get residents at any of the given addresses (union; each resident
    /// appears once since identities are unique).
    pub fn find_at_addresses(&self, addresses: &[String]) -> Result<Vec<Arc<Resident>>> {
        self.filter(|r| addresses.iter().any(|a| *a == r.address))
    }

    /// Emails of residents whose city matches exactly, one entry per
    /// resident, not de-duplicated.
    pub fn find_all_emails_in_city(&self, city: &str) -> Result<Vec<String>> {
        Ok(self
            .filter(|r| r.city == city)?
            .iter()
            .map(|r| r.email.clone())
            .collect())
    }

    /// Phone numbers of residents at any of the given addresses, one entry
    /// per resident, not de-duplicated.
    pub fn find_phone_numbers_at_addresses(&self, addresses: &[String]) -> Result<Vec<String>> {
        Ok(self
            .find_at_addresses(addresses)?
            .iter()
            .map(|r| r.phone.clone())
            .collect())
    }

    /// Count the residents in the store
    pub fn count(&self) -> Result<usize> {
        Ok(self.residents.read()?.len())
    }

    /// Filter residents by a predicate function
    pub fn filter<F>(&self, predicate: F) -> Result<Vec<Arc<Resident>>>
    where
        F: Fn(&Resident) -> bool,
    {
        Ok(self
            .residents
            .read()?
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }
}

//! Core trait definitions for domain models
//!
//! This module defines the identity convention shared by every record kind:
//! each model produces a single string key, and at most one record per key
//! may exist in its store at any time.

/// A trait for models with a stable string identity.
pub trait EntityModel {
    /// Get the identity key for this model.
    ///
    /// Residents and medical records use the full-name convention of
    /// [`full_name`]; coverage assignments key on their (address, station)
    /// pair.
    fn key(&self) -> String;
}

/// Build the full-name identity key for a person-shaped record.
///
/// The convention is exact string concatenation with a single space,
/// case-sensitive: `"John" + " " + "Boyd"`.
#[must_use]
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

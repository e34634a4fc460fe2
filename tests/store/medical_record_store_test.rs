//! Tests for the medical record store: identity invariants, the keyed join
//! map and the age classification every view relies on.

use crate::utils::{birthdate_years_ago, record};
use dispatch_directory::{DirectoryConfig, DirectoryError, MedicalRecordStore};

fn store() -> MedicalRecordStore {
    MedicalRecordStore::new(&DirectoryConfig::default())
}

#[test]
fn test_create_round_trips_every_field() {
    let store = store();
    let john = record(
        "John",
        "Boyd",
        36,
        vec!["aznol:350mg", "hydrapermazol:100mg"],
        vec!["nillacilan"],
    );
    store.create(john.clone()).unwrap();

    let found = store.find_by_full_name("John Boyd").unwrap().unwrap();
    assert_eq!(found.birthdate, john.birthdate);
    assert_eq!(found.medications, john.medications);
    assert_eq!(found.allergies, john.allergies);
}

#[test]
fn test_second_create_with_same_identity_fails() {
    let store = store();
    store.create(record("John", "Boyd", 36, vec![], vec![])).unwrap();
    let err = store
        .create(record("John", "Boyd", 35, vec![], vec![]))
        .unwrap_err();
    assert!(matches!(err, DirectoryError::AlreadyExists(_)));
}

#[test]
fn test_all_by_full_name_keys_every_record() {
    let store = store();
    store.create(record("John", "Boyd", 36, vec![], vec![])).unwrap();
    store.create(record("Tenley", "Boyd", 8, vec![], vec![])).unwrap();

    let all = store.all_by_full_name().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains_key("John Boyd"));
    assert!(all.contains_key("Tenley Boyd"));
}

#[test]
fn test_age_is_whole_calendar_years() {
    let store = store();
    let r = record("John", "Boyd", 36, vec![], vec![]);
    assert_eq!(store.age_of(&r), 36);
    assert_eq!(r.birthdate, birthdate_years_ago(36));
}

#[test]
fn test_exactly_majority_age_is_an_adult() {
    let store = store();
    let r = record("Tenley", "Boyd", 18, vec![], vec![]);
    assert_eq!(store.age_of(&r), 18);
    assert!(store.is_adult(&r));
    assert!(!store.is_child(&r));
}

#[test]
fn test_below_majority_age_is_a_child() {
    let store = store();
    let r = record("Roger", "Boyd", 17, vec![], vec![]);
    assert!(store.is_child(&r));
    assert!(!store.is_adult(&r));
}

#[test]
fn test_remove_reports_whether_a_record_was_found() {
    let store = store();
    store.create(record("John", "Boyd", 36, vec![], vec![])).unwrap();
    assert!(store.remove("John Boyd").unwrap());
    assert!(!store.remove("John Boyd").unwrap());
}

//! Tests for the resident store: identity invariants, field round-trips and
//! the query operations the views are built on.

use crate::utils::resident;
use dispatch_directory::{DirectoryError, ResidentStore};

#[test]
fn test_create_round_trips_every_field() {
    let store = ResidentStore::new();
    let john = resident("John", "Boyd", "1509 Culver St", "841-874-6512");
    store.create(john.clone()).unwrap();

    let found = store.find_by_full_name("John Boyd").unwrap().unwrap();
    assert_eq!(found.first_name, john.first_name);
    assert_eq!(found.last_name, john.last_name);
    assert_eq!(found.address, john.address);
    assert_eq!(found.city, john.city);
    assert_eq!(found.zip, john.zip);
    assert_eq!(found.phone, john.phone);
    assert_eq!(found.email, john.email);
}

#[test]
fn test_second_create_with_same_identity_fails() {
    let store = ResidentStore::new();
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();

    let err = store
        .create(resident("John", "Boyd", "29 15th St", "841-874-0000"))
        .unwrap_err();
    assert!(matches!(err, DirectoryError::AlreadyExists(_)));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_update_replaces_all_fields_except_identity() {
    let store = ResidentStore::new();
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();

    let moved = resident("John", "Boyd", "29 15th St", "841-874-9999");
    store.update(moved).unwrap();

    let found = store.find_by_full_name("John Boyd").unwrap().unwrap();
    assert_eq!(found.address, "29 15th St");
    assert_eq!(found.phone, "841-874-9999");
}

#[test]
fn test_update_of_missing_resident_fails() {
    let store = ResidentStore::new();
    let err = store
        .update(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(_)));
}

#[test]
fn test_remove_reports_whether_a_resident_was_found() {
    let store = ResidentStore::new();
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();

    assert!(store.remove("John Boyd").unwrap());
    assert!(!store.remove("John Boyd").unwrap());
    assert!(store.find_by_full_name("John Boyd").unwrap().is_none());
}

#[test]
fn test_every_resident_is_found_at_their_own_address() {
    let store = ResidentStore::new();
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();
    store
        .create(resident("Jacob", "Boyd", "1509 Culver St", "841-874-6513"))
        .unwrap();
    store
        .create(resident("Peter", "Duncan", "644 Gershwin Cir", "841-874-6512"))
        .unwrap();

    for r in store.find_all().unwrap() {
        assert!(
            store
                .find_at_address(&r.address)
                .unwrap()
                .iter()
                .any(|found| found.full_name() == r.full_name())
        );
    }
    assert_eq!(store.find_at_address("1509 Culver St").unwrap().len(), 2);
}

#[test]
fn test_find_at_addresses_is_a_union() {
    let store = ResidentStore::new();
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();
    store
        .create(resident("Peter", "Duncan", "644 Gershwin Cir", "841-874-6512"))
        .unwrap();
    store
        .create(resident("Jonanathan", "Marrack", "29 15th St", "841-874-6513"))
        .unwrap();

    let addresses = vec!["1509 Culver St".to_string(), "29 15th St".to_string()];
    let found = store.find_at_addresses(&addresses).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|r| r.address != "644 Gershwin Cir"));
}

#[test]
fn test_city_emails_keep_one_entry_per_resident() {
    let store = ResidentStore::new();
    // Two residents sharing an email address; both entries are kept
    let mut john = resident("John", "Boyd", "1509 Culver St", "841-874-6512");
    john.email = "boyd@email.com".to_string();
    let mut jacob = resident("Jacob", "Boyd", "1509 Culver St", "841-874-6513");
    jacob.email = "boyd@email.com".to_string();
    store.create(john).unwrap();
    store.create(jacob).unwrap();

    let emails = store.find_all_emails_in_city("Culver").unwrap();
    assert_eq!(emails.len(), 2);
    assert!(store.find_all_emails_in_city("culver").unwrap().is_empty());
}

#[test]
fn test_phone_numbers_keep_one_entry_per_resident() {
    let store = ResidentStore::new();
    // The Boyd household shares a phone line
    store
        .create(resident("John", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();
    store
        .create(resident("Tenley", "Boyd", "1509 Culver St", "841-874-6512"))
        .unwrap();

    let phones = store
        .find_phone_numbers_at_addresses(&["1509 Culver St".to_string()])
        .unwrap();
    assert_eq!(phones, vec!["841-874-6512", "841-874-6512"]);
}

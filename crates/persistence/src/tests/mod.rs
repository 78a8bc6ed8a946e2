// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{DutyWithEmployee, Persistence, PersistenceError};
use duty_roster_domain::{Duty, Employee, User};

fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

#[test]
fn test_insert_and_find_user() {
    let mut persistence: Persistence = create_test_persistence();

    let created: User = persistence.insert_user("bob", "digest-of-pw1").unwrap();
    assert_eq!(created.username, "bob");
    assert_eq!(created.password_hash, "digest-of-pw1");

    let found: Option<User> = persistence.find_user_by_username("bob").unwrap();
    assert_eq!(found, Some(created));
}

#[test]
fn test_find_unknown_user_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.find_user_by_username("nobody").unwrap(), None);
}

#[test]
fn test_duplicate_username_rejected_without_partial_state() {
    let mut persistence: Persistence = create_test_persistence();

    persistence.insert_user("bob", "digest1").unwrap();
    let err: PersistenceError = persistence.insert_user("bob", "digest2").unwrap_err();
    assert_eq!(err, PersistenceError::DuplicateUsername("bob".to_string()));

    // The failed attempt leaves the user count unchanged and the original
    // digest intact.
    assert_eq!(persistence.count_users().unwrap(), 1);
    let stored: User = persistence.find_user_by_username("bob").unwrap().unwrap();
    assert_eq!(stored.password_hash, "digest1");
}

#[test]
fn test_list_employees_in_insertion_order() {
    let mut persistence: Persistence = create_test_persistence();

    let alice: Employee = persistence.insert_employee("Alice").unwrap();
    let bob: Employee = persistence.insert_employee("Bob").unwrap();
    let carol: Employee = persistence.insert_employee("Carol").unwrap();

    let listed: Vec<Employee> = persistence.list_employees().unwrap();
    assert_eq!(listed, vec![alice, bob, carol]);
}

#[test]
fn test_find_employee_by_name_is_exact() {
    let mut persistence: Persistence = create_test_persistence();
    persistence.insert_employee("Alice").unwrap();

    assert!(
        persistence
            .find_employee_by_name("Alice")
            .unwrap()
            .is_some()
    );
    assert!(
        persistence
            .find_employee_by_name("alice")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_delete_employee_is_idempotent() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();

    persistence.delete_employee(alice.id).unwrap();
    assert!(persistence.list_employees().unwrap().is_empty());

    // Second delete of the same id is a no-op.
    persistence.delete_employee(alice.id).unwrap();
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_insert_duty_permits_dangling_reference() {
    let mut persistence: Persistence = create_test_persistence();

    // No employee with id 42 exists; the insert succeeds anyway.
    let duty: Duty = persistence.insert_duty("2024-01-01", 42).unwrap();
    assert_eq!(duty.date, "2024-01-01");
    assert_eq!(duty.employee_id, 42);

    // The joined listing drops the row with the unresolvable reference.
    assert!(persistence.list_duties_joined().unwrap().is_empty());
}

#[test]
fn test_joined_listing_orders_by_date_text() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();

    persistence.insert_duty("2024-03-01", alice.id).unwrap();
    persistence.insert_duty("2024-01-15", alice.id).unwrap();
    persistence.insert_duty("2024-02-01", alice.id).unwrap();

    let dates: Vec<String> = persistence
        .list_duties_joined_by_date()
        .unwrap()
        .into_iter()
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, vec!["2024-01-15", "2024-02-01", "2024-03-01"]);
}

#[test]
fn test_plain_listing_keeps_insertion_order() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();

    persistence.insert_duty("2024-03-01", alice.id).unwrap();
    persistence.insert_duty("2024-01-15", alice.id).unwrap();

    let dates: Vec<String> = persistence
        .list_duties_joined()
        .unwrap()
        .into_iter()
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-01-15"]);
}

#[test]
fn test_delete_duty_is_idempotent() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();
    let duty: Duty = persistence.insert_duty("2024-01-01", alice.id).unwrap();

    persistence.delete_duty(duty.id).unwrap();
    assert!(persistence.list_duties_joined().unwrap().is_empty());

    persistence.delete_duty(duty.id).unwrap();
    assert!(persistence.list_duties_joined().unwrap().is_empty());
}

#[test]
fn test_deleting_employee_orphans_duties_without_cascade() {
    let mut persistence: Persistence = create_test_persistence();

    let carol: Employee = persistence.insert_employee("Carol").unwrap();
    persistence.insert_duty("2024-01-01", carol.id).unwrap();

    persistence.delete_employee(carol.id).unwrap();

    // The orphaned duty vanishes from the joined view but survives in the
    // table: re-inserting an employee reuses the freed rowid, and the duty
    // reappears under the new name.
    assert!(persistence.list_duties_joined().unwrap().is_empty());

    let dave: Employee = persistence.insert_employee("Dave").unwrap();
    assert_eq!(dave.id, carol.id);

    let joined: Vec<DutyWithEmployee> = persistence.list_duties_joined().unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].employee_name, "Dave");
    assert_eq!(joined[0].date, "2024-01-01");
}

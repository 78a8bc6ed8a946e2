// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};

use crate::{
    AddEmployeeOutcome, ApiError, AuthenticationService, RosterService, digest_password,
    expired_session_cookie, session_cookie,
};
use duty_roster_domain::{Duty, Employee, User};
use duty_roster_persistence::Persistence;

fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

#[test]
fn test_register_then_authenticate_roundtrip() {
    let mut persistence: Persistence = create_test_persistence();

    let registered: User =
        AuthenticationService::register(&mut persistence, "bob", "pw1").unwrap();
    let authenticated: Option<User> =
        AuthenticationService::authenticate(&mut persistence, "bob", "pw1").unwrap();

    assert_eq!(authenticated, Some(registered));
}

#[test]
fn test_authenticate_wrong_password_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    AuthenticationService::register(&mut persistence, "bob", "pw1").unwrap();

    let result: Option<User> =
        AuthenticationService::authenticate(&mut persistence, "bob", "wrong").unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_authenticate_unknown_username_returns_none() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Option<User> =
        AuthenticationService::authenticate(&mut persistence, "nobody", "pw1").unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_register_is_not_idempotent() {
    let mut persistence: Persistence = create_test_persistence();

    AuthenticationService::register(&mut persistence, "bob", "pw1").unwrap();
    let err: ApiError =
        AuthenticationService::register(&mut persistence, "bob", "pw2").unwrap_err();

    assert_eq!(
        err,
        ApiError::DuplicateUsername {
            username: String::from("bob")
        }
    );
    assert_eq!(persistence.count_users().unwrap(), 1);
}

#[test]
fn test_register_blank_username_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    let err: ApiError = AuthenticationService::register(&mut persistence, "", "pw1").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(persistence.count_users().unwrap(), 0);
}

#[test]
fn test_password_digest_is_fixed_length_and_stable() {
    let digest: String = digest_password("pw1");
    assert_eq!(digest.len(), 64);
    assert_eq!(digest, digest_password("pw1"));
    assert_ne!(digest, digest_password("pw2"));
}

#[test]
fn test_raw_password_never_stored() {
    let mut persistence: Persistence = create_test_persistence();
    let user: User = AuthenticationService::register(&mut persistence, "bob", "pw1").unwrap();
    assert_ne!(user.password_hash, "pw1");
    assert_eq!(user.password_hash, digest_password("pw1"));
}

#[test]
fn test_session_cookie_carries_user_id() {
    let user: User = User {
        id: 7,
        username: String::from("bob"),
        password_hash: digest_password("pw1"),
    };
    assert_eq!(session_cookie(&user), "session_id=7");
}

#[test]
fn test_expired_session_cookie_overwrites_value() {
    let cookie: String = expired_session_cookie();
    assert!(cookie.starts_with("session_id=;"));
    assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
}

#[test]
fn test_add_employee_trims_and_detects_duplicate() {
    let mut persistence: Persistence = create_test_persistence();

    let first: AddEmployeeOutcome =
        RosterService::add_employee(&mut persistence, "Alice").unwrap();
    assert!(matches!(first, AddEmployeeOutcome::Created(_)));

    let second: AddEmployeeOutcome =
        RosterService::add_employee(&mut persistence, " Alice ").unwrap();
    assert_eq!(second, AddEmployeeOutcome::Duplicate(String::from("Alice")));

    assert_eq!(persistence.list_employees().unwrap().len(), 1);
}

#[test]
fn test_add_employee_blank_name_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    for raw in ["", "   "] {
        let err: ApiError = RosterService::add_employee(&mut persistence, raw).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { .. }));
    }
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_assign_duty_with_explicit_employee() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();

    let duty: Option<Duty> =
        RosterService::assign_duty(&mut persistence, "2024-01-01", Some(alice.id)).unwrap();

    let duty: Duty = duty.unwrap();
    assert_eq!(duty.date, "2024-01-01");
    assert_eq!(duty.employee_id, alice.id);
}

#[test]
fn test_assign_duty_with_empty_employee_set_creates_nothing() {
    let mut persistence: Persistence = create_test_persistence();

    let duty: Option<Duty> =
        RosterService::assign_duty(&mut persistence, "2024-01-01", None).unwrap();

    assert_eq!(duty, None);
    assert!(persistence.list_duties_joined().unwrap().is_empty());
}

#[test]
fn test_random_assignment_only_picks_existing_employees() {
    let mut persistence: Persistence = create_test_persistence();
    let ids: HashSet<i64> = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|name| persistence.insert_employee(name).unwrap().id)
        .collect();

    for _ in 0..30 {
        let duty: Duty = RosterService::assign_duty(&mut persistence, "2024-01-01", None)
            .unwrap()
            .unwrap();
        assert!(ids.contains(&duty.employee_id));
    }
}

#[test]
fn test_random_assignment_is_roughly_uniform() {
    let mut persistence: Persistence = create_test_persistence();
    let ids: Vec<i64> = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|name| persistence.insert_employee(name).unwrap().id)
        .collect();

    let mut counts: HashMap<i64, u32> = HashMap::new();
    for _ in 0..300 {
        let duty: Duty = RosterService::assign_duty(&mut persistence, "2024-01-01", None)
            .unwrap()
            .unwrap();
        *counts.entry(duty.employee_id).or_insert(0) += 1;
    }

    // 300 uniform draws over 3 employees: each count is Binomial(300, 1/3)
    // with mean 100 and standard deviation ~8.2, so the 50..=150 window is
    // more than six standard deviations wide, far below test-flake
    // territory. A heavily biased picker lands outside it.
    for id in &ids {
        let count: u32 = *counts.get(id).unwrap_or(&0);
        assert!(
            (50..=150).contains(&count),
            "employee {id} selected {count} times in 300 draws"
        );
    }
}

#[test]
fn test_remove_operations_are_idempotent() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();
    let duty: Duty = persistence.insert_duty("2024-01-01", alice.id).unwrap();

    RosterService::remove_duty(&mut persistence, duty.id).unwrap();
    RosterService::remove_duty(&mut persistence, duty.id).unwrap();
    RosterService::remove_employee(&mut persistence, alice.id).unwrap();
    RosterService::remove_employee(&mut persistence, alice.id).unwrap();

    assert!(persistence.list_employees().unwrap().is_empty());
    assert!(persistence.list_duties_joined().unwrap().is_empty());
}

#[test]
fn test_remove_employee_leaves_referencing_duties() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: Employee = persistence.insert_employee("Alice").unwrap();
    persistence.insert_duty("2024-01-01", alice.id).unwrap();

    RosterService::remove_employee(&mut persistence, alice.id).unwrap();

    // The duty row survives with a dangling reference; it just drops out
    // of the joined listing.
    assert!(persistence.list_duties_joined().unwrap().is_empty());
    let duty: Option<Duty> =
        RosterService::assign_duty(&mut persistence, "2024-01-02", Some(alice.id)).unwrap();
    assert!(duty.is_some());
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the duty roster.
//!
//! This crate is the Repository: it owns every durable read and write
//! against the three record kinds (users, employees, duties) and contains
//! no business logic. It is built on Diesel with an embedded-migrations
//! `SQLite` backend.
//!
//! Each mutating operation durably commits before returning success; on a
//! constraint violation the attempted write leaves no partial state and a
//! typed error is reported to the caller.
//!
//! ## Testing
//!
//! `new_in_memory()` hands out a unique shared in-memory database per
//! call, so tests are isolated without external infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use duty_roster_domain::{Duty, Employee, User};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::DutyWithEmployee;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the roster tables.
///
/// Owns a single `SQLite` connection. Callers acquire the adapter for the
/// scope of one operation; query results are read-only snapshots, never
/// shared mutable state.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_roster_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` when no
    /// user has this username.
    pub fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<User>, PersistenceError> {
        queries::users::find_user_by_username(&mut self.conn, username)
    }

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_users(&mut self) -> Result<i64, PersistenceError> {
        queries::users::count_users(&mut self.conn)
    }

    /// Creates a new user with an already-digested password.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DuplicateUsername`] when the username
    /// is already taken.
    pub fn insert_user(
        &mut self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, PersistenceError> {
        mutations::users::insert_user(&mut self.conn, username, password_hash)
    }

    /// Lists all employees in insertion order (id ascending).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    /// Retrieves an employee by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` when no
    /// employee has this name.
    pub fn find_employee_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::find_employee_by_name(&mut self.conn, name)
    }

    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_employee(&mut self, name: &str) -> Result<Employee, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, name)
    }

    /// Deletes an employee by id. No-op when the id does not exist;
    /// referencing duties are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_employee(&mut self, employee_id: i64) -> Result<(), PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, employee_id)
    }

    /// Lists duties joined with employee names, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_duties_joined(&mut self) -> Result<Vec<DutyWithEmployee>, PersistenceError> {
        queries::duties::list_duties_joined(&mut self.conn)
    }

    /// Lists duties joined with employee names, ordered by date ascending
    /// (lexicographic on the stored text). Used by the calendar view.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_duties_joined_by_date(
        &mut self,
    ) -> Result<Vec<DutyWithEmployee>, PersistenceError> {
        queries::duties::list_duties_joined_by_date(&mut self.conn)
    }

    /// Creates a new duty. The employee id is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_duty(&mut self, date: &str, employee_id: i64) -> Result<Duty, PersistenceError> {
        mutations::duties::insert_duty(&mut self.conn, date, employee_id)
    }

    /// Deletes a duty by id. No-op when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_duty(&mut self, duty_id: i64) -> Result<(), PersistenceError> {
        mutations::duties::delete_duty(&mut self.conn, duty_id)
    }
}

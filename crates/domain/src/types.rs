// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A registered account that may authenticate against the system.
///
/// Users drive mutations but are unrelated to employees and duties beyond
/// being the authenticated principal. The `password_hash` is a fixed-length
/// one-way digest; the raw password is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// The canonical numeric identifier assigned by the database.
    pub id: i64,
    /// The unique login name.
    pub username: String,
    /// Hex-encoded SHA-256 digest of the password.
    pub password_hash: String,
}

/// A person eligible to be assigned duties.
///
/// Distinct from a [`User`]: employees never authenticate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// The canonical numeric identifier assigned by the database.
    pub id: i64,
    /// The display name. Intended-unique by business rule, not by schema.
    pub name: String,
}

/// A calendar date paired with the employee responsible for it.
///
/// The referenced employee is not guaranteed to exist: deleting an employee
/// leaves its duties in place with a dangling `employee_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Duty {
    /// The canonical numeric identifier assigned by the database.
    pub id: i64,
    /// The duty date, stored as opaque text. No format validation applies.
    pub date: String,
    /// Reference to the responsible employee.
    pub employee_id: i64,
}

/// A validated employee name.
///
/// Construction trims surrounding whitespace and rejects names that are
/// blank afterwards, so every `EmployeeName` in circulation is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Parses a raw form value into a validated employee name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BlankEmployeeName`] if the value is empty
    /// after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::BlankEmployeeName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the validated name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

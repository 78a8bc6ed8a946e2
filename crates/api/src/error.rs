// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service layer.

use duty_roster_domain::DomainError;
use duty_roster_persistence::PersistenceError;

/// Service-level errors.
///
/// These are what the HTTP dispatcher translates into status codes and
/// redirects; none of them propagate as uncaught faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A user with this username already exists.
    DuplicateUsername {
        /// The username that was already taken.
        username: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The storage layer failed.
    Persistence(PersistenceError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUsername { username } => {
                write!(f, "Username already exists: {username}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Persistence(err) => write!(f, "Persistence error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::DuplicateUsername(username) => Self::DuplicateUsername { username },
            _ => Self::Persistence(err),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput {
            field: String::from("name"),
            message: err.to_string(),
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication gate: credential verification and session cookies.
//!
//! Passwords are stored as hex-encoded SHA-256 digests and compared for
//! exact equality. The session token carried in the cookie is the user's
//! numeric id with no expiry or signature; this mirrors the observable
//! behavior of the system being reimplemented and is a known weakness,
//! not a recommendation.

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::ApiError;
use duty_roster_domain::User;
use duty_roster_persistence::Persistence;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Computes the one-way digest stored for a password.
///
/// Returns the hex-encoded SHA-256 digest, so the stored value has a
/// fixed length regardless of the password.
#[must_use]
pub fn digest_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Builds the `Set-Cookie` value that opens a session for a user.
#[must_use]
pub fn session_cookie(user: &User) -> String {
    format!("{SESSION_COOKIE_NAME}={}", user.id)
}

/// Builds the `Set-Cookie` value that overwrites the session cookie with
/// an already-expired one, logically ending the session.
#[must_use]
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}=; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// Credential verification and registration against the Repository.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Verifies a username/password pair.
    ///
    /// Looks up the user by username and compares the digest of the
    /// supplied password against the stored digest. Returns `Ok(None)`
    /// both for an unknown username and for a wrong password, so callers
    /// cannot distinguish the two cases.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The login name
    /// * `password` - The raw password
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage layer fails.
    pub fn authenticate(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        let Some(user) = persistence.find_user_by_username(username)? else {
            debug!("Authentication failed: unknown username");
            return Ok(None);
        };

        if user.password_hash == digest_password(password) {
            info!(user_id = user.id, "User authenticated");
            Ok(Some(user))
        } else {
            debug!("Authentication failed: digest mismatch");
            Ok(None)
        }
    }

    /// Registers a new user.
    ///
    /// Digests the password and delegates to the Repository's insert; the
    /// store's uniqueness constraint is the sole guard against duplicate
    /// accounts.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The login name
    /// * `password` - The raw password
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateUsername`] when the username is taken,
    /// or [`ApiError::InvalidInput`] when the username is blank.
    pub fn register(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        if username.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("username"),
                message: String::from("Username must not be blank"),
            });
        }

        let password_hash: String = digest_password(password);
        let user: User = persistence.insert_user(username, &password_hash)?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutations.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tracing::info;

use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use duty_roster_domain::User;

/// Creates a new user with an already-digested password.
///
/// The `UNIQUE` constraint on `username` is the sole guard against
/// duplicate accounts.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The login name
/// * `password_hash` - The one-way digest of the password
///
/// # Errors
///
/// Returns [`PersistenceError::DuplicateUsername`] if the username is
/// already taken, or another error if the insert fails.
pub fn insert_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
) -> Result<User, PersistenceError> {
    info!("Creating user with username: {}", username);

    let inserted: Result<usize, diesel::result::Error> = diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::password_hash.eq(password_hash),
        ))
        .execute(conn);

    match inserted {
        Ok(_) => {}
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            return Err(PersistenceError::DuplicateUsername(username.to_string()));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    }

    let user_id: i64 = get_last_insert_rowid(conn)?;

    info!(user_id, "User created successfully");

    Ok(User {
        id: user_id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
    })
}

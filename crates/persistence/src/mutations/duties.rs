// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::duties;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use duty_roster_domain::Duty;

/// Creates a new duty binding a date to an employee id.
///
/// The employee id is not checked for existence; the reference may
/// dangle from the start.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The duty date (opaque text)
/// * `employee_id` - The referenced employee id
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_duty(
    conn: &mut SqliteConnection,
    date: &str,
    employee_id: i64,
) -> Result<Duty, PersistenceError> {
    info!(employee_id, "Creating duty for date: {}", date);

    diesel::insert_into(duties::table)
        .values((duties::date.eq(date), duties::employee_id.eq(employee_id)))
        .execute(conn)?;

    let duty_id: i64 = get_last_insert_rowid(conn)?;

    info!(duty_id, "Duty created successfully");

    Ok(Duty {
        id: duty_id,
        date: date.to_string(),
        employee_id,
    })
}

/// Deletes a duty by id. No-op when the id does not exist.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `duty_id` - The duty id
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_duty(conn: &mut SqliteConnection, duty_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(duties::table)
        .filter(duties::id.eq(duty_id))
        .execute(conn)?;

    if rows_affected == 0 {
        debug!(duty_id, "Duty already absent; nothing to delete");
    } else {
        info!(duty_id, "Duty deleted");
    }

    Ok(())
}

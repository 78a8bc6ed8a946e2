// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use duty_roster_domain::Employee;

/// Creates a new employee.
///
/// Name uniqueness is a business rule enforced by the assignment engine,
/// not by this table, so this function inserts unconditionally.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The employee name
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Employee, PersistenceError> {
    info!("Creating employee with name: {}", name);

    diesel::insert_into(employees::table)
        .values(employees::name.eq(name))
        .execute(conn)?;

    let employee_id: i64 = get_last_insert_rowid(conn)?;

    info!(employee_id, "Employee created successfully");

    Ok(Employee {
        id: employee_id,
        name: name.to_string(),
    })
}

/// Deletes an employee by id.
///
/// Deleting is a no-op when the id does not exist, and never touches
/// duties that reference the employee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee id
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(employees::table)
        .filter(employees::id.eq(employee_id))
        .execute(conn)?;

    if rows_affected == 0 {
        debug!(employee_id, "Employee already absent; nothing to delete");
    } else {
        info!(employee_id, "Employee deleted");
    }

    Ok(())
}

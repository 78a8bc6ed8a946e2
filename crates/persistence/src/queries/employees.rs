// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee queries.

use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use duty_roster_domain::Employee;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeRow {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Lists all employees in insertion order (id ascending).
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Employee::from).collect())
}

/// Retrieves an employee by exact name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The name to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has this name.
pub fn find_employee_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Employee>, PersistenceError> {
    debug!("Looking up employee by name: {}", name);

    let result: Result<EmployeeRow, diesel::result::Error> = employees::table
        .filter(employees::name.eq(name))
        .select(EmployeeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Employee::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty queries.
//!
//! The joined listings use an inner join against `employees`, so a duty
//! whose employee has been deleted is simply absent from the results. The
//! duty row itself is untouched.

use diesel::prelude::*;

use crate::data_models::DutyWithEmployee;
use crate::diesel_schema::{duties, employees};
use crate::error::PersistenceError;

/// Row tuple for joined duty listings: (duty id, date, employee name).
type JoinedRow = (i64, String, String);

fn to_duty_with_employee(row: JoinedRow) -> DutyWithEmployee {
    DutyWithEmployee {
        id: row.0,
        date: row.1,
        employee_name: row.2,
    }
}

/// Lists duties joined with employee names, in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_duties_joined(
    conn: &mut SqliteConnection,
) -> Result<Vec<DutyWithEmployee>, PersistenceError> {
    let rows: Vec<JoinedRow> = duties::table
        .inner_join(employees::table)
        .select((duties::id, duties::date, employees::name))
        .order(duties::id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(to_duty_with_employee).collect())
}

/// Lists duties joined with employee names, ordered by date ascending.
///
/// The ordering is lexicographic on the stored date text, which the
/// calendar view relies on.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_duties_joined_by_date(
    conn: &mut SqliteConnection,
) -> Result<Vec<DutyWithEmployee>, PersistenceError> {
    let rows: Vec<JoinedRow> = duties::table
        .inner_join(employees::table)
        .select((duties::id, duties::date, employees::name))
        .order(duties::date.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(to_duty_with_employee).collect())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty assignment engine.
//!
//! Stateless per call; the one nontrivial decision is the random-employee
//! fallback in [`RosterService::assign_duty`].

use tracing::{debug, info};

use crate::error::ApiError;
use duty_roster_domain::{Duty, Employee, EmployeeName};
use duty_roster_persistence::Persistence;

/// Outcome of an add-employee request.
///
/// The duplicate case is an outcome rather than an error: the dispatcher
/// renders it as a success-status informational page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEmployeeOutcome {
    /// The employee was created.
    Created(Employee),
    /// An employee with the same trimmed name already exists; nothing was
    /// created. Carries the trimmed name for display.
    Duplicate(String),
}

/// Duty and employee mutations with their business rules.
pub struct RosterService;

impl RosterService {
    /// Records a duty for a date.
    ///
    /// With an explicit `employee_id` the duty is inserted directly, with
    /// no existence check against the employees table. Without one, an
    /// employee is selected uniformly at random from the current list; if
    /// no employees exist, nothing is created and `Ok(None)` is returned.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `date` - The duty date (opaque text)
    /// * `employee_id` - Optional explicit employee reference
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage layer fails.
    pub fn assign_duty(
        persistence: &mut Persistence,
        date: &str,
        employee_id: Option<i64>,
    ) -> Result<Option<Duty>, ApiError> {
        if let Some(id) = employee_id {
            return Ok(Some(persistence.insert_duty(date, id)?));
        }

        let employees: Vec<Employee> = persistence.list_employees()?;
        if employees.is_empty() {
            debug!("No employees registered; duty not created");
            return Ok(None);
        }

        let index: usize = rand::random_range(0..employees.len());
        let chosen: &Employee = &employees[index];
        info!(
            employee_id = chosen.id,
            "Randomly selected employee for duty on {}", date
        );

        Ok(Some(persistence.insert_duty(date, chosen.id)?))
    }

    /// Adds an employee after trimming and checking the name.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `raw_name` - The submitted name; surrounding whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when the trimmed name is blank,
    /// or a storage error. A duplicate name is not an error; see
    /// [`AddEmployeeOutcome::Duplicate`].
    pub fn add_employee(
        persistence: &mut Persistence,
        raw_name: &str,
    ) -> Result<AddEmployeeOutcome, ApiError> {
        let name: EmployeeName = EmployeeName::parse(raw_name)?;

        if persistence.find_employee_by_name(name.as_str())?.is_some() {
            info!("Employee already exists: {}", name);
            return Ok(AddEmployeeOutcome::Duplicate(name.to_string()));
        }

        let employee: Employee = persistence.insert_employee(name.as_str())?;
        Ok(AddEmployeeOutcome::Created(employee))
    }

    /// Removes an employee by id.
    ///
    /// Idempotent: removing an absent id succeeds. Duties referencing the
    /// employee are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage layer fails.
    pub fn remove_employee(persistence: &mut Persistence, id: i64) -> Result<(), ApiError> {
        Ok(persistence.delete_employee(id)?)
    }

    /// Removes a duty by id. Idempotent: removing an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage layer fails.
    pub fn remove_duty(persistence: &mut Persistence, id: i64) -> Result<(), ApiError> {
        Ok(persistence.delete_duty(id)?)
    }
}

//! Employee Directory
//!
//! Add, edit, delete and look up employee records.
//!
//! Deleting an employee does not touch their leave or attendance records;
//! leave requests keep the name they were filed under.

use tracing::info;

use crate::error::{EmsError, Result};
use crate::model::{new_id, Employee, NewEmployee};
use crate::store::RecordStore;

/// Employee CRUD over a record store
pub struct Directory<'a> {
    store: &'a RecordStore,
}

impl<'a> Directory<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Look up one employee
    pub fn get(&self, id: &str) -> Result<Employee> {
        self.store
            .load_employees()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EmsError::not_found("employee", id))
    }

    /// Append a new employee under a freshly generated id
    pub fn add(&self, new: NewEmployee) -> Result<Employee> {
        let employee = new.with_id(new_id());
        employee.validate_fields()?;

        self.store.employees().update(|employees| {
            employees.push(employee.clone());
            Ok(())
        })?;

        info!(id = %employee.id, name = %employee.name, "employee added");
        Ok(employee)
    }

    /// Replace the stored employee that has the same id, in place
    pub fn update(&self, employee: Employee) -> Result<Employee> {
        employee.validate_fields()?;

        self.store.employees().update(|employees| {
            let slot = employees
                .iter_mut()
                .find(|e| e.id == employee.id)
                .ok_or_else(|| EmsError::not_found("employee", employee.id.as_str()))?;
            *slot = employee.clone();
            Ok(())
        })?;

        info!(id = %employee.id, "employee updated");
        Ok(employee)
    }

    /// Remove an employee, returning the removed record
    pub fn delete(&self, id: &str) -> Result<Employee> {
        let removed = self.store.employees().update(|employees| {
            let index = employees
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| EmsError::not_found("employee", id))?;
            Ok(employees.remove(index))
        })?;

        info!(id, name = %removed.name, "employee deleted");
        Ok(removed)
    }
}

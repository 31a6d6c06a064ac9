//! Employee record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EmsError, Result};
use crate::store::{Collection, Record};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Department {
        It => "IT",
        Hr => "HR",
        Sales => "Sales",
        Marketing => "Marketing",
        Finance => "Finance",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum EmployeeStatus {
        Active => "Active",
        Inactive => "Inactive",
        OnLeave => "On Leave",
    }
}

/// A stored employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: Department,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: EmployeeStatus,
}

/// Employee fields supplied by the Add action (id is generated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub department: Department,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: EmployeeStatus,
}

impl NewEmployee {
    /// Attach an id, producing the stored record
    pub fn with_id(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            name: self.name,
            department: self.department,
            position: self.position,
            salary: self.salary,
            hire_date: self.hire_date,
            email: self.email,
            phone: self.phone,
            status: self.status,
        }
    }
}

impl Employee {
    /// Field checks shared by Add, Edit and the storage boundary
    pub fn validate_fields(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EmsError::Validation("employee name is required".to_string()));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(EmsError::Validation(format!(
                "salary must be a non-negative number, got {}",
                self.salary
            )));
        }
        if !self.email.contains('@') {
            return Err(EmsError::Validation(format!(
                "invalid email for {}: {:?}",
                self.name, self.email
            )));
        }
        Ok(())
    }
}

impl Record for Employee {
    const COLLECTION: Collection = Collection::Employees;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(EmsError::Validation("employee id is empty".to_string()));
        }
        self.validate_fields()
    }
}

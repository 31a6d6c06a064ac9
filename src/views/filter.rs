//! Employee list filtering

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmsError;
use crate::model::{Department, Employee, EmployeeStatus};

/// Either the wildcard `All` or one exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr<Err = EmsError>> FromStr for Selector<T> {
    type Err = EmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

/// Criteria of the employee list
///
/// The three predicates are combined with AND. The query is a
/// case-insensitive substring that matches if any of name, position or
/// department contains it; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub query: String,
    pub department: Selector<Department>,
    pub status: Selector<EmployeeStatus>,
}

impl EmployeeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = Selector::Only(department);
        self
    }

    pub fn status(mut self, status: EmployeeStatus) -> Self {
        self.status = Selector::Only(status);
        self
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_query(employee)
            && self.department.matches(&employee.department)
            && self.status.matches(&employee.status)
    }

    fn matches_query(&self, employee: &Employee) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        employee.name.to_lowercase().contains(&q)
            || employee.position.to_lowercase().contains(&q)
            || employee.department.as_str().to_lowercase().contains(&q)
    }
}

/// Subsequence of `employees` matching `criteria`, input order preserved
pub fn filter_employees(employees: &[Employee], criteria: &EmployeeFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

//! Analytics aggregates

use serde::Serialize;

use crate::model::{Department, Employee, EmployeeStatus};

use super::group_in_order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCount {
    pub department: Department,
    pub count: usize,
}

/// Mean salary of a department, rounded to the nearest integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSalary {
    pub department: Department,
    pub average_salary: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: EmployeeStatus,
    pub count: usize,
}

/// All analytics views of one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub by_department: Vec<DepartmentCount>,
    pub average_salary: Vec<DepartmentSalary>,
    pub by_status: Vec<StatusCount>,
}

pub fn count_by_department(employees: &[Employee]) -> Vec<DepartmentCount> {
    group_in_order(employees, |e| e.department, || 0usize, |n, _| *n += 1)
        .into_iter()
        .map(|(department, count)| DepartmentCount { department, count })
        .collect()
}

pub fn average_salary_by_department(employees: &[Employee]) -> Vec<DepartmentSalary> {
    group_in_order(
        employees,
        |e| e.department,
        || (0.0f64, 0usize),
        |(total, n), e| {
            *total += e.salary;
            *n += 1;
        },
    )
    .into_iter()
    .map(|(department, (total, n))| DepartmentSalary {
        department,
        // f64::round is half-away-from-zero; salaries are non-negative
        average_salary: (total / n as f64).round() as i64,
    })
    .collect()
}

pub fn count_by_status(employees: &[Employee]) -> Vec<StatusCount> {
    group_in_order(employees, |e| e.status, || 0usize, |n, _| *n += 1)
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

pub fn compute_aggregates(employees: &[Employee]) -> Aggregates {
    Aggregates {
        by_department: count_by_department(employees),
        average_salary: average_salary_by_department(employees),
        by_status: count_by_status(employees),
    }
}

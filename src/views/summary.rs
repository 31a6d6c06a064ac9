//! Dashboard figures

use std::collections::HashSet;

use serde::Serialize;

use crate::model::{Employee, EmployeeStatus};

use super::group_in_order;

/// Headline numbers shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: usize,
    /// Distinct departments that have at least one employee
    pub departments: usize,
    /// Rounded mean salary over everyone; 0 for an empty snapshot
    pub average_salary: i64,
    pub active_employees: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCount {
    pub position: String,
    pub count: usize,
}

pub fn summarize(employees: &[Employee]) -> DashboardSummary {
    let departments: HashSet<_> = employees.iter().map(|e| e.department).collect();
    let total_salary: f64 = employees.iter().map(|e| e.salary).sum();
    let average_salary = if employees.is_empty() {
        0
    } else {
        (total_salary / employees.len() as f64).round() as i64
    };

    DashboardSummary {
        total_employees: employees.len(),
        departments: departments.len(),
        average_salary,
        active_employees: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count(),
    }
}

/// The last `limit` employees in storage order, most recently added first
pub fn recent_employees(employees: &[Employee], limit: usize) -> Vec<Employee> {
    employees.iter().rev().take(limit).cloned().collect()
}

/// Most common positions, highest count first
///
/// Ties keep first-occurrence order (the sort is stable).
pub fn top_positions(employees: &[Employee], limit: usize) -> Vec<PositionCount> {
    let mut counts: Vec<PositionCount> = group_in_order(
        employees,
        |e| e.position.as_str(),
        || 0usize,
        |n, _| *n += 1,
    )
    .into_iter()
    .map(|(position, count)| PositionCount {
        position: position.to_string(),
        count,
    })
    .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub recent: Vec<Employee>,
    pub positions: Vec<PositionCount>,
}

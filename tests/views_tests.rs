//! Tests for the derived views
//!
//! These tests verify:
//! - Filtering by query, department and status (and their conjunction)
//! - Department, salary and status aggregates
//! - Dashboard summary, recent employees and position breakdown

use chrono::NaiveDate;
use ems::model::{Department, Employee, EmployeeStatus};
use ems::store::seed;
use ems::views::{
    average_salary_by_department, compute_aggregates, count_by_department, count_by_status,
    filter_employees, recent_employees, summarize, top_positions, DepartmentCount,
    DepartmentSalary, EmployeeFilter, Selector, StatusCount,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn employee(
    id: &str,
    name: &str,
    department: Department,
    position: &str,
    salary: f64,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department,
        position: position.to_string(),
        salary,
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        email: format!("{}@company.com", id),
        phone: String::new(),
        status,
    }
}

fn ids(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.id.as_str()).collect()
}

fn mixed_staff() -> Vec<Employee> {
    vec![
        employee("1", "Ada", Department::Sales, "Account Manager", 1000.0, EmployeeStatus::Active),
        employee("2", "Ben", Department::It, "Developer", 2001.0, EmployeeStatus::Active),
        employee("3", "Cy", Department::Sales, "Sales Rep", 1500.0, EmployeeStatus::Inactive),
        employee("4", "Dee", Department::It, "Developer", 2000.0, EmployeeStatus::OnLeave),
        employee("5", "Eve", Department::Hr, "Recruiter", 1234.0, EmployeeStatus::Active),
    ]
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_empty_filter_matches_everything() {
    let staff = mixed_staff();
    assert_eq!(filter_employees(&staff, &EmployeeFilter::new()), staff);
}

#[test]
fn test_query_is_case_insensitive_on_name() {
    let staff = seed::employees();

    let result = filter_employees(&staff, &EmployeeFilter::new().query("AHMED"));

    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_query_matches_position_or_department() {
    let staff = mixed_staff();

    // "sales" is Ada's and Cy's department, and part of Cy's position
    let by_department = filter_employees(&staff, &EmployeeFilter::new().query("sales"));
    assert_eq!(ids(&by_department), vec!["1", "3"]);

    let by_position = filter_employees(&staff, &EmployeeFilter::new().query("develop"));
    assert_eq!(ids(&by_position), vec!["2", "4"]);
}

#[test]
fn test_query_without_match_is_empty() {
    let staff = mixed_staff();
    assert!(filter_employees(&staff, &EmployeeFilter::new().query("zzz")).is_empty());
}

#[test]
fn test_department_and_status_filters() {
    let staff = mixed_staff();

    let it = filter_employees(&staff, &EmployeeFilter::new().department(Department::It));
    assert_eq!(ids(&it), vec!["2", "4"]);

    let it_active = filter_employees(
        &staff,
        &EmployeeFilter::new()
            .department(Department::It)
            .status(EmployeeStatus::Active),
    );
    assert_eq!(ids(&it_active), vec!["2"]);
}

#[test]
fn test_filter_is_conjunctive_subset() {
    let staff = mixed_staff();
    let queries = ["", "e", "dev", "sales", "x"];

    for q in queries {
        let wildcard = filter_employees(&staff, &EmployeeFilter::new().query(q));
        for department in Department::ALL {
            for status in EmployeeStatus::ALL {
                let criteria = EmployeeFilter::new()
                    .query(q)
                    .department(*department)
                    .status(*status);
                for e in filter_employees(&staff, &criteria) {
                    assert!(wildcard.contains(&e));
                    assert_eq!(e.department, *department);
                    assert_eq!(e.status, *status);
                }
            }
        }
    }
}

#[test]
fn test_selector_parsing() {
    assert_eq!("All".parse::<Selector<Department>>().unwrap(), Selector::All);
    assert_eq!("all".parse::<Selector<Department>>().unwrap(), Selector::All);
    assert_eq!(
        "on leave".parse::<Selector<EmployeeStatus>>().unwrap(),
        Selector::Only(EmployeeStatus::OnLeave)
    );
    assert!("Legal".parse::<Selector<Department>>().is_err());
}

// =============================================================================
// Aggregate Tests
// =============================================================================

#[test]
fn test_status_aggregate_scenario() {
    let staff = vec![
        employee("1", "A", Department::It, "P", 1.0, EmployeeStatus::Active),
        employee("2", "B", Department::It, "P", 1.0, EmployeeStatus::OnLeave),
    ];

    assert_eq!(
        count_by_status(&staff),
        vec![
            StatusCount { status: EmployeeStatus::Active, count: 1 },
            StatusCount { status: EmployeeStatus::OnLeave, count: 1 },
        ]
    );
}

#[test]
fn test_department_counts_in_first_occurrence_order() {
    let staff = mixed_staff();

    assert_eq!(
        count_by_department(&staff),
        vec![
            DepartmentCount { department: Department::Sales, count: 2 },
            DepartmentCount { department: Department::It, count: 2 },
            DepartmentCount { department: Department::Hr, count: 1 },
        ]
    );
}

#[test]
fn test_department_counts_sum_to_total() {
    let staff = seed::employees();
    let total: usize = count_by_department(&staff).iter().map(|d| d.count).sum();
    assert_eq!(total, staff.len());
}

#[test]
fn test_average_salary_rounds_half_up() {
    let staff = mixed_staff();

    assert_eq!(
        average_salary_by_department(&staff),
        vec![
            DepartmentSalary { department: Department::Sales, average_salary: 1250 },
            // (2001 + 2000) / 2 = 2000.5
            DepartmentSalary { department: Department::It, average_salary: 2001 },
            DepartmentSalary { department: Department::Hr, average_salary: 1234 },
        ]
    );
}

#[test]
fn test_absent_departments_have_no_entries() {
    let staff = mixed_staff();
    let aggregates = compute_aggregates(&staff);

    assert!(aggregates
        .average_salary
        .iter()
        .all(|s| s.department != Department::Finance && s.department != Department::Marketing));
    assert_eq!(aggregates.by_department.len(), aggregates.average_salary.len());
}

#[test]
fn test_aggregates_of_empty_snapshot() {
    let aggregates = compute_aggregates(&[]);

    assert!(aggregates.by_department.is_empty());
    assert!(aggregates.average_salary.is_empty());
    assert!(aggregates.by_status.is_empty());
}

// =============================================================================
// Dashboard Tests
// =============================================================================

#[test]
fn test_summary_of_seed_data() {
    let summary = summarize(&seed::employees());

    assert_eq!(summary.total_employees, 5);
    assert_eq!(summary.departments, 5);
    // (15000 + 12000 + 8000 + 9500 + 11000) / 5 = 11100
    assert_eq!(summary.average_salary, 11100);
    assert_eq!(summary.active_employees, 3);
}

#[test]
fn test_summary_of_empty_snapshot() {
    let summary = summarize(&[]);

    assert_eq!(summary.total_employees, 0);
    assert_eq!(summary.departments, 0);
    assert_eq!(summary.average_salary, 0);
    assert_eq!(summary.active_employees, 0);
}

#[test]
fn test_recent_employees_newest_first() {
    let staff = mixed_staff();

    assert_eq!(ids(&recent_employees(&staff, 3)), vec!["5", "4", "3"]);
    assert_eq!(recent_employees(&staff, 10).len(), 5);
}

#[test]
fn test_top_positions_sorted_by_count() {
    let staff = mixed_staff();

    let positions = top_positions(&staff, 2);

    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].position, "Developer");
    assert_eq!(positions[0].count, 2);
    // Ties keep first-occurrence order
    assert_eq!(positions[1].position, "Account Manager");
}

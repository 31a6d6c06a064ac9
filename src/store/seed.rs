//! Bootstrap dataset written on first access

use chrono::NaiveDate;

use crate::model::{
    Department, Employee, EmployeeStatus, LeaveRequest, LeaveStatus, LeaveType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    department: Department,
    position: &str,
    salary: f64,
    hire_date: NaiveDate,
    email: &str,
    phone: &str,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department,
        position: position.to_string(),
        salary,
        hire_date,
        email: email.to_string(),
        phone: phone.to_string(),
        status,
    }
}

/// Sample employees
pub fn employees() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "Ahmed Ali",
            Department::It,
            "Senior Developer",
            15000.0,
            date(2023, 1, 15),
            "ahmed@company.com",
            "0501234567",
            EmployeeStatus::Active,
        ),
        employee(
            "2",
            "Sara Mohammed",
            Department::Hr,
            "HR Manager",
            12000.0,
            date(2022, 5, 20),
            "sara@company.com",
            "0507654321",
            EmployeeStatus::Active,
        ),
        employee(
            "3",
            "Khalid Omar",
            Department::Sales,
            "Sales Executive",
            8000.0,
            date(2023, 8, 1),
            "khalid@company.com",
            "0509876543",
            EmployeeStatus::OnLeave,
        ),
        employee(
            "4",
            "Fatima Hassan",
            Department::Marketing,
            "Marketing Specialist",
            9500.0,
            date(2023, 3, 10),
            "fatima@company.com",
            "0501122334",
            EmployeeStatus::Active,
        ),
        employee(
            "5",
            "Omar Abdullah",
            Department::Finance,
            "Accountant",
            11000.0,
            date(2021, 11, 15),
            "omar@company.com",
            "0505566778",
            EmployeeStatus::Inactive,
        ),
    ]
}

/// Sample leave requests
pub fn leaves() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "l1".to_string(),
            employee_id: "3".to_string(),
            employee_name: "Khalid Omar".to_string(),
            leave_type: LeaveType::Annual,
            start_date: date(2023, 11, 20),
            end_date: date(2023, 11, 25),
            reason: "Family vacation".to_string(),
            status: LeaveStatus::Approved,
            applied_on: date(2023, 11, 10),
        },
        LeaveRequest {
            id: "l2".to_string(),
            employee_id: "1".to_string(),
            employee_name: "Ahmed Ali".to_string(),
            leave_type: LeaveType::Sick,
            start_date: date(2023, 12, 1),
            end_date: date(2023, 12, 2),
            reason: "Flu".to_string(),
            status: LeaveStatus::Pending,
            applied_on: date(2023, 12, 1),
        },
    ]
}

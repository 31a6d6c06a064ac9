//! Command definitions
//!
//! User intents dispatched by a presentation layer, and their outcomes.

use serde::Serialize;

use crate::attendance::AttendanceState;
use crate::model::{
    AttendanceRecord, Decision, Employee, LeaveApplication, LeaveRequest, NewEmployee,
};
use crate::views::{Aggregates, Dashboard, EmployeeFilter};

/// A user intent
#[derive(Debug, Clone)]
pub enum Command {
    /// Employees matching a filter (the empty filter lists everyone)
    ListEmployees { filter: EmployeeFilter },

    /// One employee by id
    GetEmployee { id: String },

    AddEmployee(NewEmployee),

    UpdateEmployee(Employee),

    DeleteEmployee { id: String },

    /// Department, salary and status breakdowns
    Analytics,

    /// Headline figures, recent hires and position breakdown
    Dashboard,

    CheckIn { subject: String },

    CheckOut { subject: String },

    /// Today's attendance state of a subject
    AttendanceToday { subject: String },

    AttendanceHistory { subject: String },

    SubmitLeave(LeaveApplication),

    DecideLeave { id: String, decision: Decision },

    /// Leave requests, optionally narrowed to one employee and/or Pending
    ListLeaves {
        employee_id: Option<String>,
        pending_only: bool,
    },
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListEmployees { .. } => "list-employees",
            Command::GetEmployee { .. } => "get-employee",
            Command::AddEmployee(_) => "add-employee",
            Command::UpdateEmployee(_) => "update-employee",
            Command::DeleteEmployee { .. } => "delete-employee",
            Command::Analytics => "analytics",
            Command::Dashboard => "dashboard",
            Command::CheckIn { .. } => "check-in",
            Command::CheckOut { .. } => "check-out",
            Command::AttendanceToday { .. } => "attendance-today",
            Command::AttendanceHistory { .. } => "attendance-history",
            Command::SubmitLeave(_) => "submit-leave",
            Command::DecideLeave { .. } => "decide-leave",
            Command::ListLeaves { .. } => "list-leaves",
        }
    }

    /// Whether executing the command writes to storage
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AddEmployee(_)
                | Command::UpdateEmployee(_)
                | Command::DeleteEmployee { .. }
                | Command::CheckIn { .. }
                | Command::CheckOut { .. }
                | Command::SubmitLeave(_)
                | Command::DecideLeave { .. }
        )
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Outcome {
    Employees(Vec<Employee>),
    Employee(Employee),
    Analytics(Aggregates),
    Dashboard(Dashboard),
    Attendance(AttendanceRecord),
    AttendanceState(AttendanceState),
    AttendanceHistory(Vec<AttendanceRecord>),
    Leave(LeaveRequest),
    Leaves(Vec<LeaveRequest>),
}

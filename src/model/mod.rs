//! Model Module
//!
//! Persisted record types and their closed enumerations.
//!
//! ## Wire Shape
//! Every record serializes to a camelCase JSON object. Dates are ISO
//! `YYYY-MM-DD`, times of day are ISO `HH:MM:SS`, and enumerations use
//! their display strings (`"On Leave"`, `"IT"`, ...).

mod macros;

mod employee;
mod leave;
mod attendance;

pub use employee::{Department, Employee, EmployeeStatus, NewEmployee};
pub use leave::{Decision, LeaveApplication, LeaveRequest, LeaveStatus, LeaveType};
pub use attendance::{AttendanceRecord, AttendanceStatus};

/// Fresh opaque record id
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

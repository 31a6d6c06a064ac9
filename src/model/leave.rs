//! Leave request record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EmsError, Result};
use crate::store::{Collection, Record};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum LeaveType {
        Annual => "Annual",
        Sick => "Sick",
        Emergency => "Emergency",
        Maternity => "Maternity",
        Other => "Other",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum LeaveStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

string_enum! {
    /// Reviewer verdict on a pending request
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Decision {
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

impl From<Decision> for LeaveStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => LeaveStatus::Approved,
            Decision::Rejected => LeaveStatus::Rejected,
        }
    }
}

/// A stored leave request
///
/// `employee_name` is a snapshot taken at submission and is not updated
/// when the employee is later renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
}

/// Input for a new leave request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

impl Record for LeaveRequest {
    const COLLECTION: Collection = Collection::Leaves;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(EmsError::Validation("leave request id is empty".to_string()));
        }
        if self.employee_id.is_empty() {
            return Err(EmsError::Validation(format!(
                "leave request {} has no employee",
                self.id
            )));
        }
        Ok(())
    }
}

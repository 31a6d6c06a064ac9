//! Leave workflow operations

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{EmsError, Result};
use crate::model::{new_id, Decision, LeaveApplication, LeaveRequest, LeaveStatus};
use crate::store::RecordStore;

/// Create a Pending request dated `today`
///
/// The employee's current name is copied into the request. Unknown
/// employees are `NotFound`; an empty reason is a `Validation` error. The
/// collection is left untouched on failure.
pub fn submit(
    store: &RecordStore,
    today: NaiveDate,
    application: LeaveApplication,
) -> Result<LeaveRequest> {
    let employee = store
        .load_employees()?
        .into_iter()
        .find(|e| e.id == application.employee_id)
        .ok_or_else(|| EmsError::not_found("employee", application.employee_id.as_str()))?;

    if application.reason.trim().is_empty() {
        return Err(EmsError::Validation("leave reason is required".to_string()));
    }

    let request = LeaveRequest {
        id: new_id(),
        employee_id: employee.id,
        employee_name: employee.name,
        leave_type: application.leave_type,
        start_date: application.start_date,
        end_date: application.end_date,
        reason: application.reason,
        status: LeaveStatus::Pending,
        applied_on: today,
    };

    store.leaves().update(|leaves| {
        leaves.insert(0, request.clone());
        Ok(())
    })?;

    info!(
        leave_id = %request.id,
        employee_id = %request.employee_id,
        leave_type = %request.leave_type,
        "leave request submitted"
    );
    Ok(request)
}

/// Approve or reject a Pending request
///
/// Errors:
/// - `NotFound` if no request has `leave_id`
/// - `Validation` if the request was already decided
pub fn decide(store: &RecordStore, leave_id: &str, decision: Decision) -> Result<LeaveRequest> {
    store.leaves().update(|leaves| {
        let request = leaves
            .iter_mut()
            .find(|l| l.id == leave_id)
            .ok_or_else(|| EmsError::not_found("leave request", leave_id))?;

        if !request.is_pending() {
            warn!(leave_id, status = %request.status, "leave request already decided");
            return Err(EmsError::Validation(format!(
                "leave request {} is already {}",
                leave_id, request.status
            )));
        }

        request.status = decision.into();
        info!(leave_id, status = %request.status, "leave request decided");
        Ok(request.clone())
    })
}

/// Requests filed by one employee, newest first
pub fn leaves_for(store: &RecordStore, employee_id: &str) -> Result<Vec<LeaveRequest>> {
    Ok(store
        .load_leaves()?
        .into_iter()
        .filter(|l| l.employee_id == employee_id)
        .collect())
}

/// Requests awaiting review, newest first
pub fn pending(store: &RecordStore) -> Result<Vec<LeaveRequest>> {
    Ok(store
        .load_leaves()?
        .into_iter()
        .filter(LeaveRequest::is_pending)
        .collect())
}

//! Check-in/check-out transitions

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Timelike};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EmsError, Result};
use crate::model::{new_id, AttendanceRecord, AttendanceStatus};
use crate::store::RecordStore;

use super::Clock;

/// A subject's attendance for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "record", rename_all = "camelCase")]
pub enum AttendanceState {
    /// No record for the day yet
    NotCheckedIn,

    /// Open record (no check-out)
    CheckedIn(AttendanceRecord),

    /// Closed record; the day's session is over
    CheckedOut(AttendanceRecord),
}

impl AttendanceState {
    pub fn is_checked_in(&self) -> bool {
        matches!(self, AttendanceState::CheckedIn(_))
    }

    fn of_day(records: &[AttendanceRecord], subject: &str, date: NaiveDate) -> Self {
        match records.iter().find(|r| r.belongs_to(subject, date)) {
            None => AttendanceState::NotCheckedIn,
            Some(r) if r.is_open() => AttendanceState::CheckedIn(r.clone()),
            Some(r) => AttendanceState::CheckedOut(r.clone()),
        }
    }
}

/// Applies attendance transitions against a record store
pub struct AttendanceTracker {
    /// Check-ins with a local hour strictly greater than this are Late
    late_after_hour: u32,

    /// One lock per subject, created on first use
    subject_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AttendanceTracker {
    pub fn new(late_after_hour: u32) -> Self {
        Self {
            late_after_hour,
            subject_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Arrival status for a check-in at `at`
    pub fn arrival_status(&self, at: NaiveTime) -> AttendanceStatus {
        if at.hour() > self.late_after_hour {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }

    /// Open today's session for `subject`
    ///
    /// Errors:
    /// - `NotFound` if the subject is not an employee
    /// - `Validation` if the subject already has a record for today
    pub fn check_in(
        &self,
        store: &RecordStore,
        clock: &dyn Clock,
        subject: &str,
    ) -> Result<AttendanceRecord> {
        Self::ensure_employee(store, subject)?;
        let lock = self.subject_lock(subject);
        let _guard = lock.lock();

        let now = clock.now();
        let today = now.date();
        let at = whole_seconds(now.time());

        store.attendance().update(|records| {
            match AttendanceState::of_day(records, subject, today) {
                AttendanceState::NotCheckedIn => {}
                AttendanceState::CheckedIn(open) => {
                    warn!(subject, date = %today, "duplicate check-in rejected");
                    return Err(EmsError::Validation(format!(
                        "{} already checked in at {} on {}",
                        subject, open.check_in, today
                    )));
                }
                AttendanceState::CheckedOut(_) => {
                    warn!(subject, date = %today, "check-in after check-out rejected");
                    return Err(EmsError::Validation(format!(
                        "{} already completed attendance for {}",
                        subject, today
                    )));
                }
            }

            let record = AttendanceRecord {
                id: new_id(),
                employee_id: subject.to_string(),
                date: today,
                check_in: at,
                check_out: None,
                status: self.arrival_status(at),
            };
            records.push(record.clone());
            info!(subject, date = %today, time = %at, status = %record.status, "checked in");
            Ok(record)
        })
    }

    /// Close today's open session for `subject`
    ///
    /// Errors:
    /// - `NotFound` if the subject is not an employee, or has no open
    ///   record for today
    pub fn check_out(
        &self,
        store: &RecordStore,
        clock: &dyn Clock,
        subject: &str,
    ) -> Result<AttendanceRecord> {
        Self::ensure_employee(store, subject)?;
        let lock = self.subject_lock(subject);
        let _guard = lock.lock();

        let now = clock.now();
        let today = now.date();
        let at = whole_seconds(now.time());

        store.attendance().update(|records| {
            let open = records
                .iter_mut()
                .find(|r| r.belongs_to(subject, today) && r.is_open())
                .ok_or_else(|| {
                    EmsError::not_found("open attendance record", format!("{} on {}", subject, today))
                })?;

            open.check_out = Some(at);
            info!(subject, date = %today, time = %at, "checked out");
            Ok(open.clone())
        })
    }

    /// Today's state for `subject`
    pub fn state(
        &self,
        store: &RecordStore,
        clock: &dyn Clock,
        subject: &str,
    ) -> Result<AttendanceState> {
        let today = clock.now().date();
        let records = store.load_attendance()?;
        Ok(AttendanceState::of_day(&records, subject, today))
    }

    /// Number of subjects holding a transition lock
    pub fn locked_subjects(&self) -> usize {
        self.subject_locks.lock().len()
    }

    /// Every record of `subject`, oldest first
    pub fn history(&self, store: &RecordStore, subject: &str) -> Result<Vec<AttendanceRecord>> {
        Ok(store
            .load_attendance()?
            .into_iter()
            .filter(|r| r.employee_id == subject)
            .collect())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Locks are only created for subjects that resolved to an employee
    fn subject_lock(&self, subject: &str) -> Arc<Mutex<()>> {
        let mut locks = self.subject_locks.lock();
        Arc::clone(locks.entry(subject.to_string()).or_default())
    }

    fn ensure_employee(store: &RecordStore, subject: &str) -> Result<()> {
        if subject.trim().is_empty() {
            return Err(EmsError::Validation("attendance subject is required".to_string()));
        }
        if store.load_employees()?.iter().any(|e| e.id == subject) {
            Ok(())
        } else {
            Err(EmsError::not_found("employee", subject))
        }
    }
}

/// Drop sub-second precision so stored times read `HH:MM:SS`
fn whole_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

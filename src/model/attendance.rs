//! Attendance record

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EmsError, Result};
use crate::store::{Collection, Record};

use super::macros::string_enum;

string_enum! {
    /// Decided once, at check-in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum AttendanceStatus {
        Present => "Present",
        Late => "Late",
    }
}

/// One check-in/check-out session of a subject on a given day
///
/// Both times are local wall-clock readings. `check_out` may read earlier
/// than `check_in` when the clock was set back during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Still checked in (no check-out recorded)
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    pub fn belongs_to(&self, subject: &str, date: NaiveDate) -> bool {
        self.employee_id == subject && self.date == date
    }
}

impl Record for AttendanceRecord {
    const COLLECTION: Collection = Collection::Attendance;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(EmsError::Validation("attendance record id is empty".to_string()));
        }
        if self.employee_id.is_empty() {
            return Err(EmsError::Validation(format!(
                "attendance record {} has no employee",
                self.id
            )));
        }
        Ok(())
    }
}

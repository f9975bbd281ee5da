//! Attendance entity - One worked (or scheduled) shift of one employee.
//!
//! Records are created, replaced and bulk-deleted directly against the canonical
//! collection. Any post-creation edit forces `is_modified`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Attendance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Time-derived unique identifier
    pub id: i64,
    /// Employee this shift belongs to
    pub employee_id: i64,
    /// Calendar day of the shift
    pub work_date: NaiveDate,
    /// Clock-in time
    pub clock_in: NaiveTime,
    /// Clock-out time, absent while the shift is still open
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break length
    #[serde(default)]
    pub break_minutes: u32,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// Set by any manual add or edit
    #[serde(default)]
    pub is_modified: bool,
}

/// Data submitted for a new attendance record; id and flag are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInput {
    /// Employee this shift belongs to
    pub employee_id: i64,
    /// Calendar day of the shift
    pub work_date: NaiveDate,
    /// Clock-in time
    pub clock_in: NaiveTime,
    /// Clock-out time
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break length
    #[serde(default)]
    pub break_minutes: u32,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
}

impl AttendanceInput {
    /// Builds the stored record under `id`.
    #[must_use]
    pub fn into_record(self, id: i64) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: self.employee_id,
            work_date: self.work_date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            break_minutes: self.break_minutes,
            note: self.note,
            is_modified: true,
        }
    }
}

impl AttendanceRecord {
    /// Minutes worked, net of break. `None` while the shift is open.
    ///
    /// A clock-out earlier than clock-in is an overnight shift ending the next day.
    #[must_use]
    pub fn worked_minutes(&self) -> Option<i64> {
        let clock_out = self.clock_out?;
        let mut span = (clock_out - self.clock_in).num_minutes();
        if span < 0 {
            span += 24 * 60;
        }
        Some((span - i64::from(self.break_minutes)).max(0))
    }
}

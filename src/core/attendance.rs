//! Attendance mutation - add, update and bulk delete against the canonical collection.
//!
//! Unlike employees, attendance records have no draft stage. Every write lands directly
//! in the directory and marks the record as modified.

use crate::{
    core::{directory::RecordDirectory, ids::unique_snowflake_id},
    entities::{AttendanceInput, AttendanceRecord},
    errors::{Error, Result},
};
use chrono::Datelike;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

impl RecordDirectory {
    /// Appends a new record under a fresh unique id, marked modified.
    #[instrument(skip(self, data), fields(employee_id = data.employee_id))]
    pub fn add_attendance(&mut self, data: AttendanceInput) -> &AttendanceRecord {
        let id = unique_snowflake_id(|candidate| {
            self.attendance.iter().any(|record| record.id == candidate)
        });
        debug!(id, "Attendance record added");
        let index = self.attendance.len();
        self.attendance.push(data.into_record(id));
        &self.attendance[index]
    }

    /// Replaces the record with the same id. The stored copy is always marked modified,
    /// even when nothing changed.
    #[instrument(skip(self, record), fields(id = record.id))]
    pub fn update_attendance(&mut self, mut record: AttendanceRecord) -> Result<()> {
        let slot = self
            .attendance
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(Error::AttendanceNotFound { id: record.id })?;
        record.is_modified = true;
        *slot = record;
        debug!("Attendance record updated");
        Ok(())
    }

    /// Removes every record whose id is in `ids`. Returns how many were removed.
    pub fn delete_attendance(&mut self, ids: &HashSet<i64>) -> usize {
        let before = self.attendance.len();
        self.attendance.retain(|record| !ids.contains(&record.id));
        let removed = before - self.attendance.len();
        info!(requested = ids.len(), removed, "Attendance records deleted");
        removed
    }

    /// Records in scope worked in the given month, ordered by date then clock-in.
    #[must_use]
    pub fn attendance_in_month(
        &self,
        store_id: Option<&str>,
        year: i32,
        month: u32,
    ) -> Vec<&AttendanceRecord> {
        let mut records: Vec<&AttendanceRecord> = self
            .scoped_attendance(store_id)
            .into_iter()
            .filter(|record| record.work_date.year() == year && record.work_date.month() == month)
            .collect();
        records.sort_by_key(|record| (record.work_date, record.clock_in));
        records
    }
}

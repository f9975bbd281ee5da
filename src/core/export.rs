//! Export column selection.
//!
//! Only the request is built here: which columns, in which order, over how many records.
//! Producing the actual file is left to the caller.

use crate::{
    core::selection::SelectionSet,
    errors::{Error, Result},
};
use tracing::info;

/// Column that can be included in an attendance export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExportColumn {
    /// Employee name
    EmployeeName,
    /// Employee position
    Position,
    /// Work date
    WorkDate,
    /// Clock-in time
    ClockIn,
    /// Clock-out time
    ClockOut,
    /// Break length
    BreakMinutes,
    /// Net worked hours
    WorkedHours,
    /// Pay rate
    PayRate,
    /// Manual edit flag
    Modified,
    /// Note
    Note,
}

impl ExportColumn {
    /// Every column, in output order
    pub const ALL: [Self; 10] = [
        Self::EmployeeName,
        Self::Position,
        Self::WorkDate,
        Self::ClockIn,
        Self::ClockOut,
        Self::BreakMinutes,
        Self::WorkedHours,
        Self::PayRate,
        Self::Modified,
        Self::Note,
    ];

    /// Header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmployeeName => "Name",
            Self::Position => "Position",
            Self::WorkDate => "Date",
            Self::ClockIn => "Clock in",
            Self::ClockOut => "Clock out",
            Self::BreakMinutes => "Break (min)",
            Self::WorkedHours => "Worked (h)",
            Self::PayRate => "Pay rate",
            Self::Modified => "Modified",
            Self::Note => "Note",
        }
    }
}

/// What the caller should export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Selected columns in output order
    pub columns: Vec<ExportColumn>,
    /// Header labels matching `columns`
    pub headers: Vec<&'static str>,
    /// Number of records to export
    pub record_count: usize,
}

/// Column picker of the export dialog. Every column starts selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSelector {
    columns: SelectionSet<ExportColumn>,
}

impl Default for ExportSelector {
    fn default() -> Self {
        Self {
            columns: SelectionSet::new(ExportColumn::ALL, true),
        }
    }
}

impl ExportSelector {
    /// Flips one column.
    pub fn toggle(&mut self, column: ExportColumn) {
        self.columns.toggle(&column);
    }

    /// Selects or clears every column.
    pub fn select_all(&mut self, selected: bool) {
        self.columns.select_all(selected);
    }

    /// Whether `column` is included.
    #[must_use]
    pub fn is_selected(&self, column: ExportColumn) -> bool {
        self.columns.is_selected(&column)
    }

    /// Whether every column is included, for the "select all" checkbox.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.columns.all_selected()
    }

    /// Whether the export action is enabled.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.columns.any_selected()
    }

    /// Builds the export request. Refused when no column is selected.
    pub fn request(&self, record_count: usize) -> Result<ExportRequest> {
        if !self.can_export() {
            return Err(Error::EmptyExport);
        }
        let columns = self.columns.selected();
        let headers = columns.iter().map(|column| column.label()).collect();
        info!(columns = columns.len(), record_count, "Export requested");
        Ok(ExportRequest {
            columns,
            headers,
            record_count,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_all_columns_selected_by_default() {
        let selector = ExportSelector::default();
        assert!(selector.all_selected());
        let request = selector.request(3).unwrap();
        assert_eq!(request.columns, ExportColumn::ALL.to_vec());
        assert_eq!(request.headers.len(), ExportColumn::ALL.len());
        assert_eq!(request.record_count, 3);
    }

    #[test]
    fn test_empty_selection_disables_export() {
        let mut selector = ExportSelector::default();
        selector.select_all(false);
        assert!(!selector.can_export());
        assert!(matches!(selector.request(10), Err(Error::EmptyExport)));
    }

    #[test]
    fn test_toggled_columns_keep_output_order() {
        let mut selector = ExportSelector::default();
        selector.select_all(false);
        selector.toggle(ExportColumn::WorkedHours);
        selector.toggle(ExportColumn::EmployeeName);
        assert!(selector.is_selected(ExportColumn::EmployeeName));

        let request = selector.request(0).unwrap();
        assert_eq!(request.columns, vec![ExportColumn::EmployeeName, ExportColumn::WorkedHours]);
        assert_eq!(request.headers, vec!["Name", "Worked (h)"]);

        selector.toggle(ExportColumn::WorkedHours);
        selector.toggle(ExportColumn::EmployeeName);
        assert!(!selector.can_export());
    }
}

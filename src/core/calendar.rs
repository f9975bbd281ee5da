//! Calendar grid for date pickers.
//!
//! The grid keeps its own view month, separate from whatever date the caller has
//! selected. Navigating never changes the selection; only [`CalendarGrid::select_day`]
//! produces a date, and it hands it to the caller's callback.

use crate::errors::{Error, Result};
use chrono::{Datelike, Months, NaiveDate};
use tracing::trace;

/// Years shown on each side of the view year in the year picker
pub const YEAR_PICKER_RADIUS: i32 = 5;

/// One day in a rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, starting at 1
    pub day: u32,
    /// Concrete date of the cell
    pub date: NaiveDate,
    /// Whether this is the caller's selected date
    pub is_selected: bool,
}

/// Rendered month: blanks before the 1st, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// View year
    pub year: i32,
    /// View month (1-12)
    pub month: u32,
    /// Empty cells before the 1st (0 = month starts on Sunday)
    pub leading_blanks: u32,
    /// Day cells in order
    pub days: Vec<DayCell>,
}

/// Date picker state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// First day of the view month
    view: NaiveDate,
    is_open: bool,
    year_window: Option<Vec<i32>>,
}

impl CalendarGrid {
    /// Creates a closed grid viewing the month of `anchor`.
    #[must_use]
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            view: first_of_month(anchor),
            is_open: false,
            year_window: None,
        }
    }

    /// Opens the grid on the selected date's month, or on `today`'s when nothing is selected.
    pub fn open(&mut self, selected: Option<NaiveDate>, today: NaiveDate) {
        self.view = first_of_month(selected.unwrap_or(today));
        self.is_open = true;
        self.year_window = None;
    }

    /// Closes the grid and any open year picker.
    pub fn close(&mut self) {
        self.is_open = false;
        self.year_window = None;
    }

    /// Whether the grid is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current view as `(year, month)`.
    #[must_use]
    pub fn view(&self) -> (i32, u32) {
        (self.view.year(), self.view.month())
    }

    /// Moves the view by `delta` months.
    pub fn shift_month(&mut self, delta: i32) -> Result<()> {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.view.checked_add_months(months)
        } else {
            self.view.checked_sub_months(months)
        };
        self.view = shifted.ok_or_else(|| Error::InvalidDate {
            message: format!("cannot shift calendar by {delta} months"),
        })?;
        trace!(year = self.view.year(), month = self.view.month(), "Calendar view shifted");
        Ok(())
    }

    /// Sets the view year, keeping the view month.
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        self.view = NaiveDate::from_ymd_opt(year, self.view.month(), 1).ok_or_else(|| {
            Error::InvalidDate {
                message: format!("year {year} is out of range"),
            }
        })?;
        Ok(())
    }

    /// Sets the view month (1-12), keeping the view year.
    pub fn set_month(&mut self, month: u32) -> Result<()> {
        self.view = NaiveDate::from_ymd_opt(self.view.year(), month, 1).ok_or_else(|| {
            Error::InvalidDate {
                message: format!("month {month} is out of range"),
            }
        })?;
        Ok(())
    }

    /// Opens the year picker, fixing its window around the current view year.
    ///
    /// The window stays as computed until the picker closes, even if the view changes.
    pub fn open_year_picker(&mut self) -> &[i32] {
        let center = self.view.year();
        self.year_window
            .insert(((center - YEAR_PICKER_RADIUS)..=(center + YEAR_PICKER_RADIUS)).collect())
    }

    /// Years offered by the open year picker.
    #[must_use]
    pub fn year_picker(&self) -> Option<&[i32]> {
        self.year_window.as_deref()
    }

    /// Chooses a year from the picker and closes it.
    pub fn pick_year(&mut self, year: i32) -> Result<()> {
        self.set_year(year)?;
        self.year_window = None;
        Ok(())
    }

    /// Renders the view month, flagging the cell equal to `selected` by calendar date.
    #[must_use]
    pub fn render(&self, selected: Option<NaiveDate>) -> MonthView {
        let days = self
            .view
            .iter_days()
            .take_while(|date| date.month() == self.view.month())
            .map(|date| DayCell {
                day: date.day(),
                date,
                is_selected: selected == Some(date),
            })
            .collect();

        MonthView {
            year: self.view.year(),
            month: self.view.month(),
            leading_blanks: self.view.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Picks `day` of the view month, hands the date to `on_select` and closes the grid.
    pub fn select_day<F>(&mut self, day: u32, on_select: F) -> Result<NaiveDate>
    where
        F: FnOnce(NaiveDate),
    {
        let date = self.view.with_day(day).ok_or_else(|| Error::InvalidDate {
            message: format!(
                "day {day} does not exist in {}-{:02}",
                self.view.year(),
                self.view.month()
            ),
        })?;
        on_select(date);
        self.close();
        Ok(date)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(u64::from(date.day0()))
}

/// Number of days in a month, `None` for an invalid year/month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from((next - first).num_days()).ok()
}

//! Career tenure calculation.
//!
//! Derives a presentation label from the hire date. The label is never stored.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Tenure bucket of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerCategory {
    /// Hire date is still in the future
    Upcoming,
    /// Less than three whole months
    New,
    /// Three to eleven whole months
    UnderOneYear,
    /// Whole years served
    Years(u32),
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => f.write_str("upcoming"),
            Self::New => f.write_str("new"),
            Self::UnderOneYear => f.write_str("under one year"),
            Self::Years(years) => write!(f, "{years} years"),
        }
    }
}

/// Whole years and remaining whole months between `from` and `to` (`from <= to`).
///
/// A year is borrowed when the month difference is negative, or zero with the day of
/// month not reached yet. Otherwise the day of month is ignored, so the day before an
/// anniversary counts twelve months.
fn elapsed_years_months(from: NaiveDate, to: NaiveDate) -> (i32, i32) {
    let mut years = to.year() - from.year();
    #[allow(clippy::cast_possible_wrap)]
    let mut months = to.month() as i32 - from.month() as i32;
    if months < 0 || (months == 0 && to.day() < from.day()) {
        years -= 1;
        months += 12;
    }
    (years, months)
}

/// Tenure category of a hire date as of `today`.
#[must_use]
pub fn career_category(hire_date: NaiveDate, today: NaiveDate) -> CareerCategory {
    if hire_date > today {
        return CareerCategory::Upcoming;
    }

    let (years, months) = elapsed_years_months(hire_date, today);
    let total_months = years * 12 + months;
    if total_months < 3 {
        CareerCategory::New
    } else if total_months < 12 {
        CareerCategory::UnderOneYear
    } else {
        CareerCategory::Years(years.unsigned_abs())
    }
}

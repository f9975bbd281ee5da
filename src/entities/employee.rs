//! Employee entity - Represents a staff member registered to a store.
//!
//! Each employee carries identity and contact data, employment and pay terms, a display
//! color, and employment-document metadata. The bank account is held as a structured
//! [`BankAccount`] pair and only becomes the composite `"<bank> <digits>"` string at the
//! serde boundary.

use crate::core::career::{CareerCategory, career_category};
use crate::core::field_codec::{BankAccount, mask_phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the employee is on a regular contract or part-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    /// Full contract
    Regular,
    /// Hourly part-timer
    PartTime,
}

/// Employment status of an employee within their store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    /// Currently working
    Active,
    /// Temporarily away
    OnLeave,
    /// No longer employed
    Resigned,
}

impl EmploymentStatus {
    /// Every status, in menu order
    pub const ALL: [Self; 3] = [Self::Active, Self::OnLeave, Self::Resigned];

    /// Wire name used in serialized records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnLeave => "on-leave",
            Self::Resigned => "resigned",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completeness of the employee's registration data, independent of employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfoStatus {
    /// All registration data present
    Complete,
    /// Registration still missing data
    Incomplete,
}

impl InfoStatus {
    /// Every info status, in menu order
    pub const ALL: [Self; 2] = [Self::Complete, Self::Incomplete];

    /// Wire name used in serialized records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for InfoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the pay rate is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayType {
    /// `pay_rate` is per hour
    Hourly,
    /// `pay_rate` is per month
    Monthly,
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (temporary clock tick while drafting)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Canonical `DDD-DDDD-DDDD` phone number
    #[serde(default)]
    pub phone: String,
    /// Date of birth, absent only on unfinished drafts
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// Position within the store (e.g. "manager", "hall")
    #[serde(default)]
    pub position: String,
    /// Contract type
    pub employment_type: EmploymentType,
    /// Employment status
    pub status: EmploymentStatus,
    /// Registration completeness
    pub info_status: InfoStatus,
    /// First working day
    pub hire_date: NaiveDate,
    /// Most recent working day, if any
    #[serde(default)]
    pub last_work_date: Option<NaiveDate>,
    /// Pay interpretation
    pub pay_type: PayType,
    /// Non-negative pay amount
    pub pay_rate: f64,
    /// Hex display tag (e.g. `"#A1B2C3"`)
    pub color: String,
    /// Present only when `status` is resigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resignation_reason: Option<String>,
    /// Store the employee belongs to
    pub store_id: String,
    /// Free-form job type
    #[serde(default)]
    pub job_type: String,
    /// Bank and account digits, serialized as the composite string
    #[serde(default)]
    pub account_number: BankAccount,
    /// File name of the uploaded employment contract
    #[serde(default)]
    pub contract: Option<String>,
    /// File name of the uploaded bank account copy
    #[serde(default)]
    pub bank_account_copy: Option<String>,
}

impl Employee {
    /// Whether the employee has resigned.
    #[must_use]
    pub fn is_resigned(&self) -> bool {
        self.status == EmploymentStatus::Resigned
    }

    /// Tenure category relative to `today`. Presentation only.
    #[must_use]
    pub fn career(&self, today: NaiveDate) -> CareerCategory {
        career_category(self.hire_date, today)
    }

    /// Phone with the middle group hidden. Presentation only.
    #[must_use]
    pub fn masked_phone(&self) -> String {
        mask_phone(&self.phone)
    }
}

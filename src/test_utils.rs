//! Shared test utilities for the roster core.
//!
//! This module provides fixture employees, attendance records and stores with sensible
//! defaults, plus a pre-populated directory used across the module tests.

use crate::{
    core::{
        directory::RecordDirectory,
        field_codec::{Bank, BankAccount},
    },
    entities::{
        AttendanceRecord, Employee, EmploymentStatus, EmploymentType, InfoStatus, PayType, Store,
    },
};
use chrono::{NaiveDate, NaiveTime};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .with_test_writer()
        .try_init();
}

/// Fixed "today" for date-dependent tests.
///
/// # Panics
/// Never; the date is a valid constant.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Creates a valid, active employee with sensible defaults.
///
/// # Defaults
/// * `phone`: `010-1234-<id>`
/// * `birthdate`: 1995-05-05
/// * `hire_date`: 2023-03-02
/// * `position`: "hall"
/// * hourly part-timer at 10030, complete info, Kookmin account
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_employee(id: i64, name: &str, store_id: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        phone: format!("010-1234-{:04}", id.rem_euclid(10_000)),
        birthdate: NaiveDate::from_ymd_opt(1995, 5, 5),
        position: "hall".to_string(),
        employment_type: EmploymentType::PartTime,
        status: EmploymentStatus::Active,
        info_status: InfoStatus::Complete,
        hire_date: NaiveDate::from_ymd_opt(2023, 3, 2).unwrap(),
        last_work_date: None,
        pay_type: PayType::Hourly,
        pay_rate: 10_030.0,
        color: "#3366CC".to_string(),
        resignation_reason: None,
        store_id: store_id.to_string(),
        job_type: String::new(),
        account_number: BankAccount::new(Some(Bank::Kookmin), "123456-01-234567"),
        contract: None,
        bank_account_copy: None,
    }
}

/// Creates an unmodified 09:00-18:00 record in March 2025 with a one-hour break.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_attendance(id: i64, employee_id: i64) -> AttendanceRecord {
    let day = u32::try_from(id.rem_euclid(28)).unwrap() + 1;
    AttendanceRecord {
        id,
        employee_id,
        work_date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        clock_out: NaiveTime::from_hms_opt(18, 0, 0),
        break_minutes: 60,
        note: None,
        is_modified: false,
    }
}

/// Two stores of "ACME" and one of "OTHER".
#[must_use]
pub fn sample_stores() -> Vec<Store> {
    [("S1", "Gangnam", "ACME"), ("S2", "Hongdae", "ACME"), ("S9", "Haeundae", "OTHER")]
        .into_iter()
        .map(|(store_id, name, company_code)| Store {
            store_id: store_id.to_string(),
            name: name.to_string(),
            company_code: company_code.to_string(),
        })
        .collect()
}

/// Directory with employees spread over three stores and a few attendance records.
///
/// * S1: Kim Minji (active), Lee Seojun (on leave, kitchen), Park Kim (resigned)
/// * S2: Choi Yuna (active manager), Kimura Aoi (active, incomplete)
/// * S9: Jung Hoseok (active, kitchen)
#[must_use]
pub fn sample_directory() -> RecordDirectory {
    let kim = sample_employee(1, "Kim Minji", "S1");

    let mut lee = sample_employee(2, "Lee Seojun", "S1");
    lee.status = EmploymentStatus::OnLeave;
    lee.position = "kitchen".to_string();

    let mut park = sample_employee(3, "Park Kim", "S1");
    park.status = EmploymentStatus::Resigned;
    park.resignation_reason = Some("moved away".to_string());

    let mut choi = sample_employee(4, "Choi Yuna", "S2");
    choi.position = "manager".to_string();
    choi.employment_type = EmploymentType::Regular;
    choi.pay_type = PayType::Monthly;
    choi.pay_rate = 2_800_000.0;

    let mut kimura = sample_employee(5, "Kimura Aoi", "S2");
    kimura.info_status = InfoStatus::Incomplete;

    let mut jung = sample_employee(6, "Jung Hoseok", "S9");
    jung.position = "kitchen".to_string();

    RecordDirectory::new(
        vec![kim, lee, park, choi, kimura, jung],
        vec![
            sample_attendance(100, 1),
            sample_attendance(101, 2),
            sample_attendance(102, 4),
        ],
        sample_stores(),
    )
}

//! Entity module - Plain data records held by the roster core.
//! Records are serde-serializable so seed data and session payloads round-trip
//! through TOML.

pub mod attendance;
pub mod employee;
pub mod store;

pub use attendance::{AttendanceInput, AttendanceRecord};
pub use employee::{Employee, EmploymentStatus, EmploymentType, InfoStatus, PayType};
pub use store::Store;

//! Core business logic - framework-agnostic roster operations.
//!
//! Everything here is synchronous and works on plain data; presentation code calls in
//! with user input and renders what comes back.

/// Attendance add/update/delete against the directory
pub mod attendance;
/// Calendar month grid for date pickers
pub mod calendar;
/// Tenure categories from hire dates
pub mod career;
/// Store-scoped collections, filtering and search
pub mod directory;
/// Export column selection
pub mod export;
/// Bank account composite field and phone masking
pub mod field_codec;
/// Time-derived ids and display colors
pub mod ids;
/// Keystroke phone formatting
pub mod phone;
/// Scanned store handoff and the search-to-register flow
pub mod registration;
/// Generic multi-select state
pub mod selection;
/// Durable session markers
pub mod session;
/// Form fields, tabs and validation
pub mod validation;
/// Employee create/edit state machine
pub mod workflow;

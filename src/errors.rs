use crate::core::validation::ValidationErrors;
use thiserror::Error;

/// Unified error type for the roster core.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying I/O failure (session file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more form fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// No employee with this id in the collection
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// No attendance record with this id in the collection
    #[error("Attendance record not found: {id}")]
    AttendanceNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// The workflow is not in a state that allows the requested action
    #[error("Cannot {action} while the workflow is {state}")]
    InvalidTransition {
        /// Attempted action
        action: &'static str,
        /// Current state name
        state: &'static str,
    },

    /// Lookup candidate is already active in this store
    #[error("Employee {id} is already registered in this store")]
    NotSelectable {
        /// Candidate employee id
        id: i64,
    },

    /// A durable session payload could not be parsed
    #[error("Malformed session payload under '{key}': {message}")]
    MalformedSession {
        /// Session key holding the payload
        key: String,
        /// Parser message
        message: String,
    },

    /// A session payload could not be serialized for writing
    #[error("Failed to encode session payload under '{key}': {message}")]
    SessionEncode {
        /// Session key (or file) being written
        key: String,
        /// Serializer message
        message: String,
    },

    /// Calendar navigation received an out-of-range value
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// What was out of range
        message: String,
    },

    /// Export was requested with every column deselected
    #[error("Export requires at least one selected column")]
    EmptyExport,
}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

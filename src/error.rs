//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation and lookup failure in the record layer. The
//! calculation core itself never fails.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/app.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/app.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        id: u64,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {id}")]
    LeaveRequestNotFound {
        /// The leave request id that was looked up.
        id: u64,
    },

    /// The employee has no leave balance record.
    #[error("Leave balance not found for employee {employee_id}")]
    LeaveBalanceNotFound {
        /// The employee whose balance was looked up.
        employee_id: u64,
    },

    /// No holiday is registered on the given date.
    #[error("Holiday not found on {date}")]
    HolidayNotFound {
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// No letterhead exists with the given id.
    #[error("Letterhead not found: {id}")]
    LetterheadNotFound {
        /// The letterhead id that was looked up.
        id: u64,
    },

    /// No letter exists with the given id.
    #[error("Letter not found: {id}")]
    LetterNotFound {
        /// The letter id that was looked up.
        id: u64,
    },

    /// No student exists with the given id.
    #[error("Student not found: {id}")]
    StudentNotFound {
        /// The student id that was looked up.
        id: u64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A student record was invalid.
    #[error("Invalid student field '{field}': {message}")]
    InvalidStudent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave request was rejected at input time.
    #[error("Invalid leave request: {message}")]
    InvalidLeaveRequest {
        /// A description of what made the request invalid.
        message: String,
    },

    /// A letter was invalid or contained inconsistent data.
    #[error("Invalid letter field '{field}': {message}")]
    InvalidLetter {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave balance could not be recorded.
    #[error("Invalid leave balance: {message}")]
    InvalidLeaveBalance {
        /// A description of what made the balance invalid.
        message: String,
    },

    /// Another employee already holds this identity number.
    #[error("Identity number already registered: {nip}")]
    DuplicateIdentityNumber {
        /// The conflicting identity number.
        nip: String,
    },

    /// A holiday is already registered on this date.
    #[error("Holiday already registered on {date}")]
    DuplicateHoliday {
        /// The conflicting date.
        date: NaiveDate,
    },

    /// The employee already has a leave balance record.
    #[error("Leave balance already exists for employee {employee_id}")]
    DuplicateLeaveBalance {
        /// The employee that already has a balance.
        employee_id: u64,
    },

    /// A document context could not be rendered.
    #[error("Failed to render document '{template}': {message}")]
    RenderError {
        /// The template being rendered.
        template: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Core data models for the leave engine.
//!
//! This module contains the records held by the store and the report types
//! produced by the calculation layer.

mod employee;
mod holiday;
mod leave_balance;
mod leave_ledger;
mod leave_request;
mod letter;
mod student;

pub use employee::{Employee, EmployeeDraft, Gender, IdentityNumber, Religion};
pub use holiday::{Holiday, HolidayCalendar};
pub use leave_balance::{BalanceBuckets, LeaveBalance};
pub use leave_ledger::{LeaveLedger, LedgerEntry};
pub use leave_request::{LeaveLetterDetails, LeavePeriod, LeaveRequest, LeaveRequestDraft};
pub use letter::{
    ActivitySchedule, Letter, LetterDraft, LetterKind, Letterhead, LetterheadDraft,
};
pub use student::{Student, StudentDraft};

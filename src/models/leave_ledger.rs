//! Leave ledger report models.
//!
//! This module contains the [`LeaveLedger`] report produced by
//! [`crate::calculation::build_leave_ledger`]: one [`LedgerEntry`] per leave
//! request with the balance before and after it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the running balance ledger.
///
/// # Example
///
/// ```
/// use leave_engine::models::LedgerEntry;
/// use chrono::NaiveDate;
///
/// let entry = LedgerEntry {
///     request_id: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     effective_days: 5,
///     balance_before: 12,
///     balance_after: 7,
///     current_year_before: 12,
///     current_year_after: 7,
/// };
/// assert_eq!(entry.balance_before - entry.effective_days as i32, entry.balance_after);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The leave request this row describes.
    pub request_id: u64,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Business days consumed by the request.
    pub effective_days: u32,
    /// Total balance before the request (ATB).
    pub balance_before: i32,
    /// Total balance after the request (STB).
    pub balance_after: i32,
    /// Current-year bucket before the request.
    pub current_year_before: i32,
    /// Current-year bucket after the request.
    pub current_year_after: i32,
}

/// The running balance ledger of one employee.
///
/// A report only: building it never mutates the stored balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveLedger {
    /// The employee the ledger is for.
    pub employee_id: u64,
    /// Total balance before the first request.
    pub opening_balance: i32,
    /// Current-year bucket before the first request.
    pub opening_current_year: i32,
    /// One row per leave request, ordered by start date.
    pub entries: Vec<LedgerEntry>,
    /// Sum of effective days across all rows.
    pub total_days_taken: u32,
    /// Total balance after the last request.
    pub closing_balance: i32,
}

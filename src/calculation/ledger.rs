//! Running leave-balance ledger.
//!
//! The ledger is a fold over an employee's leave requests in start-date
//! order: each request's balance-before is the previous request's
//! balance-after. Nothing is persisted; the stored [`LeaveBalance`] is only
//! read for the opening figures.

use serde::{Deserialize, Serialize};

use crate::models::{
    HolidayCalendar, LeaveBalance, LeaveLedger, LeavePeriod, LeaveRequest, LedgerEntry,
};

use super::business_days::effective_leave_days;

/// The balance on either side of one leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceStep {
    /// Balance before the request is taken.
    pub before: i32,
    /// Balance after the request is taken.
    pub after: i32,
}

/// Folds a sequence of leave periods into before/after balance pairs.
///
/// # Arguments
///
/// * `periods` - Leave periods, already ordered by start date
/// * `initial_balance` - Balance before the first period
/// * `holidays` - Registered holidays
///
/// # Returns
///
/// One [`BalanceStep`] per period where `after = before - effective_days`
/// and each `before` equals the previous `after`. The subtraction saturates
/// at `i32::MIN`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{running_balance, BalanceStep};
/// use leave_engine::models::{HolidayCalendar, LeavePeriod};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let periods = vec![
///     LeavePeriod::new(date(12), date(16)).unwrap(), // 5 days
///     LeavePeriod::new(date(19), date(20)).unwrap(), // 2 days
/// ];
///
/// let steps = running_balance(&periods, 12, &HolidayCalendar::new());
/// assert_eq!(steps, vec![
///     BalanceStep { before: 12, after: 7 },
///     BalanceStep { before: 7, after: 5 },
/// ]);
/// ```
pub fn running_balance(
    periods: &[LeavePeriod],
    initial_balance: i32,
    holidays: &HolidayCalendar,
) -> Vec<BalanceStep> {
    periods
        .iter()
        .scan(initial_balance, |balance, period| {
            let before = *balance;
            let taken = i32::try_from(effective_leave_days(period, holidays)).unwrap_or(i32::MAX);
            let after = before.saturating_sub(taken);
            *balance = after;
            Some(BalanceStep { before, after })
        })
        .collect()
}

/// Builds the leave ledger report for one employee.
///
/// Requests are sorted by start date (stable, so requests starting the same
/// day keep their given order). The opening balance is the stored total, or
/// 0 when the employee has no balance record. The current-year bucket is
/// tracked alongside the total.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::build_leave_ledger;
/// use leave_engine::models::{BalanceBuckets, HolidayCalendar, LeaveBalance};
///
/// let balance = LeaveBalance::new(1, BalanceBuckets {
///     current_year: 12,
///     previous_year: 3,
///     two_years_prior: 0,
/// }).unwrap();
///
/// let ledger = build_leave_ledger(1, &[], Some(&balance), &HolidayCalendar::new());
/// assert_eq!(ledger.opening_balance, 15);
/// assert_eq!(ledger.closing_balance, 15);
/// assert!(ledger.entries.is_empty());
/// ```
pub fn build_leave_ledger(
    employee_id: u64,
    requests: &[LeaveRequest],
    balance: Option<&LeaveBalance>,
    holidays: &HolidayCalendar,
) -> LeaveLedger {
    let opening_balance = balance.map(LeaveBalance::total).unwrap_or(0);
    let opening_current_year = balance.map(|b| b.buckets().current_year).unwrap_or(0);

    let mut ordered: Vec<&LeaveRequest> = requests.iter().collect();
    ordered.sort_by_key(|r| r.period.start());

    let periods: Vec<LeavePeriod> = ordered.iter().map(|r| r.period).collect();
    let totals = running_balance(&periods, opening_balance, holidays);
    let current_year = running_balance(&periods, opening_current_year, holidays);

    let entries: Vec<LedgerEntry> = ordered
        .iter()
        .zip(totals.iter().zip(current_year.iter()))
        .map(|(request, (total, current))| LedgerEntry {
            request_id: request.id,
            start_date: request.period.start(),
            end_date: request.period.end(),
            effective_days: effective_leave_days(&request.period, holidays),
            balance_before: total.before,
            balance_after: total.after,
            current_year_before: current.before,
            current_year_after: current.after,
        })
        .collect();

    let total_days_taken = entries
        .iter()
        .fold(0u32, |sum, e| sum.saturating_add(e.effective_days));
    let closing_balance = entries
        .last()
        .map(|e| e.balance_after)
        .unwrap_or(opening_balance);

    LeaveLedger {
        employee_id,
        opening_balance,
        opening_current_year,
        entries,
        total_days_taken,
        closing_balance,
    }
}

//! Calculation logic for the leave engine.
//!
//! This module contains the business-day classifier, the effective
//! leave-day counter and the running balance ledger. Everything here is a
//! pure function of its inputs.

mod business_days;
mod ledger;

pub use business_days::{
    DayKind, calendar_days_inclusive, classify_day, count_effective_leave_days,
    effective_leave_days,
};
pub use ledger::{BalanceStep, build_leave_ledger, running_balance};

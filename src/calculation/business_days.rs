//! Business-day classification and effective leave-day counting.
//!
//! A day counts against leave when it is Monday through Friday and not a
//! registered holiday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayCalendar, LeavePeriod};

/// Monday-first index of the first weekend day (Saturday).
const FIRST_WEEKEND_INDEX: u32 = 5;

/// How a calendar day is treated for leave purposes.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::DayKind;
///
/// let kind = DayKind::Weekend;
/// assert_eq!(format!("{:?}", kind), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not a holiday. Consumes leave.
    Workday,
    /// Saturday or Sunday.
    Weekend,
    /// A registered holiday falling on a weekday.
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Workday => write!(f, "Workday"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a single date.
///
/// Weekends take precedence over holidays: a holiday on a Saturday is
/// reported as [`DayKind::Weekend`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{classify_day, DayKind};
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::new();
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(classify_day(saturday, &holidays), DayKind::Weekend);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(classify_day(monday, &holidays), DayKind::Workday);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &HolidayCalendar) -> DayKind {
    if date.weekday().num_days_from_monday() >= FIRST_WEEKEND_INDEX {
        DayKind::Weekend
    } else if holidays.contains(date) {
        DayKind::Holiday
    } else {
        DayKind::Workday
    }
}

/// Counts the effective leave days between two dates, inclusive.
///
/// # Arguments
///
/// * `start` - First day of leave, if known
/// * `end` - Last day of leave, if known
/// * `holidays` - Registered holidays
///
/// # Returns
///
/// The number of days in `start..=end` that are neither Saturday, Sunday nor
/// a holiday. Returns 0 when either date is absent or when `start > end`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::count_effective_leave_days;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
///
/// let none = HolidayCalendar::new();
/// assert_eq!(count_effective_leave_days(Some(monday), Some(friday), &none), 5);
///
/// let holidays: HolidayCalendar = [wednesday].into_iter().collect();
/// assert_eq!(count_effective_leave_days(Some(monday), Some(friday), &holidays), 4);
///
/// assert_eq!(count_effective_leave_days(None, Some(friday), &holidays), 0);
/// ```
pub fn count_effective_leave_days(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    holidays: &HolidayCalendar,
) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };

    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| classify_day(*day, holidays) == DayKind::Workday)
        .count();

    count as u32
}

/// Counts the effective leave days of a validated period.
pub fn effective_leave_days(period: &LeavePeriod, holidays: &HolidayCalendar) -> u32 {
    count_effective_leave_days(Some(period.start()), Some(period.end()), holidays)
}

/// Counts calendar days between two dates, inclusive of both ends.
///
/// Returns 0 when either date is absent. A reversed range yields
/// `(end - start) + 1`, which is zero or negative.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calendar_days_inclusive;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(calendar_days_inclusive(Some(start), Some(end)), 7);
/// ```
pub fn calendar_days_inclusive(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days() + 1,
        _ => 0,
    }
}

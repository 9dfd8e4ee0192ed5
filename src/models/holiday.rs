//! Holiday model and the holiday lookup set.
//!
//! This module contains the [`Holiday`] record and the [`HolidayCalendar`]
//! set that the business-day calculator consults.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered non-working day.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
///     name: "Hari Kemerdekaan".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday. Unique across the store.
    pub date: NaiveDate,
    /// The label of the holiday (e.g., "Hari Kemerdekaan").
    pub name: String,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}

/// A set of holiday dates.
///
/// Only membership matters to the calculator, so labels are dropped.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let independence_day = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
/// let calendar: HolidayCalendar = [independence_day].into_iter().collect();
/// assert!(calendar.contains(independence_day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from holiday records.
    pub fn from_holidays<'a>(holidays: impl IntoIterator<Item = &'a Holiday>) -> Self {
        holidays.into_iter().map(|h| h.date).collect()
    }

    /// Returns true if `date` is a registered holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Adds a date to the calendar.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Number of holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidayCalendar {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}

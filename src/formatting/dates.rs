//! Indonesian date and datetime formatting.
//!
//! Patterns use a small strftime-like vocabulary. Specifiers that are not
//! recognized are copied to the output unchanged.
//!
//! | Specifier | Date                 | Datetime    |
//! |-----------|----------------------|-------------|
//! | `%d`      | day, unpadded        | day, padded |
//! | `%m`      | month, padded        | same        |
//! | `%Y`      | four-digit year      | same        |
//! | `%y`      | two-digit year       | same        |
//! | `%B`      | month name           | same        |
//! | `%b`      | abbreviated month    | same        |
//! | `%A`      | weekday name         | same        |
//! | `%H %M %S`| not recognized       | time fields |

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Indonesian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Abbreviated Indonesian month names, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Indonesian weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// Pattern used in letters: "05 Januari 2026".
pub const LONG_DATE: &str = "%d %B %Y";

/// Formats a date with Indonesian month and weekday names.
///
/// `%d` is not zero-padded here; use [`format_long_date`] for the padded
/// form used in letters.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// assert_eq!(format_date(date, "%d %B %Y"), "5 Agustus 2026");
/// assert_eq!(format_date(date, "%A, %d/%m/%y"), "Rabu, 5/08/26");
/// ```
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    render(date, None, pattern, false)
}

/// Formats a datetime with Indonesian month and weekday names.
///
/// `%d` is zero-padded and `%H`, `%M`, `%S` are available.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::format_datetime;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2026, 3, 2)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(format_datetime(dt, "%d %b %Y %H:%M"), "02 Mar 2026 09:05");
/// ```
pub fn format_datetime(datetime: NaiveDateTime, pattern: &str) -> String {
    render(datetime.date(), Some(datetime), pattern, true)
}

/// Formats a date as "05 Januari 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    render(date, None, LONG_DATE, true)
}

fn render(date: NaiveDate, time: Option<NaiveDateTime>, pattern: &str, pad_day: bool) -> String {
    let month = date.month0() as usize;
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(spec) = chars.next() else {
            out.push('%');
            break;
        };
        match (spec, time) {
            ('d', _) if pad_day => out.push_str(&format!("{:02}", date.day())),
            ('d', _) => out.push_str(&date.day().to_string()),
            ('m', _) => out.push_str(&format!("{:02}", date.month())),
            ('Y', _) => out.push_str(&date.year().to_string()),
            ('y', _) => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            ('B', _) => out.push_str(MONTH_NAMES[month]),
            ('b', _) => out.push_str(MONTH_ABBREVIATIONS[month]),
            ('A', _) => {
                out.push_str(WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize])
            }
            ('H', Some(t)) => out.push_str(&format!("{:02}", t.hour())),
            ('M', Some(t)) => out.push_str(&format!("{:02}", t.minute())),
            ('S', Some(t)) => out.push_str(&format!("{:02}", t.second())),
            (other, _) => {
                out.push('%');
                out.push(other);
            }
        }
    }

    out
}

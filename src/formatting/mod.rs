//! Indonesian text formatting for letters and reports.
//!
//! - [`spell_number`]: number-to-words ("terbilang")
//! - [`format_date`] / [`format_datetime`]: dates with Indonesian month and
//!   weekday names
//! - [`leave_duration_text`] / [`safe_filename`]: leave letter wording

mod dates;
mod leave_text;
mod numerals;

pub use dates::{
    LONG_DATE, MONTH_ABBREVIATIONS, MONTH_NAMES, WEEKDAY_NAMES, format_date, format_datetime,
    format_long_date,
};
pub use leave_text::{leave_duration_text, safe_filename};
pub use numerals::{SPELLING_LIMIT, spell_number};

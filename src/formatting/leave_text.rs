//! Sentences and file names used in leave letters.

use chrono::NaiveDate;

use super::dates::format_long_date;
use super::numerals::spell_number;

/// Describes a leave period in the wording of an official leave letter.
///
/// The end date is only mentioned when it differs from the start date.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::leave_duration_text;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
///
/// assert_eq!(
///     leave_duration_text(5, start, end),
///     "selama 5 (lima) hari kerja, terhitung mulai tanggal 12 Januari 2026 \
///      sampai dengan tanggal 16 Januari 2026"
/// );
/// assert_eq!(
///     leave_duration_text(1, start, start),
///     "selama 1 (satu) hari kerja, terhitung mulai tanggal 12 Januari 2026"
/// );
/// ```
pub fn leave_duration_text(effective_days: u32, start: NaiveDate, end: NaiveDate) -> String {
    let mut text = format!(
        "selama {} ({}) hari kerja, terhitung mulai tanggal {}",
        effective_days,
        spell_number(u64::from(effective_days)),
        format_long_date(start)
    );
    if end != start {
        text.push_str(" sampai dengan tanggal ");
        text.push_str(&format_long_date(end));
    }
    text
}

/// Builds a download file name of the form `<prefix>_<name>.pdf`.
///
/// Only ASCII alphanumerics, spaces, `-` and `_` survive from `name`, and
/// trailing whitespace is dropped.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::safe_filename;
///
/// assert_eq!(safe_filename("surat_cuti", "Siti Aminah, S.Pd."), "surat_cuti_Siti Aminah SPd.pdf");
/// ```
pub fn safe_filename(prefix: &str, name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    format!("{}_{}.pdf", prefix, cleaned.trim_end())
}

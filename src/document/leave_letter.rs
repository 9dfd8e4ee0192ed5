//! Context for the leave letter (surat cuti).

use serde::{Deserialize, Serialize};

use crate::calculation::{calendar_days_inclusive, effective_leave_days};
use crate::config::OfficeConfig;
use crate::formatting::{format_long_date, leave_duration_text, safe_filename, spell_number};
use crate::models::{Employee, HolidayCalendar, LeaveRequest};

use super::Document;
use super::signer::SignerInfo;

/// File name prefix of rendered leave letters.
pub const LEAVE_LETTER_PREFIX: &str = "surat_cuti";

/// Everything the leave letter template prints.
///
/// The day count and sentences are computed when the context is assembled,
/// against the holidays registered at that moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveLetterDocument {
    /// Download file name.
    pub filename: String,
    /// The issuing office.
    pub office: OfficeConfig,
    /// The leave request.
    pub request: LeaveRequest,
    /// The employee taking leave.
    pub employee: Employee,
    /// Who signs the letter, if one was chosen.
    pub signer: Option<SignerInfo>,
    /// Business days consumed.
    pub effective_days: u32,
    /// `effective_days` in words.
    pub effective_days_words: String,
    /// Calendar days covered, both ends included.
    pub calendar_days: i64,
    /// "selama N (...) hari kerja, terhitung mulai tanggal ..."
    pub duration_text: String,
    /// First day of leave, e.g. "02 Februari 2026".
    pub start_date_text: String,
    /// Last day of leave.
    pub end_date_text: String,
    /// Date of issue, if set.
    pub letter_date_text: Option<String>,
    /// Place of issue, defaulting to the office city.
    pub place_of_issue: String,
    /// Letterhead image as a data URI.
    pub letterhead_image: Option<String>,
}

impl LeaveLetterDocument {
    /// Assembles the letter context for one request.
    ///
    /// # Arguments
    ///
    /// * `request` - The leave request
    /// * `employee` - The employee the request belongs to
    /// * `signer` - The employee named as signer, if any
    /// * `letterhead_image` - The letterhead as a data URI, if any
    /// * `holidays` - Registered holidays
    /// * `office` - The issuing office
    pub fn assemble(
        request: LeaveRequest,
        employee: Employee,
        signer: Option<&Employee>,
        letterhead_image: Option<String>,
        holidays: &HolidayCalendar,
        office: &OfficeConfig,
    ) -> Self {
        let period = request.period;
        let effective_days = effective_leave_days(&period, holidays);

        let place_of_issue = request
            .letter
            .place_of_issue
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| office.city.clone());

        Self {
            filename: safe_filename(LEAVE_LETTER_PREFIX, employee.name()),
            office: office.clone(),
            signer: signer.map(SignerInfo::from),
            effective_days,
            effective_days_words: spell_number(u64::from(effective_days)),
            calendar_days: calendar_days_inclusive(Some(period.start()), Some(period.end())),
            duration_text: leave_duration_text(effective_days, period.start(), period.end()),
            start_date_text: format_long_date(period.start()),
            end_date_text: format_long_date(period.end()),
            letter_date_text: request.letter.letter_date.map(format_long_date),
            place_of_issue,
            letterhead_image,
            request,
            employee,
        }
    }
}

impl Document for LeaveLetterDocument {
    fn template(&self) -> &'static str {
        "surat_cuti"
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}

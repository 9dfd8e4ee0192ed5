//! Leave request model.
//!
//! A leave request doubles as the data behind a leave letter (surat cuti):
//! besides the leave period it carries the letter metadata a renderer needs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range with `end >= start`.
///
/// The ordering check happens here, at input time. The calculator itself
/// accepts any pair of dates.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeavePeriod;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
///
/// let period = LeavePeriod::new(monday, friday).unwrap();
/// assert_eq!(period.start(), monday);
/// assert!(LeavePeriod::new(friday, monday).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLeavePeriod")]
pub struct LeavePeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawLeavePeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawLeavePeriod> for LeavePeriod {
    type Error = EngineError;

    fn try_from(raw: RawLeavePeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl LeavePeriod {
    /// Creates a period, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidLeaveRequest {
                message: format!(
                    "end date {} is before start date {}",
                    end_date, start_date
                ),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// First day of leave.
    pub fn start(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of leave (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns true if the leave is a single day.
    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }
}

/// Letter metadata attached to a leave request.
///
/// Every field is optional; the document layer falls back to office defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveLetterDetails {
    /// Letter number (nomor surat).
    pub letter_number: Option<String>,
    /// Nature of the letter (sifat), e.g. "Biasa".
    pub nature: Option<String>,
    /// Attachment note (lampiran).
    pub attachment: Option<String>,
    /// Subject line (perihal).
    pub subject: Option<String>,
    /// Addressee (tujuan surat).
    pub addressee: Option<String>,
    /// Place of issue (tempat ditetapkan).
    pub place_of_issue: Option<String>,
    /// Date of issue.
    pub letter_date: Option<NaiveDate>,
    /// Signing employee.
    pub signer_id: Option<u64>,
    /// Letterhead to print on the letter.
    pub letterhead_id: Option<u64>,
}

/// The input for creating a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestDraft {
    /// The leave period.
    #[serde(flatten)]
    pub period: LeavePeriod,
    /// Reason for the leave (alasan cuti).
    #[serde(default)]
    pub reason: Option<String>,
    /// Letter metadata.
    #[serde(default)]
    pub letter: LeaveLetterDetails,
}

/// A stored leave request belonging to exactly one employee.
///
/// The effective leave-day count is never stored; see
/// [`crate::calculation::count_effective_leave_days`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Store-assigned identifier.
    pub id: u64,
    /// The employee taking leave.
    pub employee_id: u64,
    /// The leave period.
    #[serde(flatten)]
    pub period: LeavePeriod,
    /// Reason for the leave.
    pub reason: Option<String>,
    /// Letter metadata.
    pub letter: LeaveLetterDetails,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

//! Request types for the leave engine API.
//!
//! Record payloads reuse the model drafts (`EmployeeDraft`,
//! `LeaveRequestDraft`, `LetterDraft`, ...); the types here cover the
//! endpoints whose input has no model counterpart.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{BalanceBuckets, LetterKind};

/// Body of `POST`/`PUT /employees/:id/leave-balance`.
///
/// A missing `current_year` defaults to the configured annual allowance.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveBalanceRequest {
    /// Remaining days from the current year.
    #[serde(default)]
    pub current_year: Option<i32>,
    /// Remaining days carried over from last year.
    #[serde(default)]
    pub previous_year: i32,
    /// Remaining days carried over from two years ago.
    #[serde(default)]
    pub two_years_prior: i32,
}

impl LeaveBalanceRequest {
    /// Resolves the buckets, filling the current year from `annual_allowance`.
    pub fn into_buckets(self, annual_allowance: i32) -> BalanceBuckets {
        BalanceBuckets {
            current_year: self.current_year.unwrap_or(annual_allowance),
            previous_year: self.previous_year,
            two_years_prior: self.two_years_prior,
        }
    }
}

/// Body of `POST /leave-days`.
///
/// Both dates are optional; the count is 0 unless both are given.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveDaysRequest {
    /// First day of the range.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the range.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Holidays to consider in addition to the registered ones.
    #[serde(default)]
    pub extra_holidays: Vec<NaiveDate>,
    /// Whether registered holidays are consulted.
    #[serde(default = "default_true")]
    pub use_registered_holidays: bool,
}

fn default_true() -> bool {
    true
}

/// Query of `GET /letters`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LetterListQuery {
    /// Only letters of this kind.
    pub kind: Option<LetterKind>,
}

/// Query of `GET /students`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    /// Case-insensitive substring of the student name.
    pub q: Option<String>,
}

/// Query of `GET /employees/:id/leave-report`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveReportQuery {
    /// Signing employee; defaults to the first holder of the configured
    /// signer position.
    pub signer_id: Option<u64>,
}

//! Leave balance model.
//!
//! A [`LeaveBalance`] holds three year-bucketed balances for one employee and
//! a total that is always their sum. The total has no setter: every
//! construction and update path recomputes it, and deserialization ignores
//! any incoming total. Buckets whose sum does not fit an `i32` are rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The three year buckets of a leave balance.
///
/// # Example
///
/// ```
/// use leave_engine::models::BalanceBuckets;
///
/// let buckets = BalanceBuckets { current_year: 12, previous_year: 6, two_years_prior: 0 };
/// assert_eq!(buckets.checked_sum(), Some(18));
///
/// let huge = BalanceBuckets { current_year: i32::MAX, previous_year: 1, two_years_prior: 0 };
/// assert_eq!(huge.checked_sum(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBuckets {
    /// Remaining days from the current year (sisa tahun N).
    pub current_year: i32,
    /// Remaining days carried over from last year (sisa tahun N-1).
    #[serde(default)]
    pub previous_year: i32,
    /// Remaining days carried over from two years ago (sisa tahun N-2).
    #[serde(default)]
    pub two_years_prior: i32,
}

impl BalanceBuckets {
    /// Sum of the three buckets, or `None` if it overflows.
    pub fn checked_sum(&self) -> Option<i32> {
        self.current_year
            .checked_add(self.previous_year)?
            .checked_add(self.two_years_prior)
    }

    fn total(&self) -> EngineResult<i32> {
        self.checked_sum().ok_or_else(|| EngineError::InvalidLeaveBalance {
            message: format!(
                "buckets {} + {} + {} exceed the supported range",
                self.current_year, self.previous_year, self.two_years_prior
            ),
        })
    }
}

/// The leave balance of one employee.
///
/// # Example
///
/// ```
/// use leave_engine::models::{BalanceBuckets, LeaveBalance};
///
/// let mut balance = LeaveBalance::new(7, BalanceBuckets {
///     current_year: 12,
///     previous_year: 4,
///     two_years_prior: 2,
/// }).unwrap();
/// assert_eq!(balance.total(), 18);
///
/// let buckets = BalanceBuckets { current_year: 10, previous_year: 4, two_years_prior: 0 };
/// balance.update(buckets).unwrap();
/// assert_eq!(balance.total(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLeaveBalance")]
pub struct LeaveBalance {
    employee_id: u64,
    #[serde(flatten)]
    buckets: BalanceBuckets,
    total: i32,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawLeaveBalance {
    employee_id: u64,
    #[serde(flatten)]
    buckets: BalanceBuckets,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawLeaveBalance> for LeaveBalance {
    type Error = EngineError;

    fn try_from(raw: RawLeaveBalance) -> Result<Self, Self::Error> {
        let mut balance = LeaveBalance::new(raw.employee_id, raw.buckets)?;
        if let Some(updated_at) = raw.updated_at {
            balance.updated_at = updated_at;
        }
        Ok(balance)
    }
}

impl LeaveBalance {
    /// Creates a balance, deriving the total from the buckets.
    pub fn new(employee_id: u64, buckets: BalanceBuckets) -> EngineResult<Self> {
        Ok(Self {
            employee_id,
            total: buckets.total()?,
            buckets,
            updated_at: Utc::now(),
        })
    }

    /// Replaces the buckets and recomputes the total.
    ///
    /// On error the balance is left unchanged.
    pub fn update(&mut self, buckets: BalanceBuckets) -> EngineResult<()> {
        self.total = buckets.total()?;
        self.buckets = buckets;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// The employee this balance belongs to.
    pub fn employee_id(&self) -> u64 {
        self.employee_id
    }

    /// The year buckets.
    pub fn buckets(&self) -> BalanceBuckets {
        self.buckets
    }

    /// The total remaining leave, always the sum of the buckets.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// When the balance was last written.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

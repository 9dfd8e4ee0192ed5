//! Record storage for employees, students, holidays, leave and letters.
//!
//! [`RecordStore`] is the seam between the HTTP layer and persistence. The
//! crate ships [`InMemoryStore`]; a database-backed store would implement the
//! same trait.

mod memory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    BalanceBuckets, Employee, EmployeeDraft, Holiday, HolidayCalendar, LeaveBalance,
    LeaveRequest, LeaveRequestDraft, Letter, LetterDraft, LetterKind, Letterhead,
    LetterheadDraft, Student, StudentDraft,
};

pub use memory::InMemoryStore;

/// Default page size for employee listings.
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Filter and pagination for employee listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeQuery {
    /// Case-insensitive substring of the employee name.
    pub q: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page, clamped to `1..=MAX_PER_PAGE`.
    pub per_page: Option<u32>,
}

impl EmployeeQuery {
    /// The requested page, at least 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// The requested page size after clamping.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Page size used.
    pub per_page: u32,
    /// Number of matching items across all pages.
    pub total: usize,
}

/// Persistence operations used by the service.
///
/// Lookups of missing records return the matching `*NotFound` error. Write
/// operations check references: a leave request, balance or letter naming an
/// unknown employee, student or letterhead is rejected.
pub trait RecordStore {
    /// Registers an employee. The identity number must be unused.
    fn create_employee(&mut self, draft: EmployeeDraft) -> EngineResult<Employee>;

    /// Fetches one employee.
    fn employee(&self, id: u64) -> EngineResult<Employee>;

    /// Lists employees ordered by name, filtered and paginated.
    fn list_employees(&self, query: &EmployeeQuery) -> Page<Employee>;

    /// Replaces an employee's editable fields.
    fn update_employee(&mut self, id: u64, draft: EmployeeDraft) -> EngineResult<Employee>;

    /// Deletes an employee together with their leave requests and balance,
    /// and drops every reference other records hold to them.
    fn delete_employee(&mut self, id: u64) -> EngineResult<Employee>;

    /// First employee, in name order, whose position contains `keyword`.
    fn find_by_position(&self, keyword: &str) -> Option<Employee>;

    /// Registers a holiday. The date must be unused.
    fn add_holiday(&mut self, holiday: Holiday) -> EngineResult<Holiday>;

    /// All holidays ordered by date.
    fn holidays(&self) -> Vec<Holiday>;

    /// Replaces the holiday on `date`. Moving it onto a date that already
    /// holds another holiday fails.
    fn update_holiday(&mut self, date: NaiveDate, holiday: Holiday) -> EngineResult<Holiday>;

    /// Removes the holiday on `date`.
    fn remove_holiday(&mut self, date: NaiveDate) -> EngineResult<Holiday>;

    /// The holiday dates as a lookup set.
    fn holiday_calendar(&self) -> HolidayCalendar;

    /// Files a leave request for an employee.
    fn create_leave_request(
        &mut self,
        employee_id: u64,
        draft: LeaveRequestDraft,
    ) -> EngineResult<LeaveRequest>;

    /// Fetches one leave request.
    fn leave_request(&self, id: u64) -> EngineResult<LeaveRequest>;

    /// An employee's leave requests ordered by start date.
    fn leave_requests_for(&self, employee_id: u64) -> EngineResult<Vec<LeaveRequest>>;

    /// Replaces a leave request's period, reason and letter metadata. The
    /// owning employee never changes.
    fn update_leave_request(
        &mut self,
        id: u64,
        draft: LeaveRequestDraft,
    ) -> EngineResult<LeaveRequest>;

    /// Deletes a leave request.
    fn delete_leave_request(&mut self, id: u64) -> EngineResult<LeaveRequest>;

    /// Creates an employee's balance. Fails if one already exists.
    fn create_leave_balance(
        &mut self,
        employee_id: u64,
        buckets: BalanceBuckets,
    ) -> EngineResult<LeaveBalance>;

    /// Creates or replaces an employee's balance.
    fn put_leave_balance(
        &mut self,
        employee_id: u64,
        buckets: BalanceBuckets,
    ) -> EngineResult<LeaveBalance>;

    /// An employee's balance, if one has been recorded.
    fn leave_balance(&self, employee_id: u64) -> EngineResult<Option<LeaveBalance>>;

    /// Registers a letterhead.
    fn create_letterhead(&mut self, draft: LetterheadDraft) -> EngineResult<Letterhead>;

    /// Fetches one letterhead.
    fn letterhead(&self, id: u64) -> EngineResult<Letterhead>;

    /// All letterheads ordered by id.
    fn letterheads(&self) -> Vec<Letterhead>;

    /// Replaces a letterhead's fields.
    fn update_letterhead(&mut self, id: u64, draft: LetterheadDraft) -> EngineResult<Letterhead>;

    /// Deletes a letterhead and clears references to it.
    fn delete_letterhead(&mut self, id: u64) -> EngineResult<Letterhead>;

    /// Stores a letter.
    fn create_letter(&mut self, draft: LetterDraft) -> EngineResult<Letter>;

    /// Fetches one letter.
    fn letter(&self, id: u64) -> EngineResult<Letter>;

    /// Letters, newest issue date first, optionally of one kind.
    fn list_letters(&self, kind: Option<LetterKind>) -> Vec<Letter>;

    /// Replaces a letter's editable fields.
    fn update_letter(&mut self, id: u64, draft: LetterDraft) -> EngineResult<Letter>;

    /// Deletes a letter.
    fn delete_letter(&mut self, id: u64) -> EngineResult<Letter>;

    /// Registers a student.
    fn create_student(&mut self, draft: StudentDraft) -> EngineResult<Student>;

    /// Fetches one student.
    fn student(&self, id: u64) -> EngineResult<Student>;

    /// Students ordered by name, optionally filtered by a case-insensitive
    /// name substring.
    fn list_students(&self, q: Option<&str>) -> Vec<Student>;

    /// Replaces a student's editable fields.
    fn update_student(&mut self, id: u64, draft: StudentDraft) -> EngineResult<Student>;

    /// Deletes a student and clears the letters that reference them.
    fn delete_student(&mut self, id: u64) -> EngineResult<Student>;
}

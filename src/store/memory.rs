//! In-memory [`RecordStore`].

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BalanceBuckets, Employee, EmployeeDraft, Holiday, HolidayCalendar, IdentityNumber,
    LeaveBalance, LeaveRequest, LeaveRequestDraft, Letter, LetterDraft, LetterKind, Letterhead,
    LetterheadDraft, Student, StudentDraft,
};

use super::{EmployeeQuery, Page, RecordStore};

/// A [`RecordStore`] backed by ordered maps.
///
/// Ids are sequential per record type and never reused. Wrap it in a lock
/// to share it between tasks.
///
/// # Example
///
/// ```
/// use leave_engine::store::{InMemoryStore, RecordStore};
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryStore::new();
/// store.add_holiday(Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
///     name: "Hari Kemerdekaan".to_string(),
/// }).unwrap();
/// assert_eq!(store.holiday_calendar().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: BTreeMap<u64, Employee>,
    holidays: BTreeMap<NaiveDate, Holiday>,
    leave_requests: BTreeMap<u64, LeaveRequest>,
    balances: BTreeMap<u64, LeaveBalance>,
    letterheads: BTreeMap<u64, Letterhead>,
    letters: BTreeMap<u64, Letter>,
    students: BTreeMap<u64, Student>,
    next_employee_id: u64,
    next_leave_request_id: u64,
    next_letterhead_id: u64,
    next_letter_id: u64,
    next_student_id: u64,
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

/// Lowercased search term, or `None` when the query is blank.
fn name_filter(q: Option<&str>) -> Option<String> {
    q.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase)
}

fn matches_name(name: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| name.to_lowercase().contains(needle))
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with holidays.
    ///
    /// Later entries with an already-seen date are skipped.
    pub fn with_holidays<'a>(holidays: impl IntoIterator<Item = &'a Holiday>) -> Self {
        let mut store = Self::new();
        for holiday in holidays {
            store
                .holidays
                .entry(holiday.date)
                .or_insert_with(|| holiday.clone());
        }
        store
    }

    fn require_employee(&self, id: u64) -> EngineResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    fn require_letterhead(&self, id: u64) -> EngineResult<()> {
        if self.letterheads.contains_key(&id) {
            Ok(())
        } else {
            Err(EngineError::LetterheadNotFound { id })
        }
    }

    /// Fails if another employee already holds `nip`.
    fn check_nip_unused(
        &self,
        nip: Option<&IdentityNumber>,
        except: Option<u64>,
    ) -> EngineResult<()> {
        let Some(nip) = nip else {
            return Ok(());
        };
        let taken = self
            .employees
            .values()
            .any(|e| Some(e.id) != except && e.details.nip.as_ref() == Some(nip));
        if taken {
            return Err(EngineError::DuplicateIdentityNumber {
                nip: nip.to_string(),
            });
        }
        Ok(())
    }

    fn require_student(&self, id: u64) -> EngineResult<&Student> {
        self.students
            .get(&id)
            .ok_or(EngineError::StudentNotFound { id })
    }

    fn check_leave_references(&self, draft: &LeaveRequestDraft) -> EngineResult<()> {
        if let Some(signer_id) = draft.letter.signer_id {
            self.require_employee(signer_id)?;
        }
        if let Some(letterhead_id) = draft.letter.letterhead_id {
            self.require_letterhead(letterhead_id)?;
        }
        Ok(())
    }

    fn check_letter_references(&self, draft: &LetterDraft) -> EngineResult<()> {
        if let Some(signer_id) = draft.signer_id {
            self.require_employee(signer_id)?;
        }
        for participant_id in &draft.participant_ids {
            self.require_employee(*participant_id)?;
        }
        if let Some(letterhead_id) = draft.letterhead_id {
            self.require_letterhead(letterhead_id)?;
        }
        if let Some(student_id) = draft.student_id {
            self.require_student(student_id)?;
        }
        Ok(())
    }

    fn employees_by_name(&self) -> Vec<&Employee> {
        let mut employees: Vec<&Employee> = self.employees.values().collect();
        employees.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        employees
    }
}

impl RecordStore for InMemoryStore {
    fn create_employee(&mut self, draft: EmployeeDraft) -> EngineResult<Employee> {
        draft.validate()?;
        self.check_nip_unused(draft.nip.as_ref(), None)?;

        let now = Utc::now();
        let employee = Employee {
            id: next_id(&mut self.next_employee_id),
            details: draft,
            created_at: now,
            updated_at: now,
        };
        info!(employee_id = employee.id, name = %employee.name(), "Employee created");
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn employee(&self, id: u64) -> EngineResult<Employee> {
        self.require_employee(id).cloned()
    }

    fn list_employees(&self, query: &EmployeeQuery) -> Page<Employee> {
        let needle = name_filter(query.q.as_deref());
        let matching: Vec<&Employee> = self
            .employees_by_name()
            .into_iter()
            .filter(|e| matches_name(e.name(), needle.as_deref()))
            .collect();

        let page = query.page();
        let per_page = query.per_page();
        let offset = (page as usize - 1) * per_page as usize;

        Page {
            total: matching.len(),
            data: matching
                .into_iter()
                .skip(offset)
                .take(per_page as usize)
                .cloned()
                .collect(),
            page,
            per_page,
        }
    }

    fn update_employee(&mut self, id: u64, draft: EmployeeDraft) -> EngineResult<Employee> {
        self.require_employee(id)?;
        draft.validate()?;
        self.check_nip_unused(draft.nip.as_ref(), Some(id))?;

        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        employee.details = draft;
        employee.updated_at = Utc::now();
        info!(employee_id = id, "Employee updated");
        Ok(employee.clone())
    }

    fn delete_employee(&mut self, id: u64) -> EngineResult<Employee> {
        let employee = self
            .employees
            .remove(&id)
            .ok_or(EngineError::EmployeeNotFound { id })?;

        let requests_before = self.leave_requests.len();
        self.leave_requests.retain(|_, r| r.employee_id != id);
        let removed_requests = requests_before - self.leave_requests.len();
        let removed_balance = self.balances.remove(&id).is_some();

        for request in self.leave_requests.values_mut() {
            if request.letter.signer_id == Some(id) {
                request.letter.signer_id = None;
            }
        }
        for letter in self.letters.values_mut() {
            letter.details.participant_ids.retain(|p| *p != id);
            if letter.details.signer_id == Some(id) {
                letter.details.signer_id = None;
            }
        }

        info!(
            employee_id = id,
            removed_requests,
            removed_balance,
            "Employee deleted"
        );
        Ok(employee)
    }

    fn find_by_position(&self, keyword: &str) -> Option<Employee> {
        self.employees_by_name()
            .into_iter()
            .find(|e| e.holds_position(keyword))
            .cloned()
    }

    fn add_holiday(&mut self, holiday: Holiday) -> EngineResult<Holiday> {
        if self.holidays.contains_key(&holiday.date) {
            return Err(EngineError::DuplicateHoliday { date: holiday.date });
        }
        info!(date = %holiday.date, name = %holiday.name, "Holiday added");
        self.holidays.insert(holiday.date, holiday.clone());
        Ok(holiday)
    }

    fn holidays(&self) -> Vec<Holiday> {
        self.holidays.values().cloned().collect()
    }

    fn update_holiday(&mut self, date: NaiveDate, holiday: Holiday) -> EngineResult<Holiday> {
        if !self.holidays.contains_key(&date) {
            return Err(EngineError::HolidayNotFound { date });
        }
        if holiday.date != date && self.holidays.contains_key(&holiday.date) {
            return Err(EngineError::DuplicateHoliday { date: holiday.date });
        }
        self.holidays.remove(&date);
        info!(from = %date, date = %holiday.date, name = %holiday.name, "Holiday updated");
        self.holidays.insert(holiday.date, holiday.clone());
        Ok(holiday)
    }

    fn remove_holiday(&mut self, date: NaiveDate) -> EngineResult<Holiday> {
        let holiday = self
            .holidays
            .remove(&date)
            .ok_or(EngineError::HolidayNotFound { date })?;
        info!(date = %date, "Holiday removed");
        Ok(holiday)
    }

    fn holiday_calendar(&self) -> HolidayCalendar {
        self.holidays.keys().copied().collect()
    }

    fn create_leave_request(
        &mut self,
        employee_id: u64,
        draft: LeaveRequestDraft,
    ) -> EngineResult<LeaveRequest> {
        self.require_employee(employee_id)?;
        self.check_leave_references(&draft)?;

        let now = Utc::now();
        let request = LeaveRequest {
            id: next_id(&mut self.next_leave_request_id),
            employee_id,
            period: draft.period,
            reason: draft.reason,
            letter: draft.letter,
            created_at: now,
            updated_at: now,
        };
        info!(
            leave_request_id = request.id,
            employee_id,
            start_date = %request.period.start(),
            end_date = %request.period.end(),
            "Leave request created"
        );
        self.leave_requests.insert(request.id, request.clone());
        Ok(request)
    }

    fn leave_request(&self, id: u64) -> EngineResult<LeaveRequest> {
        self.leave_requests
            .get(&id)
            .cloned()
            .ok_or(EngineError::LeaveRequestNotFound { id })
    }

    fn leave_requests_for(&self, employee_id: u64) -> EngineResult<Vec<LeaveRequest>> {
        self.require_employee(employee_id)?;
        let mut requests: Vec<LeaveRequest> = self
            .leave_requests
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        requests.sort_by_key(|r| (r.period.start(), r.id));
        Ok(requests)
    }

    fn update_leave_request(
        &mut self,
        id: u64,
        draft: LeaveRequestDraft,
    ) -> EngineResult<LeaveRequest> {
        self.leave_request(id)?;
        self.check_leave_references(&draft)?;

        let request = self
            .leave_requests
            .get_mut(&id)
            .ok_or(EngineError::LeaveRequestNotFound { id })?;
        request.period = draft.period;
        request.reason = draft.reason;
        request.letter = draft.letter;
        request.updated_at = Utc::now();
        info!(
            leave_request_id = id,
            start_date = %request.period.start(),
            end_date = %request.period.end(),
            "Leave request updated"
        );
        Ok(request.clone())
    }

    fn delete_leave_request(&mut self, id: u64) -> EngineResult<LeaveRequest> {
        let request = self
            .leave_requests
            .remove(&id)
            .ok_or(EngineError::LeaveRequestNotFound { id })?;
        info!(leave_request_id = id, "Leave request deleted");
        Ok(request)
    }

    fn create_leave_balance(
        &mut self,
        employee_id: u64,
        buckets: BalanceBuckets,
    ) -> EngineResult<LeaveBalance> {
        self.require_employee(employee_id)?;
        if self.balances.contains_key(&employee_id) {
            return Err(EngineError::DuplicateLeaveBalance { employee_id });
        }
        let balance = LeaveBalance::new(employee_id, buckets)?;
        info!(employee_id, total = balance.total(), "Leave balance created");
        self.balances.insert(employee_id, balance.clone());
        Ok(balance)
    }

    fn put_leave_balance(
        &mut self,
        employee_id: u64,
        buckets: BalanceBuckets,
    ) -> EngineResult<LeaveBalance> {
        self.require_employee(employee_id)?;
        let balance = match self.balances.get_mut(&employee_id) {
            Some(balance) => {
                balance.update(buckets)?;
                balance.clone()
            }
            None => {
                let balance = LeaveBalance::new(employee_id, buckets)?;
                self.balances.insert(employee_id, balance.clone());
                balance
            }
        };
        info!(employee_id, total = balance.total(), "Leave balance saved");
        Ok(balance)
    }

    fn leave_balance(&self, employee_id: u64) -> EngineResult<Option<LeaveBalance>> {
        self.require_employee(employee_id)?;
        Ok(self.balances.get(&employee_id).cloned())
    }

    fn create_letterhead(&mut self, draft: LetterheadDraft) -> EngineResult<Letterhead> {
        let letterhead = Letterhead {
            id: next_id(&mut self.next_letterhead_id),
            name: draft.name,
            image_path: draft.image_path,
            description: draft.description,
        };
        info!(letterhead_id = letterhead.id, name = %letterhead.name, "Letterhead created");
        self.letterheads.insert(letterhead.id, letterhead.clone());
        Ok(letterhead)
    }

    fn letterhead(&self, id: u64) -> EngineResult<Letterhead> {
        self.letterheads
            .get(&id)
            .cloned()
            .ok_or(EngineError::LetterheadNotFound { id })
    }

    fn letterheads(&self) -> Vec<Letterhead> {
        self.letterheads.values().cloned().collect()
    }

    fn update_letterhead(&mut self, id: u64, draft: LetterheadDraft) -> EngineResult<Letterhead> {
        let letterhead = self
            .letterheads
            .get_mut(&id)
            .ok_or(EngineError::LetterheadNotFound { id })?;
        letterhead.name = draft.name;
        letterhead.image_path = draft.image_path;
        letterhead.description = draft.description;
        info!(letterhead_id = id, name = %letterhead.name, "Letterhead updated");
        Ok(letterhead.clone())
    }

    fn delete_letterhead(&mut self, id: u64) -> EngineResult<Letterhead> {
        let letterhead = self
            .letterheads
            .remove(&id)
            .ok_or(EngineError::LetterheadNotFound { id })?;

        for letter in self.letters.values_mut() {
            if letter.details.letterhead_id == Some(id) {
                letter.details.letterhead_id = None;
            }
        }
        for request in self.leave_requests.values_mut() {
            if request.letter.letterhead_id == Some(id) {
                request.letter.letterhead_id = None;
            }
        }
        info!(letterhead_id = id, "Letterhead deleted");
        Ok(letterhead)
    }

    fn create_letter(&mut self, draft: LetterDraft) -> EngineResult<Letter> {
        draft.validate()?;
        self.check_letter_references(&draft)?;

        let now = Utc::now();
        let letter = Letter {
            id: next_id(&mut self.next_letter_id),
            details: draft,
            created_at: now,
            updated_at: now,
        };
        info!(
            letter_id = letter.id,
            kind = ?letter.details.kind,
            number = %letter.details.number,
            "Letter created"
        );
        self.letters.insert(letter.id, letter.clone());
        Ok(letter)
    }

    fn letter(&self, id: u64) -> EngineResult<Letter> {
        self.letters
            .get(&id)
            .cloned()
            .ok_or(EngineError::LetterNotFound { id })
    }

    fn list_letters(&self, kind: Option<LetterKind>) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self
            .letters
            .values()
            .filter(|l| kind.is_none_or(|k| l.details.kind == k))
            .cloned()
            .collect();
        letters.sort_by(|a, b| {
            b.details
                .issued_on
                .cmp(&a.details.issued_on)
                .then(b.id.cmp(&a.id))
        });
        letters
    }

    fn update_letter(&mut self, id: u64, draft: LetterDraft) -> EngineResult<Letter> {
        self.letter(id)?;
        draft.validate()?;
        self.check_letter_references(&draft)?;

        let letter = self
            .letters
            .get_mut(&id)
            .ok_or(EngineError::LetterNotFound { id })?;
        letter.details = draft;
        letter.updated_at = Utc::now();
        info!(letter_id = id, kind = ?letter.details.kind, "Letter updated");
        Ok(letter.clone())
    }

    fn delete_letter(&mut self, id: u64) -> EngineResult<Letter> {
        let letter = self
            .letters
            .remove(&id)
            .ok_or(EngineError::LetterNotFound { id })?;
        info!(letter_id = id, "Letter deleted");
        Ok(letter)
    }

    fn create_student(&mut self, draft: StudentDraft) -> EngineResult<Student> {
        draft.validate()?;
        let now = Utc::now();
        let student = Student {
            id: next_id(&mut self.next_student_id),
            details: draft,
            created_at: now,
            updated_at: now,
        };
        info!(student_id = student.id, class = %student.details.class, "Student created");
        self.students.insert(student.id, student.clone());
        Ok(student)
    }

    fn student(&self, id: u64) -> EngineResult<Student> {
        self.require_student(id).cloned()
    }

    fn list_students(&self, q: Option<&str>) -> Vec<Student> {
        let needle = name_filter(q);
        let mut students: Vec<Student> = self
            .students
            .values()
            .filter(|s| matches_name(s.name(), needle.as_deref()))
            .cloned()
            .collect();
        students.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        students
    }

    fn update_student(&mut self, id: u64, draft: StudentDraft) -> EngineResult<Student> {
        self.require_student(id)?;
        draft.validate()?;

        let student = self
            .students
            .get_mut(&id)
            .ok_or(EngineError::StudentNotFound { id })?;
        student.details = draft;
        student.updated_at = Utc::now();
        info!(student_id = id, "Student updated");
        Ok(student.clone())
    }

    fn delete_student(&mut self, id: u64) -> EngineResult<Student> {
        let student = self
            .students
            .remove(&id)
            .ok_or(EngineError::StudentNotFound { id })?;
        for letter in self.letters.values_mut() {
            if letter.details.student_id == Some(id) {
                letter.details.student_id = None;
            }
        }
        info!(student_id = id, "Student deleted");
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivitySchedule, Gender, LeaveLetterDetails, LeavePeriod, Religion};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(name: &str, position: &str, nip: Option<&str>) -> EmployeeDraft {
        EmployeeDraft {
            nip: nip.map(|n| IdentityNumber::parse(n).unwrap()),
            name: name.to_string(),
            birthplace: "Yogyakarta".to_string(),
            birth_date: make_date("1980-05-17"),
            gender: Gender::Male,
            religion: Religion::Islam,
            address: "Jl. Malioboro 10".to_string(),
            email: format!("{}@example.go.id", name.to_lowercase().replace(' ', ".")),
            phone: "081234567890".to_string(),
            position: position.to_string(),
            rank: "Penata".to_string(),
            grade: "III/c".to_string(),
            spouse_name: None,
            unit: "SMKN 2 Yogyakarta".to_string(),
            photo_path: None,
        }
    }

    fn leave(start: &str, end: &str) -> LeaveRequestDraft {
        LeaveRequestDraft {
            period: LeavePeriod::new(make_date(start), make_date(end)).unwrap(),
            reason: Some("Keperluan keluarga".to_string()),
            letter: LeaveLetterDetails::default(),
        }
    }

    fn letter(kind: LetterKind, issued_on: &str, participants: Vec<u64>) -> LetterDraft {
        LetterDraft {
            kind,
            number: format!("800/{}", issued_on),
            place_of_issue: "Yogyakarta".to_string(),
            issued_on: make_date(issued_on),
            subject: None,
            nature: None,
            addressee: None,
            attachment: None,
            opening: None,
            body: String::new(),
            closing: None,
            activity: ActivitySchedule::default(),
            signer_id: None,
            participant_ids: participants,
            letterhead_id: None,
            student_id: None,
        }
    }

    fn student(name: &str) -> StudentDraft {
        StudentDraft {
            name: Some(name.to_string()),
            class: "XI TKJ 2".to_string(),
            ..Default::default()
        }
    }

    fn letterhead() -> LetterheadDraft {
        LetterheadDraft {
            name: "Kop Sekolah".to_string(),
            image_path: "/srv/kop.png".to_string(),
            description: None,
        }
    }

    // ==========================================================================
    // Employees
    // ==========================================================================
    #[test]
    fn test_ids_are_sequential() {
        let mut store = InMemoryStore::new();
        let a = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let b = store.create_employee(draft("Budi", "Guru", None)).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[test]
    fn test_duplicate_nip_is_rejected() {
        let mut store = InMemoryStore::new();
        let nip = Some("198005172005011002");
        store.create_employee(draft("Ani", "Guru", nip)).unwrap();
        let result = store.create_employee(draft("Budi", "Guru", nip));
        assert!(matches!(result, Err(EngineError::DuplicateIdentityNumber { .. })));
    }

    #[test]
    fn test_employees_without_nip_do_not_conflict() {
        let mut store = InMemoryStore::new();
        store.create_employee(draft("Ani", "Guru", None)).unwrap();
        assert!(store.create_employee(draft("Budi", "Guru", None)).is_ok());
    }

    #[test]
    fn test_update_keeps_own_nip() {
        let mut store = InMemoryStore::new();
        let nip = Some("198005172005011002");
        let ani = store.create_employee(draft("Ani", "Guru", nip)).unwrap();
        let updated = store
            .update_employee(ani.id, draft("Ani Rahma", "Guru Madya", nip))
            .unwrap();
        assert_eq!(updated.name(), "Ani Rahma");
        assert_eq!(updated.created_at, ani.created_at);
    }

    #[test]
    fn test_invalid_draft_is_rejected() {
        let mut store = InMemoryStore::new();
        let mut bad = draft("Ani", "Guru", None);
        bad.email = "not-an-email".to_string();
        assert!(matches!(
            store.create_employee(bad),
            Err(EngineError::InvalidEmployee { .. })
        ));
    }

    #[test]
    fn test_list_orders_by_name_and_filters() {
        let mut store = InMemoryStore::new();
        for name in ["Citra", "ani", "Budi", "Anton"] {
            store.create_employee(draft(name, "Guru", None)).unwrap();
        }

        let all = store.list_employees(&EmployeeQuery::default());
        let names: Vec<&str> = all.data.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["ani", "Anton", "Budi", "Citra"]);

        let query = EmployeeQuery {
            q: Some("AN".to_string()),
            ..Default::default()
        };
        let filtered = store.list_employees(&query);
        assert_eq!(filtered.total, 2);
    }

    #[test]
    fn test_list_paginates() {
        let mut store = InMemoryStore::new();
        for i in 0..5 {
            store
                .create_employee(draft(&format!("Pegawai {}", i), "Staf", None))
                .unwrap();
        }
        let query = EmployeeQuery {
            q: None,
            page: Some(2),
            per_page: Some(2),
        };
        let page = store.list_employees(&query);
        assert_eq!(page.total, 5);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name(), "Pegawai 2");
    }

    #[test]
    fn test_query_clamps_paging() {
        let query = EmployeeQuery {
            q: None,
            page: Some(0),
            per_page: Some(1000),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 100);
    }

    #[test]
    fn test_find_by_position_is_case_insensitive() {
        let mut store = InMemoryStore::new();
        store.create_employee(draft("Budi", "Guru", None)).unwrap();
        store
            .create_employee(draft("Siti", "Kepala Sekolah", None))
            .unwrap();
        let found = store.find_by_position("kepala sekolah").unwrap();
        assert_eq!(found.name(), "Siti");
        assert!(store.find_by_position("bendahara").is_none());
    }

    // ==========================================================================
    // Holidays
    // ==========================================================================
    #[test]
    fn test_duplicate_holiday_is_rejected() {
        let mut store = InMemoryStore::new();
        let holiday = Holiday {
            date: make_date("2026-08-17"),
            name: "Kemerdekaan".to_string(),
        };
        store.add_holiday(holiday.clone()).unwrap();
        assert!(matches!(
            store.add_holiday(holiday),
            Err(EngineError::DuplicateHoliday { .. })
        ));
    }

    #[test]
    fn test_holidays_are_listed_by_date() {
        let seed = vec![
            Holiday {
                date: make_date("2026-12-25"),
                name: "Natal".to_string(),
            },
            Holiday {
                date: make_date("2026-01-01"),
                name: "Tahun Baru".to_string(),
            },
        ];
        let mut store = InMemoryStore::with_holidays(&seed);
        assert_eq!(store.holidays()[0].name, "Tahun Baru");

        store.remove_holiday(make_date("2026-01-01")).unwrap();
        assert_eq!(store.holidays().len(), 1);
        assert!(matches!(
            store.remove_holiday(make_date("2026-01-01")),
            Err(EngineError::HolidayNotFound { .. })
        ));
    }

    #[test]
    fn test_update_holiday_moves_and_renames() {
        let seed = vec![
            Holiday {
                date: make_date("2026-03-19"),
                name: "Nyepi".to_string(),
            },
            Holiday {
                date: make_date("2026-08-17"),
                name: "Kemerdekaan".to_string(),
            },
        ];
        let mut store = InMemoryStore::with_holidays(&seed);

        let moved = Holiday {
            date: make_date("2026-03-20"),
            name: "Cuti Bersama Nyepi".to_string(),
        };
        store.update_holiday(make_date("2026-03-19"), moved).unwrap();
        let calendar = store.holiday_calendar();
        assert!(calendar.contains(make_date("2026-03-20")));
        assert!(!calendar.contains(make_date("2026-03-19")));

        let clash = Holiday {
            date: make_date("2026-08-17"),
            name: "Bentrok".to_string(),
        };
        assert!(matches!(
            store.update_holiday(make_date("2026-03-20"), clash),
            Err(EngineError::DuplicateHoliday { .. })
        ));
        assert_eq!(store.holidays()[0].name, "Cuti Bersama Nyepi");

        let missing = Holiday {
            date: make_date("2026-12-25"),
            name: "Natal".to_string(),
        };
        assert!(matches!(
            store.update_holiday(make_date("2026-12-24"), missing),
            Err(EngineError::HolidayNotFound { .. })
        ));
    }

    // ==========================================================================
    // Leave requests and balances
    // ==========================================================================
    #[test]
    fn test_leave_request_for_unknown_employee_fails() {
        let mut store = InMemoryStore::new();
        let result = store.create_leave_request(99, leave("2026-02-02", "2026-02-03"));
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { id: 99 })));
    }

    #[test]
    fn test_leave_request_with_unknown_signer_fails() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let mut request = leave("2026-02-02", "2026-02-03");
        request.letter.signer_id = Some(42);
        assert!(store.create_leave_request(ani.id, request).is_err());
    }

    #[test]
    fn test_leave_requests_are_ordered_by_start() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        store
            .create_leave_request(ani.id, leave("2026-03-02", "2026-03-03"))
            .unwrap();
        store
            .create_leave_request(ani.id, leave("2026-02-02", "2026-02-03"))
            .unwrap();

        let requests = store.leave_requests_for(ani.id).unwrap();
        assert_eq!(requests[0].period.start(), make_date("2026-02-02"));
        assert_eq!(requests[1].period.start(), make_date("2026-03-02"));
    }

    #[test]
    fn test_update_leave_request_keeps_owner() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let kepala = store
            .create_employee(draft("Siti", "Kepala Sekolah", None))
            .unwrap();
        let request = store
            .create_leave_request(ani.id, leave("2026-02-02", "2026-02-03"))
            .unwrap();

        let mut changed = leave("2026-02-09", "2026-02-13");
        changed.letter.signer_id = Some(kepala.id);
        let updated = store.update_leave_request(request.id, changed).unwrap();

        assert_eq!(updated.employee_id, ani.id);
        assert_eq!(updated.period.end(), make_date("2026-02-13"));
        assert_eq!(updated.created_at, request.created_at);
        assert_eq!(store.leave_requests_for(ani.id).unwrap(), vec![updated]);
    }

    #[test]
    fn test_update_leave_request_checks_references() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let request = store
            .create_leave_request(ani.id, leave("2026-02-02", "2026-02-03"))
            .unwrap();

        let mut changed = leave("2026-02-09", "2026-02-13");
        changed.letter.letterhead_id = Some(5);
        assert!(matches!(
            store.update_leave_request(request.id, changed),
            Err(EngineError::LetterheadNotFound { id: 5 })
        ));
        assert_eq!(store.leave_request(request.id).unwrap(), request);
        assert!(matches!(
            store.update_leave_request(99, leave("2026-02-09", "2026-02-13")),
            Err(EngineError::LeaveRequestNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_one_balance_per_employee() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let buckets = BalanceBuckets {
            current_year: 12,
            previous_year: 0,
            two_years_prior: 0,
        };
        store.create_leave_balance(ani.id, buckets).unwrap();
        assert!(matches!(
            store.create_leave_balance(ani.id, buckets),
            Err(EngineError::DuplicateLeaveBalance { .. })
        ));
    }

    #[test]
    fn test_put_balance_updates_total() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        assert!(store.leave_balance(ani.id).unwrap().is_none());

        let first = BalanceBuckets {
            current_year: 12,
            previous_year: 0,
            two_years_prior: 0,
        };
        store.put_leave_balance(ani.id, first).unwrap();
        let second = BalanceBuckets {
            current_year: 10,
            previous_year: 6,
            two_years_prior: 3,
        };
        let saved = store.put_leave_balance(ani.id, second).unwrap();
        assert_eq!(saved.total(), 19);
        assert_eq!(store.leave_balance(ani.id).unwrap().unwrap().total(), 19);
    }

    #[test]
    fn test_overflowing_balance_is_rejected_and_previous_kept() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let overflowing = BalanceBuckets {
            current_year: i32::MAX,
            previous_year: 1,
            two_years_prior: 0,
        };
        assert!(matches!(
            store.create_leave_balance(ani.id, overflowing),
            Err(EngineError::InvalidLeaveBalance { .. })
        ));
        assert!(matches!(
            store.put_leave_balance(ani.id, overflowing),
            Err(EngineError::InvalidLeaveBalance { .. })
        ));
        assert!(store.leave_balance(ani.id).unwrap().is_none());

        let saved = BalanceBuckets {
            current_year: 12,
            previous_year: 6,
            two_years_prior: 0,
        };
        store.put_leave_balance(ani.id, saved).unwrap();
        assert!(store.put_leave_balance(ani.id, overflowing).is_err());
        let balance = store.leave_balance(ani.id).unwrap().unwrap();
        assert_eq!(balance.total(), 18);
        assert_eq!(balance.buckets(), saved);
    }

    // ==========================================================================
    // Cascades
    // ==========================================================================
    #[test]
    fn test_delete_employee_cascades() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let kepala = store
            .create_employee(draft("Siti", "Kepala Sekolah", None))
            .unwrap();

        let own = store
            .create_leave_request(ani.id, leave("2026-02-02", "2026-02-03"))
            .unwrap();
        let mut signed = leave("2026-02-09", "2026-02-10");
        signed.letter.signer_id = Some(ani.id);
        let signed = store.create_leave_request(kepala.id, signed).unwrap();
        store
            .put_leave_balance(
                ani.id,
                BalanceBuckets {
                    current_year: 12,
                    ..Default::default()
                },
            )
            .unwrap();
        let participants = vec![ani.id, kepala.id];
        let mut order = letter(LetterKind::AssignmentOrder, "2026-02-01", participants);
        order.signer_id = Some(ani.id);
        let order = store.create_letter(order).unwrap();

        store.delete_employee(ani.id).unwrap();

        assert!(store.leave_request(own.id).is_err());
        assert!(store.leave_request(signed.id).unwrap().letter.signer_id.is_none());
        assert!(store.balances.is_empty());
        let order = store.letter(order.id).unwrap();
        assert_eq!(order.details.participant_ids, vec![kepala.id]);
        assert!(order.details.signer_id.is_none());
        assert!(matches!(
            store.delete_employee(ani.id),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_letterhead_clears_references() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let kop = store.create_letterhead(letterhead()).unwrap();

        let mut general = letter(LetterKind::General, "2026-02-01", vec![]);
        general.letterhead_id = Some(kop.id);
        let general = store.create_letter(general).unwrap();
        let mut request = leave("2026-02-02", "2026-02-02");
        request.letter.letterhead_id = Some(kop.id);
        let request = store.create_leave_request(ani.id, request).unwrap();

        store.delete_letterhead(kop.id).unwrap();

        assert!(store.letter(general.id).unwrap().details.letterhead_id.is_none());
        assert!(store.leave_request(request.id).unwrap().letter.letterhead_id.is_none());
        assert!(store.letterheads().is_empty());
    }

    // ==========================================================================
    // Letters
    // ==========================================================================
    #[test]
    fn test_letter_with_unknown_participant_fails() {
        let mut store = InMemoryStore::new();
        let order = letter(LetterKind::AssignmentOrder, "2026-02-01", vec![7]);
        let result = store.create_letter(order);
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { id: 7 })));
    }

    #[test]
    fn test_update_letter_validates_and_checks_references() {
        let mut store = InMemoryStore::new();
        let ani = store.create_employee(draft("Ani", "Guru", None)).unwrap();
        let order = store
            .create_letter(letter(LetterKind::AssignmentOrder, "2026-02-01", vec![ani.id]))
            .unwrap();

        let emptied = letter(LetterKind::AssignmentOrder, "2026-02-01", vec![]);
        assert!(matches!(
            store.update_letter(order.id, emptied),
            Err(EngineError::InvalidLetter { .. })
        ));
        let unknown = letter(LetterKind::AssignmentOrder, "2026-02-01", vec![ani.id, 9]);
        assert!(matches!(
            store.update_letter(order.id, unknown),
            Err(EngineError::EmployeeNotFound { id: 9 })
        ));
        assert_eq!(store.letter(order.id).unwrap(), order);

        let mut changed = letter(LetterKind::AssignmentOrder, "2026-02-03", vec![ani.id]);
        changed.signer_id = Some(ani.id);
        let updated = store.update_letter(order.id, changed).unwrap();
        assert_eq!(updated.details.issued_on, make_date("2026-02-03"));
        assert_eq!(updated.details.signer_id, Some(ani.id));
        assert_eq!(updated.created_at, order.created_at);
    }

    #[test]
    fn test_update_letterhead() {
        let mut store = InMemoryStore::new();
        let kop = store.create_letterhead(letterhead()).unwrap();
        let mut changed = letterhead();
        changed.name = "Kop Dinas".to_string();
        let updated = store.update_letterhead(kop.id, changed.clone()).unwrap();
        assert_eq!(updated.id, kop.id);
        assert_eq!(store.letterhead(kop.id).unwrap().name, "Kop Dinas");
        assert!(matches!(
            store.update_letterhead(7, changed),
            Err(EngineError::LetterheadNotFound { id: 7 })
        ));
    }

    #[test]
    fn test_letters_newest_first_and_filtered() {
        let mut store = InMemoryStore::new();
        store
            .create_letter(letter(LetterKind::General, "2026-01-05", vec![]))
            .unwrap();
        store
            .create_letter(letter(LetterKind::Memorandum, "2026-03-05", vec![]))
            .unwrap();
        store
            .create_letter(letter(LetterKind::General, "2026-02-05", vec![]))
            .unwrap();

        let all = store.list_letters(None);
        let dates: Vec<NaiveDate> = all.iter().map(|l| l.details.issued_on).collect();
        assert_eq!(
            dates,
            vec![make_date("2026-03-05"), make_date("2026-02-05"), make_date("2026-01-05")]
        );
        assert_eq!(store.list_letters(Some(LetterKind::General)).len(), 2);
        assert_eq!(store.list_letters(Some(LetterKind::Certificate)).len(), 0);
    }

    // ==========================================================================
    // Students
    // ==========================================================================
    #[test]
    fn test_students_are_listed_by_name_and_filtered() {
        let mut store = InMemoryStore::new();
        for name in ["Wawan", "dewi", "Bagus", "Dimas"] {
            store.create_student(student(name)).unwrap();
        }
        let names: Vec<String> = store
            .list_students(None)
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bagus", "dewi", "Dimas", "Wawan"]);
        assert_eq!(store.list_students(Some("DI")).len(), 1);
        assert_eq!(store.list_students(Some("  ")).len(), 4);
    }

    #[test]
    fn test_update_student() {
        let mut store = InMemoryStore::new();
        let dewi = store.create_student(student("Dewi")).unwrap();
        let mut changed = student("Dewi Lestari");
        changed.class = "XII TKJ 2".to_string();
        let updated = store.update_student(dewi.id, changed).unwrap();
        assert_eq!(updated.details.class, "XII TKJ 2");

        let mut invalid = student("Dewi");
        invalid.class = String::new();
        assert!(matches!(
            store.update_student(dewi.id, invalid),
            Err(EngineError::InvalidStudent { .. })
        ));
        assert!(matches!(
            store.update_student(42, student("Nobody")),
            Err(EngineError::StudentNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_certificate_references_student_until_deleted() {
        let mut store = InMemoryStore::new();
        let mut certificate = letter(LetterKind::Certificate, "2026-02-01", vec![]);
        certificate.student_id = Some(1);
        assert!(matches!(
            store.create_letter(certificate.clone()),
            Err(EngineError::StudentNotFound { id: 1 })
        ));

        let dewi = store.create_student(student("Dewi")).unwrap();
        certificate.student_id = Some(dewi.id);
        let certificate = store.create_letter(certificate).unwrap();

        store.delete_student(dewi.id).unwrap();
        assert!(store.letter(certificate.id).unwrap().details.student_id.is_none());
        assert!(store.student(dewi.id).is_err());
    }
}

//! Context for the leave report (laporan cuti).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::build_leave_ledger;
use crate::config::OfficeConfig;
use crate::formatting::{format_long_date, safe_filename};
use crate::models::{Employee, HolidayCalendar, LeaveBalance, LeaveLedger, LeaveRequest};

use super::Document;
use super::signer::SignerInfo;

/// File name prefix of rendered leave reports.
pub const LEAVE_REPORT_PREFIX: &str = "laporan_cuti";

/// An employee's leave history with the running balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveReportDocument {
    /// Download file name.
    pub filename: String,
    /// The issuing office.
    pub office: OfficeConfig,
    /// The employee the report covers.
    pub employee: Employee,
    /// The stored balance, shown as the summary below the table.
    pub balance: Option<LeaveBalance>,
    /// One row per leave request, in start-date order.
    pub ledger: LeaveLedger,
    /// Who signs the report.
    pub signer: SignerInfo,
    /// Date the report was produced, e.g. "19 Oktober 2026".
    pub generated_on_text: String,
}

impl LeaveReportDocument {
    /// Assembles the report for one employee.
    ///
    /// Falls back to a placeholder signature block when `signer` is `None`.
    pub fn assemble(
        employee: Employee,
        requests: &[LeaveRequest],
        balance: Option<LeaveBalance>,
        holidays: &HolidayCalendar,
        signer: Option<&Employee>,
        office: &OfficeConfig,
        generated_on: NaiveDate,
    ) -> Self {
        let ledger = build_leave_ledger(employee.id, requests, balance.as_ref(), holidays);
        Self {
            filename: safe_filename(LEAVE_REPORT_PREFIX, employee.name()),
            office: office.clone(),
            balance,
            ledger,
            signer: SignerInfo::or_placeholder(signer),
            generated_on_text: format_long_date(generated_on),
            employee,
        }
    }
}

impl Document for LeaveReportDocument {
    fn template(&self) -> &'static str {
        "laporan_cuti"
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BalanceBuckets, EmployeeDraft, Gender, IdentityNumber, LeaveLetterDetails, LeavePeriod,
        Religion,
    };
    use chrono::Utc;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn office() -> OfficeConfig {
        OfficeConfig {
            name: "SMK Negeri 2 Yogyakarta".to_string(),
            agency: None,
            address: None,
            city: "Yogyakarta".to_string(),
        }
    }

    fn employee(id: u64, name: &str, nip: Option<&str>) -> Employee {
        Employee {
            id,
            details: EmployeeDraft {
                nip: nip.map(|n| IdentityNumber::parse(n).unwrap()),
                name: name.to_string(),
                birthplace: "Klaten".to_string(),
                birth_date: make_date("1970-10-01"),
                gender: Gender::Male,
                religion: Religion::Hindu,
                address: "Jl. Solo 9".to_string(),
                email: "kepsek@example.go.id".to_string(),
                phone: "0272000000".to_string(),
                position: "Kepala Sekolah".to_string(),
                rank: "Pembina Tingkat I".to_string(),
                grade: "IV/b".to_string(),
                spouse_name: None,
                unit: "SMKN 2".to_string(),
                photo_path: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(id: u64, start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            id,
            employee_id: 1,
            period: LeavePeriod::new(make_date(start), make_date(end)).unwrap(),
            reason: None,
            letter: LeaveLetterDetails::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_runs_ledger_from_stored_balance() {
        let balance = LeaveBalance::new(
            1,
            BalanceBuckets {
                current_year: 12,
                previous_year: 6,
                two_years_prior: 0,
            },
        )
        .unwrap();
        let requests = vec![
            request(2, "2026-03-02", "2026-03-04"),
            request(1, "2026-02-02", "2026-02-06"),
        ];
        let doc = LeaveReportDocument::assemble(
            employee(1, "Ani Lestari", None),
            &requests,
            Some(balance),
            &HolidayCalendar::new(),
            None,
            &office(),
            make_date("2026-10-19"),
        );

        assert_eq!(doc.ledger.opening_balance, 18);
        assert_eq!(doc.ledger.entries[0].request_id, 1);
        assert_eq!(doc.ledger.entries[1].balance_before, 13);
        assert_eq!(doc.ledger.closing_balance, 10);
        assert_eq!(doc.generated_on_text, "19 Oktober 2026");
        assert_eq!(doc.filename, "laporan_cuti_Ani Lestari.pdf");
        assert_eq!(doc.template(), "laporan_cuti");
    }

    #[test]
    fn test_report_without_signer_uses_placeholder() {
        let doc = LeaveReportDocument::assemble(
            employee(1, "Ani", None),
            &[],
            None,
            &HolidayCalendar::new(),
            None,
            &office(),
            make_date("2026-10-19"),
        );
        assert_eq!(doc.signer, SignerInfo::placeholder());
        assert_eq!(doc.ledger.opening_balance, 0);
    }

    #[test]
    fn test_report_signer_from_employee() {
        let principal = employee(9, "Drs. Wayan", Some("197010011995031001"));
        let doc = LeaveReportDocument::assemble(
            employee(1, "Ani", None),
            &[],
            None,
            &HolidayCalendar::new(),
            Some(&principal),
            &office(),
            make_date("2026-10-19"),
        );
        assert_eq!(doc.signer.name, "Drs. Wayan");
        assert_eq!(doc.signer.nip, "197010011995031001");
        assert_eq!(doc.signer.grade, "IV/b");
    }
}

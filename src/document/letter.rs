//! Context for the office letters: assignment orders, certificates,
//! memoranda and the rest of [`LetterKind`].

use serde::{Deserialize, Serialize};

use crate::config::OfficeConfig;
use crate::formatting::{format_long_date, safe_filename};
use crate::models::{Employee, Letter, LetterKind, Student};

use super::Document;
use super::signer::SignerInfo;

/// Everything a letter template prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterDocument {
    /// Download file name.
    pub filename: String,
    /// The issuing office.
    pub office: OfficeConfig,
    /// Heading, e.g. "SURAT PERINTAH TUGAS".
    pub title: String,
    /// The stored letter.
    pub letter: Letter,
    /// Who signs the letter, if one was chosen.
    pub signer: Option<SignerInfo>,
    /// The employees the letter concerns, in the stored order.
    pub participants: Vec<Employee>,
    /// The student a certificate is about.
    pub student: Option<Student>,
    /// Date of issue, e.g. "02 Februari 2026".
    pub issued_on_text: String,
    /// First day of the activity, if scheduled.
    pub activity_start_text: Option<String>,
    /// Last day of the activity, if it spans several days.
    pub activity_end_text: Option<String>,
    /// Letterhead image as a data URI.
    pub letterhead_image: Option<String>,
}

impl LetterDocument {
    /// Assembles the context for one letter.
    ///
    /// `participants` must follow `letter.details.participant_ids`.
    pub fn assemble(
        letter: Letter,
        signer: Option<&Employee>,
        participants: Vec<Employee>,
        student: Option<Student>,
        letterhead_image: Option<String>,
        office: &OfficeConfig,
    ) -> Self {
        let details = &letter.details;
        let activity_end_text = details
            .activity
            .end_date
            .filter(|end| Some(*end) != details.activity.start_date)
            .map(format_long_date);

        Self {
            filename: letter_filename(&letter),
            office: office.clone(),
            title: details.kind.title().to_string(),
            signer: signer.map(SignerInfo::from),
            participants,
            student,
            issued_on_text: format_long_date(details.issued_on),
            activity_start_text: details.activity.start_date.map(format_long_date),
            activity_end_text,
            letterhead_image,
            letter,
        }
    }
}

/// `<prefix>_<number>.pdf`; assignment orders also carry the activity name.
fn letter_filename(letter: &Letter) -> String {
    let details = &letter.details;
    let activity = details
        .activity
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty());

    match (details.kind, activity) {
        (LetterKind::AssignmentOrder, Some(activity)) => safe_filename(
            details.kind.file_prefix(),
            &format!("{}_{}", details.number, activity),
        ),
        _ => safe_filename(details.kind.file_prefix(), &details.number),
    }
}

impl Document for LetterDocument {
    fn template(&self) -> &'static str {
        self.letter.details.kind.file_prefix()
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivitySchedule, EmployeeDraft, Gender, IdentityNumber, LetterDraft, Religion,
        StudentDraft,
    };
    use chrono::{NaiveDate, Utc};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn office() -> OfficeConfig {
        OfficeConfig {
            name: "SMK Negeri 2 Yogyakarta".to_string(),
            agency: Some("Dinas Pendidikan".to_string()),
            address: None,
            city: "Yogyakarta".to_string(),
        }
    }

    fn employee(id: u64, name: &str, position: &str) -> Employee {
        Employee {
            id,
            details: EmployeeDraft {
                nip: Some(IdentityNumber::parse("197001012000031005").unwrap()),
                name: name.to_string(),
                birthplace: "Wonosari".to_string(),
                birth_date: make_date("1970-01-01"),
                gender: Gender::Male,
                religion: Religion::Islam,
                address: "Jl. Wates 3".to_string(),
                email: "pegawai@example.go.id".to_string(),
                phone: "0274555000".to_string(),
                position: position.to_string(),
                rank: "Pembina".to_string(),
                grade: "IV/a".to_string(),
                spouse_name: None,
                unit: "SMKN 2".to_string(),
                photo_path: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn letter(kind: LetterKind, activity: ActivitySchedule) -> Letter {
        Letter {
            id: 8,
            details: LetterDraft {
                kind,
                number: "094/017/SMKN2/2026".to_string(),
                place_of_issue: "Yogyakarta".to_string(),
                issued_on: make_date("2026-02-02"),
                subject: None,
                nature: None,
                addressee: None,
                attachment: None,
                opening: None,
                body: String::new(),
                closing: None,
                activity,
                signer_id: Some(1),
                participant_ids: vec![2],
                letterhead_id: None,
                student_id: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_assignment_order_context() {
        let activity = ActivitySchedule {
            name: Some("Workshop Kurikulum".to_string()),
            location: Some("Aula Dinas".to_string()),
            start_date: Some(make_date("2026-02-09")),
            end_date: Some(make_date("2026-02-11")),
            time: None,
        };
        let principal = employee(1, "Drs. Hartono", "Kepala Sekolah");
        let doc = LetterDocument::assemble(
            letter(LetterKind::AssignmentOrder, activity),
            Some(&principal),
            vec![employee(2, "Maria", "Guru")],
            None,
            None,
            &office(),
        );

        assert_eq!(doc.filename, "spt_094017SMKN22026_Workshop Kurikulum.pdf");
        assert_eq!(doc.title, "SURAT PERINTAH TUGAS");
        assert_eq!(doc.template(), "spt");
        assert_eq!(doc.issued_on_text, "02 Februari 2026");
        assert_eq!(doc.activity_start_text.as_deref(), Some("09 Februari 2026"));
        assert_eq!(doc.activity_end_text.as_deref(), Some("11 Februari 2026"));
        assert_eq!(doc.signer.unwrap().nip, "197001012000031005");
        assert_eq!(doc.participants[0].name(), "Maria");
    }

    #[test]
    fn test_single_day_activity_has_no_end_text() {
        let activity = ActivitySchedule {
            start_date: Some(make_date("2026-02-09")),
            end_date: Some(make_date("2026-02-09")),
            ..Default::default()
        };
        let doc = LetterDocument::assemble(
            letter(LetterKind::AssignmentOrder, activity),
            None,
            vec![],
            None,
            None,
            &office(),
        );
        assert!(doc.activity_end_text.is_none());
        assert_eq!(doc.filename, "spt_094017SMKN22026.pdf");
        assert!(doc.signer.is_none());
    }

    #[test]
    fn test_certificate_carries_student() {
        let now = Utc::now();
        let student = Student {
            id: 4,
            details: StudentDraft {
                name: Some("Dewi Lestari".to_string()),
                class: "XI TKJ 2".to_string(),
                ..Default::default()
            },
            created_at: now,
            updated_at: now,
        };
        let doc = LetterDocument::assemble(
            letter(LetterKind::Certificate, ActivitySchedule::default()),
            None,
            vec![],
            Some(student),
            Some("data:image/png;base64,YWJj".to_string()),
            &office(),
        );
        assert_eq!(doc.filename, "surat_keterangan_094017SMKN22026.pdf");
        assert_eq!(doc.student.unwrap().name(), "Dewi Lestari");
        assert!(doc.letterhead_image.is_some());
        assert!(doc.activity_start_text.is_none());
    }

    #[test]
    fn test_condolence_letter_names() {
        let doc = LetterDocument::assemble(
            letter(LetterKind::CondolenceLetter, ActivitySchedule::default()),
            None,
            vec![employee(2, "Maria", "Guru")],
            None,
            None,
            &office(),
        );
        assert_eq!(doc.filename, "surat_santunan_094017SMKN22026.pdf");
        assert_eq!(doc.template(), "surat_santunan");
        assert_eq!(doc.title, "SURAT PERMOHONAN SANTUNAN KORPRI");
    }
}

//! Letter and letterhead models.
//!
//! Letters are data holders for the document renderer. They reference
//! employees as signer and participants, optionally a shared
//! [`Letterhead`], and for certificates optionally a student.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A shared letterhead (kop surat) image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letterhead {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Path to the letterhead image on disk.
    pub image_path: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Input for registering a letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterheadDraft {
    /// Display name.
    pub name: String,
    /// Path to the letterhead image on disk.
    pub image_path: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The kinds of letter the office issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterKind {
    /// Surat Perintah Tugas.
    AssignmentOrder,
    /// Surat Keterangan.
    Certificate,
    /// Nota Dinas.
    Memorandum,
    /// Surat Resmi.
    OfficialLetter,
    /// Surat Pernyataan Tanggung Jawab Mutlak (SPTJM).
    StatementOfResponsibility,
    /// Surat Pernyataan Melaksanakan Tugas (SPMT).
    DutyAssumption,
    /// Surat Santunan KORPRI, a condolence payment letter.
    CondolenceLetter,
    /// Surat Umum.
    General,
}

impl LetterKind {
    /// File name prefix for rendered documents of this kind.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            LetterKind::AssignmentOrder => "spt",
            LetterKind::Certificate => "surat_keterangan",
            LetterKind::Memorandum => "nota_dinas",
            LetterKind::OfficialLetter => "surat_resmi",
            LetterKind::StatementOfResponsibility => "sptjm",
            LetterKind::DutyAssumption => "spmt",
            LetterKind::CondolenceLetter => "surat_santunan",
            LetterKind::General => "surat_umum",
        }
    }

    /// Heading printed above the letter number.
    pub fn title(&self) -> &'static str {
        match self {
            LetterKind::AssignmentOrder => "SURAT PERINTAH TUGAS",
            LetterKind::Certificate => "SURAT KETERANGAN",
            LetterKind::Memorandum => "NOTA DINAS",
            LetterKind::OfficialLetter => "SURAT",
            LetterKind::StatementOfResponsibility => "SURAT PERNYATAAN TANGGUNG JAWAB MUTLAK",
            LetterKind::DutyAssumption => "SURAT PERNYATAAN MELAKSANAKAN TUGAS",
            LetterKind::CondolenceLetter => "SURAT PERMOHONAN SANTUNAN KORPRI",
            LetterKind::General => "SURAT",
        }
    }
}

/// Scheduling details for letters that describe an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySchedule {
    /// Name of the activity.
    pub name: Option<String>,
    /// Where the activity takes place.
    pub location: Option<String>,
    /// First day of the activity.
    pub start_date: Option<NaiveDate>,
    /// Last day of the activity, if it spans several days.
    pub end_date: Option<NaiveDate>,
    /// Free-text time, e.g. "08.00 WIB s.d. selesai".
    pub time: Option<String>,
}

/// The editable fields of a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDraft {
    /// Which kind of letter this is.
    pub kind: LetterKind,
    /// Letter number.
    pub number: String,
    /// Place of issue.
    pub place_of_issue: String,
    /// Date of issue.
    pub issued_on: NaiveDate,
    /// Subject line (perihal / hal).
    #[serde(default)]
    pub subject: Option<String>,
    /// Nature of the letter (sifat).
    #[serde(default)]
    pub nature: Option<String>,
    /// Addressee.
    #[serde(default)]
    pub addressee: Option<String>,
    /// Attachment line (lampiran).
    #[serde(default)]
    pub attachment: Option<String>,
    /// Opening paragraph.
    #[serde(default)]
    pub opening: Option<String>,
    /// Main body.
    #[serde(default)]
    pub body: String,
    /// Closing paragraph.
    #[serde(default)]
    pub closing: Option<String>,
    /// Activity details, for letters that describe one.
    #[serde(default)]
    pub activity: ActivitySchedule,
    /// Signing employee.
    #[serde(default)]
    pub signer_id: Option<u64>,
    /// Employees the letter concerns.
    #[serde(default)]
    pub participant_ids: Vec<u64>,
    /// Letterhead to print.
    #[serde(default)]
    pub letterhead_id: Option<u64>,
    /// Student a certificate is about.
    #[serde(default)]
    pub student_id: Option<u64>,
}

impl LetterDraft {
    /// Checks the fields that the type system cannot.
    pub fn validate(&self) -> EngineResult<()> {
        if self.number.trim().is_empty() {
            return Err(EngineError::InvalidLetter {
                field: "number".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let (Some(start), Some(end)) = (self.activity.start_date, self.activity.end_date) {
            if end < start {
                return Err(EngineError::InvalidLetter {
                    field: "activity.end_date".to_string(),
                    message: format!("{} is before start date {}", end, start),
                });
            }
        }
        let participants_required = match self.kind {
            LetterKind::AssignmentOrder => {
                Some("an assignment order needs at least one participant")
            }
            LetterKind::CondolenceLetter => Some("a condolence letter must name the employee"),
            _ => None,
        };
        if let Some(message) = participants_required.filter(|_| self.participant_ids.is_empty()) {
            return Err(EngineError::InvalidLetter {
                field: "participant_ids".to_string(),
                message: message.to_string(),
            });
        }
        if self.student_id.is_some() && self.kind != LetterKind::Certificate {
            return Err(EngineError::InvalidLetter {
                field: "student_id".to_string(),
                message: "only a certificate may reference a student".to_string(),
            });
        }
        Ok(())
    }
}

/// A stored letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Store-assigned identifier.
    pub id: u64,
    /// The editable fields.
    #[serde(flatten)]
    pub details: LetterDraft,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

//! Student model.
//!
//! Students are only ever referenced by certificate letters (surat
//! keterangan), so most of their fields are optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The editable fields of a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Student number (NIS).
    #[serde(default)]
    pub nis: Option<String>,
    /// Class, e.g. "XI TKJ 2".
    pub class: String,
    /// Major (jurusan).
    #[serde(default)]
    pub major: Option<String>,
    /// Home address.
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Name of a parent or guardian.
    #[serde(default)]
    pub parent_name: Option<String>,
    /// Path to the student photo.
    #[serde(default)]
    pub photo_path: Option<String>,
}

impl StudentDraft {
    /// Longest accepted student number.
    pub const MAX_NIS_LENGTH: usize = 20;
    /// Longest accepted phone number.
    pub const MAX_PHONE_LENGTH: usize = 15;

    /// Checks the fields that the type system cannot.
    pub fn validate(&self) -> EngineResult<()> {
        if self.class.trim().is_empty() {
            return Err(invalid("class", "must not be empty".to_string()));
        }
        if exceeds(self.nis.as_deref(), Self::MAX_NIS_LENGTH) {
            return Err(invalid(
                "nis",
                format!("must be at most {} characters", Self::MAX_NIS_LENGTH),
            ));
        }
        if exceeds(self.phone.as_deref(), Self::MAX_PHONE_LENGTH) {
            return Err(invalid(
                "phone",
                format!("must be at most {} characters", Self::MAX_PHONE_LENGTH),
            ));
        }
        Ok(())
    }
}

fn exceeds(value: Option<&str>, limit: usize) -> bool {
    value.is_some_and(|v| v.chars().count() > limit)
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidStudent {
        field: field.to_string(),
        message,
    }
}

/// A stored student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identifier.
    pub id: u64,
    /// The editable fields.
    #[serde(flatten)]
    pub details: StudentDraft,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// The student's name, or an empty string when none was recorded.
    pub fn name(&self) -> &str {
        self.details.name.as_deref().unwrap_or("")
    }
}

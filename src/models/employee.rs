//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its validated
//! [`IdentityNumber`] (NIP) and the [`EmployeeDraft`] used to create or
//! replace an employee.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A civil-servant identity number (NIP).
///
/// Always exactly [`IdentityNumber::LENGTH`] ASCII digits. Construction is the
/// only place the format is checked, so every value in the system is valid.
///
/// # Example
///
/// ```
/// use leave_engine::models::IdentityNumber;
///
/// let nip = IdentityNumber::parse("198503152010011002").unwrap();
/// assert_eq!(nip.as_str(), "198503152010011002");
/// assert!(IdentityNumber::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Number of digits in a NIP.
    pub const LENGTH: usize = 18;

    /// Parses and validates an identity number.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let value = value.trim();
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::InvalidEmployee {
                field: "nip".to_string(),
                message: format!("must be exactly {} digits", Self::LENGTH),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the identity number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gender as recorded on personnel files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Laki-laki.
    #[serde(rename = "L")]
    Male,
    /// Perempuan.
    #[serde(rename = "P")]
    Female,
}

impl Gender {
    /// The Indonesian label used on documents.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

/// Religion as recorded on personnel files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Religion {
    /// Islam.
    Islam,
    /// Kristen.
    Kristen,
    /// Katolik.
    Katolik,
    /// Hindu.
    Hindu,
    /// Buddha.
    Buddha,
    /// Konghucu.
    Konghucu,
}

/// The editable fields of an employee.
///
/// Used as the payload when creating or replacing an employee; the store
/// assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Identity number, if the employee has one.
    #[serde(default)]
    pub nip: Option<IdentityNumber>,
    /// Full name.
    pub name: String,
    /// Place of birth.
    pub birthplace: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Gender.
    pub gender: Gender,
    /// Religion.
    pub religion: Religion,
    /// Home address.
    pub address: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Position (jabatan).
    pub position: String,
    /// Rank (pangkat).
    pub rank: String,
    /// Grade (golongan), e.g. "III/a".
    pub grade: String,
    /// Name of the spouse, if any.
    #[serde(default)]
    pub spouse_name: Option<String>,
    /// Work unit (unit kerja).
    pub unit: String,
    /// Path to the employee photo.
    #[serde(default)]
    pub photo_path: Option<String>,
}

impl EmployeeDraft {
    /// Checks the fields that the type system cannot.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(invalid("email", "must be a valid email address"));
        }
        if self.phone.chars().count() > 15 {
            return Err(invalid("phone", "must be at most 15 characters"));
        }
        if self.grade.chars().count() > 5 {
            return Err(invalid("grade", "must be at most 5 characters"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// A civil servant known to the system.
///
/// Employees are referenced (never owned) by leave requests, leave balances
/// and letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: u64,
    /// The editable fields.
    #[serde(flatten)]
    pub details: EmployeeDraft,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// Returns true if the position contains `keyword`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{Employee, EmployeeDraft, Gender, Religion};
    /// use chrono::{NaiveDate, Utc};
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     details: EmployeeDraft {
    ///         nip: None,
    ///         name: "Siti Aminah".to_string(),
    ///         birthplace: "Bandung".to_string(),
    ///         birth_date: NaiveDate::from_ymd_opt(1975, 4, 2).unwrap(),
    ///         gender: Gender::Female,
    ///         religion: Religion::Islam,
    ///         address: "Jl. Merdeka 1".to_string(),
    ///         email: "siti@example.go.id".to_string(),
    ///         phone: "0812000000".to_string(),
    ///         position: "Kepala Sekolah".to_string(),
    ///         rank: "Pembina".to_string(),
    ///         grade: "IV/a".to_string(),
    ///         spouse_name: None,
    ///         unit: "SMKN 1".to_string(),
    ///         photo_path: None,
    ///     },
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    /// assert!(employee.holds_position("kepala sekolah"));
    /// ```
    pub fn holds_position(&self, keyword: &str) -> bool {
        self.details
            .position
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> EmployeeDraft {
        EmployeeDraft {
            nip: Some(IdentityNumber::parse("198503152010011002").unwrap()),
            name: "Budi Santoso".to_string(),
            birthplace: "Yogyakarta".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            gender: Gender::Male,
            religion: Religion::Islam,
            address: "Jl. Malioboro 10".to_string(),
            email: "budi@example.go.id".to_string(),
            phone: "081234567890".to_string(),
            position: "Guru".to_string(),
            rank: "Penata".to_string(),
            grade: "III/c".to_string(),
            spouse_name: None,
            unit: "SMKN 2 Yogyakarta".to_string(),
            photo_path: None,
        }
    }

    #[test]
    fn test_identity_number_accepts_eighteen_digits() {
        let nip = IdentityNumber::parse("198503152010011002").unwrap();
        assert_eq!(nip.to_string(), "198503152010011002");
    }

    #[test]
    fn test_identity_number_trims_whitespace() {
        let nip = IdentityNumber::parse(" 198503152010011002 ").unwrap();
        assert_eq!(nip.as_str(), "198503152010011002");
    }

    #[test]
    fn test_identity_number_rejects_wrong_length() {
        let err = IdentityNumber::parse("1985031520100110").unwrap_err();
        assert!(matches!(err, EngineError::InvalidEmployee { ref field, .. } if field == "nip"));
    }

    #[test]
    fn test_identity_number_rejects_non_digits() {
        assert!(IdentityNumber::parse("19850315201001100X").is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed_nip() {
        let result: Result<IdentityNumber, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_gender_and_religion_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"P\"");
        assert_eq!(
            serde_json::to_string(&Religion::Konghucu).unwrap(),
            "\"KONGHUCU\""
        );
        assert_eq!(Gender::Female.label(), "Perempuan");
    }

    #[test]
    fn test_draft_validation() {
        assert!(sample_draft().validate().is_ok());

        let mut draft = sample_draft();
        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());

        let mut draft = sample_draft();
        draft.email = "not-an-email".to_string();
        assert!(draft.validate().is_err());

        let mut draft = sample_draft();
        draft.grade = "III/a/b".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_employee_serializes_flat() {
        let employee = Employee {
            id: 3,
            details: sample_draft(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Budi Santoso");
        assert_eq!(json["nip"], "198503152010011002");
        assert_eq!(json["gender"], "L");
    }

    #[test]
    fn test_holds_position_is_case_insensitive() {
        let mut draft = sample_draft();
        draft.position = "KEPALA SEKOLAH SMKN 2".to_string();
        let employee = Employee {
            id: 1,
            details: draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(employee.holds_position("kepala sekolah"));
        assert!(!employee.holds_position("bendahara"));
    }
}

//! The signature block printed at the foot of a document.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Name, NIP, rank and position of whoever signs a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    /// Full name.
    pub name: String,
    /// Identity number, or a placeholder.
    pub nip: String,
    /// Rank (pangkat).
    pub rank: String,
    /// Grade (golongan).
    pub grade: String,
    /// Position (jabatan).
    pub position: String,
}

impl SignerInfo {
    /// A fill-in-the-blanks signature block for a school principal, used
    /// when no suitable employee is on record.
    pub fn placeholder() -> Self {
        Self {
            name: "[Nama Kepala Sekolah]".to_string(),
            nip: "[NIP Kepala Sekolah]".to_string(),
            rank: "[Pangkat]".to_string(),
            grade: "[Golongan]".to_string(),
            position: "Kepala Sekolah".to_string(),
        }
    }

    /// Uses the employee if there is one, the placeholder otherwise.
    pub fn or_placeholder(employee: Option<&Employee>) -> Self {
        employee.map(Self::from).unwrap_or_else(Self::placeholder)
    }
}

impl From<&Employee> for SignerInfo {
    fn from(employee: &Employee) -> Self {
        let details = &employee.details;
        Self {
            name: details.name.clone(),
            nip: details
                .nip
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            rank: details.rank.clone(),
            grade: details.grade.clone(),
            position: details.position.clone(),
        }
    }
}

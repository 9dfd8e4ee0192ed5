//! Document contexts and the renderer seam.
//!
//! This module assembles the data a letter template needs (leave letter,
//! leave report, office letters) and hands it to a [`DocumentRenderer`].
//! Layout is the renderer's business; the crate ships [`JsonRenderer`],
//! which emits the context itself.

mod leave_letter;
mod leave_report;
mod letter;
mod letterhead;
mod signer;

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

pub use leave_letter::{LEAVE_LETTER_PREFIX, LeaveLetterDocument};
pub use leave_report::{LEAVE_REPORT_PREFIX, LeaveReportDocument};
pub use letter::LetterDocument;
pub use letterhead::{image_mime_type, letterhead_data_uri};
pub use signer::SignerInfo;

/// A serializable template context.
pub trait Document: Serialize {
    /// Name of the template that lays the document out.
    fn template(&self) -> &'static str;

    /// File name offered for download.
    fn filename(&self) -> &str;
}

/// The output of a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// File name offered for download.
    pub filename: String,
    /// MIME type of `body`.
    pub content_type: &'static str,
    /// Rendered bytes.
    pub body: Vec<u8>,
}

/// Turns a document context into bytes.
pub trait DocumentRenderer: Send + Sync {
    /// Renders one document.
    fn render<D: Document>(&self, document: &D) -> EngineResult<RenderedDocument>;
}

/// Renders a document as its JSON context.
///
/// # Example
///
/// ```
/// use leave_engine::document::{DocumentRenderer, JsonRenderer, LeaveReportDocument};
/// use leave_engine::config::OfficeConfig;
/// use leave_engine::models::{Employee, EmployeeDraft, Gender, HolidayCalendar, Religion};
/// use chrono::{NaiveDate, Utc};
///
/// let employee = Employee {
///     id: 1,
///     details: EmployeeDraft {
///         nip: None,
///         name: "Ani".to_string(),
///         birthplace: "Bantul".to_string(),
///         birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
///         gender: Gender::Female,
///         religion: Religion::Islam,
///         address: "-".to_string(),
///         email: "ani@example.go.id".to_string(),
///         phone: "0".to_string(),
///         position: "Guru".to_string(),
///         rank: "Penata".to_string(),
///         grade: "III/c".to_string(),
///         spouse_name: None,
///         unit: "SMKN 2".to_string(),
///         photo_path: None,
///     },
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// let office = OfficeConfig {
///     name: "SMK Negeri 2".to_string(),
///     agency: None,
///     address: None,
///     city: "Yogyakarta".to_string(),
/// };
/// let report = LeaveReportDocument::assemble(
///     employee, &[], None, &HolidayCalendar::new(), None, &office,
///     NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
/// );
///
/// let rendered = JsonRenderer.render(&report).unwrap();
/// assert_eq!(rendered.filename, "laporan_cuti_Ani.pdf");
/// assert_eq!(rendered.content_type, "application/json");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn render<D: Document>(&self, document: &D) -> EngineResult<RenderedDocument> {
        let body = serde_json::to_vec_pretty(document).map_err(|e| EngineError::RenderError {
            template: document.template().to_string(),
            message: e.to_string(),
        })?;
        Ok(RenderedDocument {
            filename: document.filename().to_string(),
            content_type: "application/json",
            body,
        })
    }
}

//! Termination letter models.
//!
//! The letter generator consumes a [`LetterRequest`] and produces a
//! [`LetterDocument`]: an ordered sequence of typed paragraphs ready for
//! rendering or export. The document carries no monetary values; letter
//! assembly is independent of the calculation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Width used when rendering a document to plain text.
const TEXT_RENDER_WIDTH: usize = 72;

/// Who initiates the termination the letter communicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    /// The employer terminates the contract.
    EmployerInitiated,
    /// The worker resigns.
    WorkerInitiated,
}

/// The role a paragraph plays in the letter.
///
/// Paragraph kinds make conditional-inclusion rules testable without
/// string matching on the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    /// The letter date.
    DateLine,
    /// The addressee line (employer name).
    Addressee,
    /// The fixed subject line.
    Subject,
    /// The salutation.
    Salutation,
    /// The main body paragraph announcing the termination.
    Body,
    /// The notice-period paragraph (employer-initiated with notice only).
    Notice,
    /// The paragraph echoing the stated reason.
    Reason,
    /// The fixed courtesy paragraph.
    Courtesy,
    /// The optional final-accounts settlement request.
    Settlement,
    /// The closing formula.
    Closing,
    /// The signature line.
    Signature,
}

/// One paragraph of an assembled letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterParagraph {
    /// The role this paragraph plays in the letter.
    pub kind: ParagraphKind,
    /// The paragraph text.
    pub text: String,
}

/// Inputs for assembling a termination letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRequest {
    /// Full name of the worker.
    pub name: String,
    /// The worker's role.
    pub role: String,
    /// The employer's name.
    pub company: String,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Date the termination takes effect.
    pub end_date: NaiveDate,
    /// Who initiates the termination.
    pub letter_type: LetterType,
    /// Whether statutory notice is being given (employer-initiated only).
    pub notice_given: bool,
    /// Notice period in days, when notice is given.
    pub notice_days: Option<u32>,
    /// Free-text reason, echoed verbatim in the letter.
    pub reason: String,
    /// Whether to append the final-accounts settlement request.
    pub request_final_settlement: bool,
}

/// An assembled termination letter.
///
/// Paragraphs are ordered exactly as they appear in the rendered letter;
/// conditional paragraphs are simply absent when not applicable.
///
/// # Example
///
/// ```
/// use severance_engine::models::{LetterDocument, LetterParagraph, ParagraphKind};
/// use chrono::NaiveDate;
///
/// let document = LetterDocument {
///     generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     paragraphs: vec![LetterParagraph {
///         kind: ParagraphKind::Subject,
///         text: "Assunto: Rescisão do Contrato de Trabalho".to_string(),
///     }],
/// };
/// assert!(document.paragraph(ParagraphKind::Subject).is_some());
/// assert!(document.paragraph(ParagraphKind::Notice).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDocument {
    /// The date the letter was generated (display only).
    pub generated_on: NaiveDate,
    /// The ordered paragraphs of the letter.
    pub paragraphs: Vec<LetterParagraph>,
}

impl LetterDocument {
    /// Returns the first paragraph of the given kind, if present.
    pub fn paragraph(&self, kind: ParagraphKind) -> Option<&LetterParagraph> {
        self.paragraphs.iter().find(|p| p.kind == kind)
    }

    /// Renders the letter as plain text.
    ///
    /// Paragraphs are wrapped to a fixed width and separated by blank
    /// lines, in document order.
    pub fn to_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| textwrap::fill(&p.text, TEXT_RENDER_WIDTH))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

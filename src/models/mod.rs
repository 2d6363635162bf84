//! Core data models for the severance calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod compensation;
mod employment_period;
mod letter;
mod variant;

pub use breakdown::{
    BreakdownLine, ComponentKind, ComputationTrace, SeveranceBreakdown, TraceStep, TraceWarning,
};
pub use compensation::{CompensationInputs, EntitlementFlags};
pub use employment_period::{EmploymentPeriod, Tenure};
pub use letter::{LetterDocument, LetterParagraph, LetterRequest, LetterType, ParagraphKind};
pub use variant::{DismissalCategory, TerminationVariant};

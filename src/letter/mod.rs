//! Termination-letter assembly.
//!
//! This module turns a [`crate::models::LetterRequest`] into an ordered
//! [`crate::models::LetterDocument`] with the paragraphs a Portuguese
//! termination notice carries. Assembly is a pure template expansion; no
//! monetary values are involved.

mod assembler;

pub use assembler::{DEFAULT_NOTICE_DAYS, assemble_letter, format_letter_date};

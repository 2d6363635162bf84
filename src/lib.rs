//! Severance calculation engine for Portuguese labor-law terminations
//!
//! This crate estimates the amounts owed to a worker when an employment
//! contract ends under the Código do Trabalho (Lei n.º 7/2009), for both
//! voluntary resignations and employer-initiated dismissals, and assembles
//! termination-notice letters ready for export.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod letter;
pub mod models;

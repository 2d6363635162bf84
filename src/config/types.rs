//! Configuration types for the severance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the labor statute the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct LawMetadata {
    /// The human-readable name of the statute.
    pub name: String,
    /// The statute identifier (e.g., "Lei n.º 7/2009").
    pub statute: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// Statutory parameters used by the calculation rules.
///
/// These are legal-domain constants, not calendar-derived values. The
/// defaults carry the values in force; a config file may override them
/// when the statute changes.
///
/// # Example
///
/// ```
/// use severance_engine::config::StatutoryParams;
/// use rust_decimal::Decimal;
///
/// let params = StatutoryParams::default();
/// assert_eq!(params.working_days_per_month, Decimal::from(22));
/// assert_eq!(params.annual_training_hours, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryParams {
    /// Working days assumed per month (divisor for day rates).
    pub working_days_per_month: Decimal,
    /// Work hours assumed per month (divisor for hour rates).
    pub monthly_work_hours: Decimal,
    /// Vacation days accrued per full year of work.
    pub annual_vacation_days: Decimal,
    /// Mandatory training hours owed per year.
    pub annual_training_hours: u32,
    /// Salary multiplier per year of tenure for severance compensation.
    pub severance_multiplier: Decimal,
}

impl Default for StatutoryParams {
    fn default() -> Self {
        Self {
            working_days_per_month: Decimal::from(22),
            monthly_work_hours: Decimal::from(160),
            annual_vacation_days: Decimal::from(22),
            annual_training_hours: 40,
            // 0.66 of a month's salary per year of tenure (CT 366.º,
            // simplified single multiplier).
            severance_multiplier: Decimal::new(66, 2),
        }
    }
}

/// The complete loaded configuration.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Statute metadata.
    pub law: LawMetadata,
    /// Statutory calculation parameters.
    pub params: StatutoryParams,
}

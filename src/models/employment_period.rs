//! Employment period model and tenure representation.
//!
//! This module defines the [`EmploymentPeriod`] covered by a termination
//! calculation and the [`Tenure`] derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The span of an employment contract, from admission to exit.
///
/// Both dates are inclusive calendar dates. The period must satisfy
/// `start_date <= end_date <= today`; [`EmploymentPeriod::validate`]
/// enforces this before any computation runs.
///
/// # Example
///
/// ```
/// use severance_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let period = EmploymentPeriod {
///     start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// assert!(period.validate(today).is_ok());
/// assert_eq!(period.total_days(), 1095);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentPeriod {
    /// The date the worker was admitted.
    pub start_date: NaiveDate,
    /// The last day of the contract.
    pub end_date: NaiveDate,
}

impl EmploymentPeriod {
    /// Checks the period invariant `start_date <= end_date <= today`.
    ///
    /// Returns [`EngineError::InvalidDateOrder`] when the start date is
    /// after the end date, and [`EngineError::FutureEndDate`] when the end
    /// date lies beyond `today`. The conditions are checked in that order.
    pub fn validate(&self, today: NaiveDate) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidDateOrder {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        if self.end_date > today {
            return Err(EngineError::FutureEndDate {
                end_date: self.end_date,
                today,
            });
        }
        Ok(())
    }

    /// Returns the number of days between the start and end dates.
    ///
    /// A period starting and ending on the same day spans zero days.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Length of service expressed in the engine's calendar approximation.
///
/// Years use a 365.25-day year and months a 30.44-day month. These are
/// deliberate simplifications of the legal domain model, not calendar-exact
/// counts; derived amounts are defined relative to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Total days between admission and exit.
    pub total_days: i64,
    /// Whole approximated years of service.
    pub years: u32,
    /// Whole approximated months beyond the full years.
    pub months: u32,
}

//! Request types for the severance engine API.
//!
//! This module defines the JSON request structures for the calculation and
//! letter endpoints. Monetary and count fields deserialize leniently (see
//! [`super::parsing`]); dates are strict.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CompensationInputs, DismissalCategory, EmploymentPeriod, EntitlementFlags, LetterRequest,
    LetterType,
};

use super::parsing::{lenient_count, lenient_decimal, lenient_optional_count};

fn default_true() -> bool {
    true
}

/// Request body for the `/calculate/resignation` and `/calculate/dismissal`
/// endpoints.
///
/// The `dismissal` section is required by the dismissal endpoint and
/// ignored by the resignation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The worker's name (echoed in logs only, never in amounts).
    #[serde(default)]
    pub name: String,
    /// The employment period.
    pub period: PeriodRequest,
    /// Monetary and count inputs.
    pub compensation: CompensationRequest,
    /// Entitlement selections.
    #[serde(default)]
    pub entitlements: EntitlementsRequest,
    /// Dismissal details; required for the dismissal endpoint.
    #[serde(default)]
    pub dismissal: Option<DismissalRequest>,
}

/// Employment period in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The admission date.
    pub start_date: NaiveDate,
    /// The last day of the contract.
    pub end_date: NaiveDate,
}

/// Monetary and count inputs in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// Monthly base salary; number or locale-formatted string.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub monthly_salary: Decimal,
    /// Daily meal allowance; number or locale-formatted string.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub daily_meal_allowance: Decimal,
    /// Vacation days earned but not taken.
    #[serde(default, deserialize_with = "lenient_count")]
    pub unused_vacation_days: u32,
    /// Training hours received this year; absent when none were received.
    #[serde(default, deserialize_with = "lenient_optional_count")]
    pub training_hours_received: Option<u32>,
}

/// Entitlement selections in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementsRequest {
    /// Whether the pro-rated vacation subsidy is owed (defaults to yes).
    #[serde(default = "default_true")]
    pub vacation_subsidy: bool,
    /// Whether the pro-rated Christmas subsidy is owed (defaults to yes).
    #[serde(default = "default_true")]
    pub christmas_subsidy: bool,
    /// Whether the last month's salary is still owed.
    #[serde(default)]
    pub last_month_salary_unpaid: bool,
    /// Worked days in the exit month for rotating-shift schedules.
    #[serde(default, deserialize_with = "lenient_optional_count")]
    pub shift_days_worked: Option<u32>,
}

impl Default for EntitlementsRequest {
    fn default() -> Self {
        Self {
            vacation_subsidy: true,
            christmas_subsidy: true,
            last_month_salary_unpaid: false,
            shift_days_worked: None,
        }
    }
}

/// Dismissal details in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissalRequest {
    /// The legal category of the dismissal.
    pub category: DismissalCategory,
    /// Whether statutory notice was given (defaults to yes).
    #[serde(default = "default_true")]
    pub notice_given: bool,
}

/// Request body for the `/letter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterGenerationRequest {
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
    /// Whether statutory notice is being given (defaults to yes).
    #[serde(default = "default_true")]
    pub notice_given: bool,
    /// Notice period in days.
    #[serde(default, deserialize_with = "lenient_optional_count")]
    pub notice_days: Option<u32>,
    /// Free-text reason, echoed verbatim in the letter.
    #[serde(default)]
    pub reason: String,
    /// Whether to append the final-accounts settlement request
    /// (defaults to yes).
    #[serde(default = "default_true")]
    pub request_final_settlement: bool,
}

impl From<PeriodRequest> for EmploymentPeriod {
    fn from(req: PeriodRequest) -> Self {
        EmploymentPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<CompensationRequest> for CompensationInputs {
    fn from(req: CompensationRequest) -> Self {
        CompensationInputs {
            monthly_salary: req.monthly_salary,
            daily_meal_allowance: req.daily_meal_allowance,
            unused_vacation_days: req.unused_vacation_days,
            training_hours_received: req.training_hours_received,
        }
    }
}

impl From<EntitlementsRequest> for EntitlementFlags {
    fn from(req: EntitlementsRequest) -> Self {
        EntitlementFlags {
            vacation_subsidy: req.vacation_subsidy,
            christmas_subsidy: req.christmas_subsidy,
            last_month_salary_unpaid: req.last_month_salary_unpaid,
            shift_days_worked: req.shift_days_worked,
        }
    }
}

impl From<LetterGenerationRequest> for LetterRequest {
    fn from(req: LetterGenerationRequest) -> Self {
        LetterRequest {
            name: req.name,
            role: req.role,
            company: req.company,
            start_date: req.start_date,
            end_date: req.end_date,
            letter_type: req.letter_type,
            notice_given: req.notice_given,
            notice_days: req.notice_days,
            reason: req.reason,
            request_final_settlement: req.request_final_settlement,
        }
    }
}

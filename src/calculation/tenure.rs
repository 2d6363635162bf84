//! Length-of-service calculation.
//!
//! Tenure uses the engine's calendar approximation: a 365.25-day year and
//! a 30.44-day month. Derived amounts (severance compensation,
//! proportional vacation) are defined relative to these constants, so they
//! are never "corrected" to calendar-exact arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{EmploymentPeriod, Tenure, TraceStep};

/// Days in an approximated year.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Days in an approximated month.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// The result of a tenure calculation, including the trace step.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// The computed length of service.
    pub tenure: Tenure,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Computes the worker's length of service for an employment period.
///
/// `total_days` is the exact day difference between the start and end
/// dates; `years` is `floor(total_days / 365.25)` and `months` is
/// `floor((total_days mod 365.25) / 30.44)`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_tenure;
/// use severance_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let period = EmploymentPeriod {
///     start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// let result = calculate_tenure(&period, 1);
/// assert_eq!(result.tenure.total_days, 1095);
/// assert_eq!(result.tenure.years, 2);
/// assert_eq!(result.tenure.months, 11);
/// ```
pub fn calculate_tenure(period: &EmploymentPeriod, step_number: u32) -> TenureResult {
    let total_days = period.total_days();
    let days = Decimal::from(total_days);

    let years = (days / DAYS_PER_YEAR).floor().to_u32().unwrap_or(0);
    let months = ((days % DAYS_PER_YEAR) / DAYS_PER_MONTH)
        .floor()
        .to_u32()
        .unwrap_or(0);

    let tenure = Tenure {
        total_days,
        years,
        months,
    };

    let trace_step = TraceStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Length of Service".to_string(),
        clause_ref: "—".to_string(),
        input: serde_json::json!({
            "start_date": period.start_date,
            "end_date": period.end_date,
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "years": years,
            "months": months,
        }),
        reasoning: format!(
            "{} days ÷ {} = {} full years, remainder {} months",
            total_days,
            DAYS_PER_YEAR.normalize(),
            years,
            months
        ),
    };

    TenureResult { tenure, trace_step }
}

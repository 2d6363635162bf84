//! Meal-allowance accrual for the exit month.
//!
//! The allowance is owed per worked day from the first of the exit month
//! through the exit day. Workers on a regular schedule are assumed to work
//! Monday through Friday; rotating-shift workers supply their worked-day
//! count directly.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{BreakdownLine, ComponentKind, TraceStep};

/// The clause reference for the meal allowance.
pub const MEAL_ALLOWANCE_CLAUSE: &str = "CT 260.º";

/// The result of a meal-allowance calculation.
#[derive(Debug, Clone)]
pub struct MealAllowanceResult {
    /// The breakdown line, when the amount is non-zero.
    pub line: Option<BreakdownLine>,
    /// The worked-day count the payout was based on.
    pub counted_days: u32,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Counts the weekdays (Monday–Friday) from the first of the exit month
/// through the exit day, inclusive.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::weekdays_through_exit_day;
/// use chrono::NaiveDate;
///
/// // May 2023 starts on a Monday; May 1–15 holds 11 weekdays.
/// let exit = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
/// assert_eq!(weekdays_through_exit_day(exit), 11);
/// ```
pub fn weekdays_through_exit_day(exit_date: NaiveDate) -> u32 {
    (1..=exit_date.day())
        .filter_map(|day| NaiveDate::from_ymd_opt(exit_date.year(), exit_date.month(), day))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

/// Calculates the meal-allowance payout for the exit month.
///
/// # Arguments
///
/// * `exit_date` - The last day of the contract
/// * `daily_allowance` - The meal allowance per worked day
/// * `shift_days_worked` - Worked-day count supplied directly for
///   rotating-shift schedules; `None` derives the count from weekdays
/// * `step_number` - The step number for trace sequencing
pub fn calculate_meal_allowance(
    exit_date: NaiveDate,
    daily_allowance: Decimal,
    shift_days_worked: Option<u32>,
    step_number: u32,
) -> MealAllowanceResult {
    let weekday_count = weekdays_through_exit_day(exit_date);
    let counted_days = shift_days_worked.unwrap_or(weekday_count);
    let amount = daily_allowance * Decimal::from(counted_days);

    let schedule = if shift_days_worked.is_some() {
        "rotating shifts (days supplied)"
    } else {
        "regular (weekdays counted)"
    };

    let trace_step = TraceStep {
        step_number,
        rule_id: "meal_allowance".to_string(),
        rule_name: "Meal Allowance".to_string(),
        clause_ref: MEAL_ALLOWANCE_CLAUSE.to_string(),
        input: serde_json::json!({
            "exit_date": exit_date,
            "daily_allowance": daily_allowance.normalize().to_string(),
            "schedule": schedule,
        }),
        output: serde_json::json!({
            "counted_days": counted_days,
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} worked days in the exit month × {} = {}",
            counted_days,
            daily_allowance.normalize(),
            amount.normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::MealAllowance,
        description: format!("Meal allowance ({} days in the exit month)", counted_days),
        amount,
        clause_ref: MEAL_ALLOWANCE_CLAUSE.to_string(),
    });

    MealAllowanceResult {
        line,
        counted_days,
        trace_step,
    }
}

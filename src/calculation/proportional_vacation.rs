//! Proportional-vacation payout calculation (resignation only).
//!
//! A worker who resigns is also owed the vacation days accrued pro rata in
//! the exit year: `(22 / 12) * tenure_months` days, paid at the standard
//! day rate. The dismissal calculator has no counterpart for this rule.

use rust_decimal::Decimal;

use crate::config::StatutoryParams;
use crate::models::{BreakdownLine, ComponentKind, TraceStep};

/// The clause reference for proportional vacation.
pub const PROPORTIONAL_VACATION_CLAUSE: &str = "CT 245.º";

/// Months in a year, for vacation-day accrual.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of a proportional-vacation calculation.
#[derive(Debug, Clone)]
pub struct ProportionalVacationResult {
    /// The breakdown line, when the amount is non-zero.
    pub line: Option<BreakdownLine>,
    /// The accrued vacation days.
    pub accrued_days: Decimal,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Calculates the payout for vacation days accrued pro rata.
///
/// `months` is the months component of the worker's tenure; zero months
/// accrue zero days and emit no line.
pub fn calculate_proportional_vacation(
    monthly_salary: Decimal,
    months: u32,
    params: &StatutoryParams,
    step_number: u32,
) -> ProportionalVacationResult {
    let accrued_days = params.annual_vacation_days / MONTHS_PER_YEAR * Decimal::from(months);
    let day_rate = monthly_salary / params.working_days_per_month;
    let amount = day_rate * accrued_days;

    let trace_step = TraceStep {
        step_number,
        rule_id: "proportional_vacation".to_string(),
        rule_name: "Proportional Vacation".to_string(),
        clause_ref: PROPORTIONAL_VACATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "tenure_months": months,
            "annual_vacation_days": params.annual_vacation_days.normalize().to_string(),
        }),
        output: serde_json::json!({
            "accrued_days": accrued_days.round_dp(1).normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{}/12 × {} months = {} accrued days at day rate {}",
            params.annual_vacation_days.normalize(),
            months,
            accrued_days.round_dp(1).normalize(),
            day_rate.round_dp(2).normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::ProportionalVacation,
        description: format!(
            "Proportional vacation ({} days accrued)",
            accrued_days.round_dp(1).normalize()
        ),
        amount,
        clause_ref: PROPORTIONAL_VACATION_CLAUSE.to_string(),
    });

    ProportionalVacationResult {
        line,
        accrued_days,
        trace_step,
    }
}

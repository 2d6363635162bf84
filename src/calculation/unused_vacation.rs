//! Unused-vacation payout calculation.
//!
//! Vacation days earned but not taken by the exit date are paid out at the
//! day rate `monthly_salary / 22`, with 22 the assumed working days per
//! month — a fixed constant of the model, not derived from the calendar.

use rust_decimal::Decimal;

use crate::config::StatutoryParams;
use crate::models::{BreakdownLine, ComponentKind, TraceStep};

/// The clause reference for unused-vacation payout.
pub const UNUSED_VACATION_CLAUSE: &str = "CT 245.º";

/// The result of an unused-vacation calculation.
#[derive(Debug, Clone)]
pub struct UnusedVacationResult {
    /// The breakdown line, when the amount is non-zero.
    pub line: Option<BreakdownLine>,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Calculates the payout for earned but untaken vacation days.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_unused_vacation;
/// use severance_engine::config::StatutoryParams;
/// use rust_decimal::Decimal;
///
/// let params = StatutoryParams::default();
/// let result = calculate_unused_vacation(Decimal::from(2200), 10, &params, 1);
/// assert_eq!(result.line.unwrap().amount, Decimal::from(1000));
/// ```
pub fn calculate_unused_vacation(
    monthly_salary: Decimal,
    unused_days: u32,
    params: &StatutoryParams,
    step_number: u32,
) -> UnusedVacationResult {
    let day_rate = monthly_salary / params.working_days_per_month;
    let amount = day_rate * Decimal::from(unused_days);

    let trace_step = TraceStep {
        step_number,
        rule_id: "unused_vacation".to_string(),
        rule_name: "Unused Vacation".to_string(),
        clause_ref: UNUSED_VACATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "unused_days": unused_days,
            "working_days_per_month": params.working_days_per_month.normalize().to_string(),
        }),
        output: serde_json::json!({
            "day_rate": day_rate.normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} ÷ {} × {} untaken days = {}",
            monthly_salary.normalize(),
            params.working_days_per_month.normalize(),
            unused_days,
            amount.normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::UnusedVacation,
        description: format!("Unused vacation ({} days)", unused_days),
        amount,
        clause_ref: UNUSED_VACATION_CLAUSE.to_string(),
    });

    UnusedVacationResult { line, trace_step }
}

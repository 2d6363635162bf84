//! Training-hour shortfall payout calculation.
//!
//! Workers are entitled to 40 hours of employer-provided training per
//! year. Hours not provided by the exit date are paid out at the hour rate
//! `monthly_salary / 160`, with 160 the assumed monthly work hours.

use rust_decimal::Decimal;

use crate::config::StatutoryParams;
use crate::models::{BreakdownLine, ComponentKind, TraceStep};

/// The clause reference for the training-hour credit.
pub const TRAINING_HOURS_CLAUSE: &str = "CT 134.º";

/// The result of a training-shortfall calculation.
#[derive(Debug, Clone)]
pub struct TrainingShortfallResult {
    /// The breakdown line, when the amount is non-zero.
    pub line: Option<BreakdownLine>,
    /// The unprovided hours being paid out.
    pub shortfall_hours: u32,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Calculates the payout for the training-hour shortfall.
///
/// `hours_received` is `None` when the worker received no training this
/// year, in which case the full annual entitlement is owed. Hours received
/// at or above the entitlement leave no shortfall.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_training_shortfall;
/// use severance_engine::config::StatutoryParams;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = StatutoryParams::default();
/// let result = calculate_training_shortfall(Decimal::from(1000), None, &params, 1);
/// assert_eq!(result.shortfall_hours, 40);
/// assert_eq!(
///     result.line.unwrap().amount,
///     Decimal::from_str("250").unwrap()
/// );
/// ```
pub fn calculate_training_shortfall(
    monthly_salary: Decimal,
    hours_received: Option<u32>,
    params: &StatutoryParams,
    step_number: u32,
) -> TrainingShortfallResult {
    let received = hours_received.unwrap_or(0);
    let shortfall_hours = params.annual_training_hours.saturating_sub(received);

    let hour_rate = monthly_salary / params.monthly_work_hours;
    let amount = hour_rate * Decimal::from(shortfall_hours);

    let trace_step = TraceStep {
        step_number,
        rule_id: "training_hours".to_string(),
        rule_name: "Training-hour Shortfall".to_string(),
        clause_ref: TRAINING_HOURS_CLAUSE.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "hours_received": received,
            "annual_training_hours": params.annual_training_hours,
        }),
        output: serde_json::json!({
            "shortfall_hours": shortfall_hours,
            "hour_rate": hour_rate.normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} of {} annual training hours received; {}h shortfall × hour rate {} = {}",
            received,
            params.annual_training_hours,
            shortfall_hours,
            hour_rate.round_dp(2).normalize(),
            amount.normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::TrainingHours,
        description: format!("Training hours not provided ({}h)", shortfall_hours),
        amount,
        clause_ref: TRAINING_HOURS_CLAUSE.to_string(),
    });

    TrainingShortfallResult {
        line,
        shortfall_hours,
        trace_step,
    }
}

//! Severance compensation for employer-initiated dismissals.
//!
//! Collective dismissals, business closures and dismissals without just
//! cause entitle the worker to compensation proportional to tenure:
//! `years × monthly_salary × 0.66` (simplified single multiplier of
//! CT 366.º). A dismissal with just cause owes nothing.

use rust_decimal::Decimal;

use crate::config::StatutoryParams;
use crate::models::{BreakdownLine, ComponentKind, DismissalCategory, TraceStep};

/// The clause reference for severance compensation.
pub const SEVERANCE_COMPENSATION_CLAUSE: &str = "CT 366.º";

/// The result of a severance-compensation calculation.
#[derive(Debug, Clone)]
pub struct SeveranceCompensationResult {
    /// The breakdown line, when the category qualifies and the amount is
    /// non-zero.
    pub line: Option<BreakdownLine>,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Calculates severance compensation for a dismissal.
///
/// # Arguments
///
/// * `monthly_salary` - The monthly base salary
/// * `years` - Whole approximated years of tenure
/// * `category` - The dismissal category driving eligibility
/// * `params` - Statutory parameters (supplies the multiplier)
/// * `step_number` - The step number for trace sequencing
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_severance_compensation;
/// use severance_engine::config::StatutoryParams;
/// use severance_engine::models::DismissalCategory;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = StatutoryParams::default();
/// let result = calculate_severance_compensation(
///     Decimal::from(1000),
///     2,
///     DismissalCategory::Collective,
///     &params,
///     1,
/// );
/// assert_eq!(
///     result.line.unwrap().amount,
///     Decimal::from_str("1320").unwrap()
/// );
/// ```
pub fn calculate_severance_compensation(
    monthly_salary: Decimal,
    years: u32,
    category: DismissalCategory,
    params: &StatutoryParams,
    step_number: u32,
) -> SeveranceCompensationResult {
    if !category.entitles_compensation() {
        let trace_step = TraceStep {
            step_number,
            rule_id: "severance_compensation".to_string(),
            rule_name: "Severance Compensation".to_string(),
            clause_ref: SEVERANCE_COMPENSATION_CLAUSE.to_string(),
            input: serde_json::json!({
                "category": category,
                "eligible": false,
            }),
            output: serde_json::json!({
                "amount": "0.00",
            }),
            reasoning: "Dismissal with just cause - no compensation owed".to_string(),
        };
        return SeveranceCompensationResult {
            line: None,
            trace_step,
        };
    }

    let amount = Decimal::from(years) * monthly_salary * params.severance_multiplier;

    let trace_step = TraceStep {
        step_number,
        rule_id: "severance_compensation".to_string(),
        rule_name: "Severance Compensation".to_string(),
        clause_ref: SEVERANCE_COMPENSATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "category": category,
            "eligible": true,
            "monthly_salary": monthly_salary.normalize().to_string(),
            "years": years,
            "multiplier": params.severance_multiplier.normalize().to_string(),
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} years × {} × {} = {}",
            years,
            monthly_salary.normalize(),
            params.severance_multiplier.normalize(),
            amount.normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::SeveranceCompensation,
        description: format!("Severance compensation ({} years of service)", years),
        amount,
        clause_ref: SEVERANCE_COMPENSATION_CLAUSE.to_string(),
    });

    SeveranceCompensationResult { line, trace_step }
}

//! The composing calculation engine.
//!
//! [`compute_breakdown`] validates the employment period, runs every
//! applicable rule in a fixed order, and assembles the itemized
//! [`SeveranceBreakdown`]. The two calculator variants share all common
//! rules; only the variant-specific terms differ.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::StatutoryParams;
use crate::error::EngineResult;
use crate::models::{
    BreakdownLine, CompensationInputs, ComponentKind, ComputationTrace, EntitlementFlags,
    EmploymentPeriod, SeveranceBreakdown, TerminationVariant, TraceStep, TraceWarning,
};

use super::meal_allowance::calculate_meal_allowance;
use super::outstanding_salary::calculate_outstanding_salary;
use super::proportional_vacation::calculate_proportional_vacation;
use super::prorated_subsidy::{SubsidyKind, calculate_prorated_subsidy};
use super::severance_compensation::calculate_severance_compensation;
use super::tenure::calculate_tenure;
use super::training_hours::calculate_training_shortfall;
use super::unused_vacation::calculate_unused_vacation;

/// Computes the full severance breakdown for a termination.
///
/// The period invariant (`start <= end <= today`) is checked first; no
/// monetary rule runs when it fails. Rules that produce a zero or
/// inapplicable amount are recorded in the trace but emit no breakdown
/// line, so the total always equals the exact sum of the emitted lines.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::compute_breakdown;
/// use severance_engine::config::StatutoryParams;
/// use severance_engine::models::{
///     CompensationInputs, EmploymentPeriod, EntitlementFlags, TerminationVariant,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = EmploymentPeriod {
///     start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// let compensation = CompensationInputs {
///     monthly_salary: Decimal::from(1000),
///     daily_meal_allowance: Decimal::from(6),
///     unused_vacation_days: 10,
///     training_hours_received: None,
/// };
/// let entitlements = EntitlementFlags {
///     vacation_subsidy: true,
///     christmas_subsidy: true,
///     last_month_salary_unpaid: false,
///     shift_days_worked: None,
/// };
/// let breakdown = compute_breakdown(
///     &period,
///     &compensation,
///     &entitlements,
///     TerminationVariant::Resignation,
///     &StatutoryParams::default(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
/// )
/// .unwrap();
///
/// let sum: Decimal = breakdown.lines.iter().map(|l| l.amount).sum();
/// assert_eq!(breakdown.total, sum);
/// ```
pub fn compute_breakdown(
    period: &EmploymentPeriod,
    compensation: &CompensationInputs,
    entitlements: &EntitlementFlags,
    variant: TerminationVariant,
    params: &StatutoryParams,
    today: NaiveDate,
) -> EngineResult<SeveranceBreakdown> {
    let started = Instant::now();

    period.validate(today)?;

    let mut lines: Vec<BreakdownLine> = Vec::new();
    let mut steps: Vec<TraceStep> = Vec::new();
    let mut warnings: Vec<TraceWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let salary = compensation.monthly_salary;

    let tenure_result = calculate_tenure(period, step_number);
    let tenure = tenure_result.tenure;
    steps.push(tenure_result.trace_step);
    step_number += 1;

    // Variant lead components.
    match variant {
        TerminationVariant::Resignation => {
            let outstanding = calculate_outstanding_salary(
                salary,
                entitlements.last_month_salary_unpaid,
                step_number,
            );
            lines.extend(outstanding.line);
            steps.push(outstanding.trace_step);
            step_number += 1;

            let proportional =
                calculate_proportional_vacation(salary, tenure.months, params, step_number);
            lines.extend(proportional.line);
            steps.push(proportional.trace_step);
            step_number += 1;
        }
        TerminationVariant::Dismissal { .. } => {
            // The exit-month base salary is always owed on dismissal.
            let base_step = TraceStep {
                step_number,
                rule_id: "base_salary".to_string(),
                rule_name: "Base Salary".to_string(),
                clause_ref: "CT 278.º".to_string(),
                input: serde_json::json!({
                    "monthly_salary": salary.normalize().to_string(),
                }),
                output: serde_json::json!({
                    "amount": salary.normalize().to_string(),
                }),
                reasoning: "Exit-month base salary owed on dismissal".to_string(),
            };
            steps.push(base_step);
            step_number += 1;

            if salary > Decimal::ZERO {
                lines.push(BreakdownLine {
                    component: ComponentKind::BaseSalary,
                    description: "Base salary for the exit month".to_string(),
                    amount: salary,
                    clause_ref: "CT 278.º".to_string(),
                });
            }
        }
    }

    // Shared components.
    for kind in [SubsidyKind::Vacation, SubsidyKind::Christmas] {
        let entitled = match kind {
            SubsidyKind::Vacation => entitlements.vacation_subsidy,
            SubsidyKind::Christmas => entitlements.christmas_subsidy,
        };
        let subsidy = calculate_prorated_subsidy(kind, period, salary, entitled, step_number);
        lines.extend(subsidy.line);
        steps.push(subsidy.trace_step);
        step_number += 1;
    }

    let unused = calculate_unused_vacation(
        salary,
        compensation.unused_vacation_days,
        params,
        step_number,
    );
    lines.extend(unused.line);
    steps.push(unused.trace_step);
    step_number += 1;

    if let TerminationVariant::Dismissal {
        category,
        notice_given,
    } = variant
    {
        let severance =
            calculate_severance_compensation(salary, tenure.years, category, params, step_number);
        lines.extend(severance.line);
        steps.push(severance.trace_step);
        step_number += 1;

        if !notice_given {
            warnings.push(TraceWarning {
                code: "NOTICE_NOT_GIVEN".to_string(),
                message: "Statutory notice was not given; compensation in lieu of notice \
                          is not included in this estimate"
                    .to_string(),
                severity: "medium".to_string(),
            });
        }
    }

    let training = calculate_training_shortfall(
        salary,
        compensation.training_hours_received,
        params,
        step_number,
    );
    lines.extend(training.line);
    steps.push(training.trace_step);
    step_number += 1;

    let meal = calculate_meal_allowance(
        period.end_date,
        compensation.daily_meal_allowance,
        entitlements.shift_days_worked,
        step_number,
    );
    lines.extend(meal.line);
    steps.push(meal.trace_step);

    let total: Decimal = lines.iter().map(|l| l.amount).sum();
    let duration_us = started.elapsed().as_micros() as u64;

    Ok(SeveranceBreakdown {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        variant,
        tenure,
        lines,
        total,
        trace: ComputationTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

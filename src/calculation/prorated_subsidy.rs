//! Pro-rated statutory subsidy calculation.
//!
//! Workers leaving mid-year are owed the vacation and Christmas subsidies
//! in proportion to the days worked in the exit year. Both subsidies share
//! the same formula and differ only in the entitlement flag and clause, so
//! one rule handles both, parameterized by [`SubsidyKind`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BreakdownLine, ComponentKind, EmploymentPeriod, TraceStep};

/// Denominator for subsidy proration (days in the subsidy year).
pub const SUBSIDY_YEAR_DAYS: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Which statutory subsidy is being pro-rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsidyKind {
    /// Vacation subsidy (subsídio de férias).
    Vacation,
    /// Christmas subsidy (subsídio de Natal).
    Christmas,
}

impl SubsidyKind {
    fn rule_id(&self) -> &'static str {
        match self {
            SubsidyKind::Vacation => "vacation_subsidy",
            SubsidyKind::Christmas => "christmas_subsidy",
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            SubsidyKind::Vacation => "Pro-rated Vacation Subsidy",
            SubsidyKind::Christmas => "Pro-rated Christmas Subsidy",
        }
    }

    fn clause_ref(&self) -> &'static str {
        match self {
            SubsidyKind::Vacation => "CT 264.º",
            SubsidyKind::Christmas => "CT 263.º",
        }
    }

    fn component(&self) -> ComponentKind {
        match self {
            SubsidyKind::Vacation => ComponentKind::VacationSubsidy,
            SubsidyKind::Christmas => ComponentKind::ChristmasSubsidy,
        }
    }
}

/// The result of a pro-rated subsidy calculation.
#[derive(Debug, Clone)]
pub struct ProratedSubsidyResult {
    /// The breakdown line, when the worker is entitled and the amount is
    /// non-zero.
    pub line: Option<BreakdownLine>,
    /// The trace step recording this calculation.
    pub trace_step: TraceStep,
}

/// Counts the days worked in the exit year, inclusive of both endpoints.
///
/// The count runs from the later of the start date and January 1 of the
/// exit year through the end date.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::days_worked_in_exit_year;
/// use severance_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let period = EmploymentPeriod {
///     start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
/// };
/// // January 1 through January 31, inclusive.
/// assert_eq!(days_worked_in_exit_year(&period), 31);
/// ```
pub fn days_worked_in_exit_year(period: &EmploymentPeriod) -> i64 {
    let jan_first = NaiveDate::from_ymd_opt(period.end_date.year(), 1, 1);
    let count_from = match jan_first {
        Some(jan) if period.start_date < jan => jan,
        _ => period.start_date,
    };
    (period.end_date - count_from).num_days() + 1
}

/// Calculates a pro-rated statutory subsidy for the exit year.
///
/// The subsidy equals `monthly_salary * days_worked_in_exit_year / 365`
/// when the worker is entitled to it, and nothing otherwise.
///
/// # Arguments
///
/// * `kind` - Which subsidy to pro-rate
/// * `period` - The employment period (supplies the exit-year day count)
/// * `monthly_salary` - The monthly base salary
/// * `entitled` - Whether the worker is owed this subsidy
/// * `step_number` - The step number for trace sequencing
pub fn calculate_prorated_subsidy(
    kind: SubsidyKind,
    period: &EmploymentPeriod,
    monthly_salary: Decimal,
    entitled: bool,
    step_number: u32,
) -> ProratedSubsidyResult {
    if !entitled {
        let trace_step = TraceStep {
            step_number,
            rule_id: kind.rule_id().to_string(),
            rule_name: kind.rule_name().to_string(),
            clause_ref: kind.clause_ref().to_string(),
            input: serde_json::json!({
                "entitled": false,
            }),
            output: serde_json::json!({
                "amount": "0.00",
            }),
            reasoning: format!("Worker not entitled to the {}", kind.rule_name().to_lowercase()),
        };
        return ProratedSubsidyResult {
            line: None,
            trace_step,
        };
    }

    let days = days_worked_in_exit_year(period);
    let fraction = Decimal::from(days) / SUBSIDY_YEAR_DAYS;
    let amount = monthly_salary * fraction;

    let trace_step = TraceStep {
        step_number,
        rule_id: kind.rule_id().to_string(),
        rule_name: kind.rule_name().to_string(),
        clause_ref: kind.clause_ref().to_string(),
        input: serde_json::json!({
            "entitled": true,
            "monthly_salary": monthly_salary.normalize().to_string(),
            "days_worked_in_exit_year": days,
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} × {}/365 days worked this year = {}",
            monthly_salary.normalize(),
            days,
            amount.normalize()
        ),
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: kind.component(),
        description: format!("{} ({} days worked this year)", kind.rule_name(), days),
        amount,
        clause_ref: kind.clause_ref().to_string(),
    });

    ProratedSubsidyResult { line, trace_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period(start: &str, end: &str) -> EmploymentPeriod {
        EmploymentPeriod {
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        }
    }

    /// PS-001: exit-year count starts at January 1 for older admissions
    #[test]
    fn test_ps_001_exit_year_count_from_january() {
        let p = period("2018-09-15", "2023-03-31");
        // Jan 1 .. Mar 31 2023 = 31 + 28 + 31 = 90 days
        assert_eq!(days_worked_in_exit_year(&p), 90);
    }

    /// PS-002: admissions within the exit year count from the start date
    #[test]
    fn test_ps_002_exit_year_count_from_start_date() {
        let p = period("2023-03-01", "2023-03-31");
        assert_eq!(days_worked_in_exit_year(&p), 31);
    }

    /// PS-003: same-day period counts a single day
    #[test]
    fn test_ps_003_same_day_counts_one() {
        let p = period("2023-03-01", "2023-03-01");
        assert_eq!(days_worked_in_exit_year(&p), 1);
    }

    /// PS-004: a full non-leap exit year pays the whole subsidy
    #[test]
    fn test_ps_004_full_year_pays_full_subsidy() {
        let p = period("2020-06-01", "2023-12-31");
        assert_eq!(days_worked_in_exit_year(&p), 365);

        let result =
            calculate_prorated_subsidy(SubsidyKind::Vacation, &p, dec("1000"), true, 1);
        let line = result.line.unwrap();
        assert_eq!(line.amount, dec("1000"));
        assert_eq!(line.component, ComponentKind::VacationSubsidy);
        assert_eq!(line.clause_ref, "CT 264.º");
    }

    /// PS-005: not entitled yields no line but a trace step
    #[test]
    fn test_ps_005_not_entitled_yields_no_line() {
        let p = period("2020-06-01", "2023-06-30");
        let result =
            calculate_prorated_subsidy(SubsidyKind::Christmas, &p, dec("1000"), false, 3);

        assert!(result.line.is_none());
        assert_eq!(result.trace_step.step_number, 3);
        assert_eq!(result.trace_step.rule_id, "christmas_subsidy");
        assert!(result.trace_step.reasoning.contains("not entitled"));
    }

    /// PS-006: both kinds share the formula, differing in clause refs
    #[test]
    fn test_ps_006_kinds_share_formula() {
        let p = period("2018-01-01", "2023-06-30");
        let salary = dec("1500");

        let vacation =
            calculate_prorated_subsidy(SubsidyKind::Vacation, &p, salary, true, 1);
        let christmas =
            calculate_prorated_subsidy(SubsidyKind::Christmas, &p, salary, true, 2);

        let v = vacation.line.unwrap();
        let c = christmas.line.unwrap();
        assert_eq!(v.amount, c.amount);
        assert_eq!(v.clause_ref, "CT 264.º");
        assert_eq!(c.clause_ref, "CT 263.º");
    }

    #[test]
    fn test_zero_salary_yields_no_line() {
        let p = period("2020-06-01", "2023-06-30");
        let result =
            calculate_prorated_subsidy(SubsidyKind::Vacation, &p, Decimal::ZERO, true, 1);
        assert!(result.line.is_none());
        assert_eq!(result.trace_step.output["amount"], "0");
    }

    #[test]
    fn test_amount_matches_formula() {
        let p = period("2018-01-01", "2023-06-30");
        // Jan 1 .. Jun 30 = 181 days
        assert_eq!(days_worked_in_exit_year(&p), 181);

        let result =
            calculate_prorated_subsidy(SubsidyKind::Vacation, &p, dec("1000"), true, 1);
        let expected = dec("1000") * (Decimal::from(181) / SUBSIDY_YEAR_DAYS);
        assert_eq!(result.line.unwrap().amount, expected);
    }
}

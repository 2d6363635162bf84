//! Result models for a severance calculation.
//!
//! This module contains the [`SeveranceBreakdown`] type and its associated
//! structures that capture all outputs from a termination calculation:
//! itemized breakdown lines, the total owed, and a computation trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Tenure, TerminationVariant};

/// Identifies a component of the amount owed at termination.
///
/// # Example
///
/// ```
/// use severance_engine::models::ComponentKind;
///
/// let kind = ComponentKind::SeveranceCompensation;
/// assert_eq!(format!("{:?}", kind), "SeveranceCompensation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Base salary for the exit month (dismissal only).
    BaseSalary,
    /// Last month's salary still owed (resignation only).
    OutstandingSalary,
    /// Pro-rated vacation subsidy for the exit year.
    VacationSubsidy,
    /// Pro-rated Christmas subsidy for the exit year.
    ChristmasSubsidy,
    /// Vacation days accrued pro rata in the exit year (resignation only).
    ProportionalVacation,
    /// Payment for earned vacation days not taken.
    UnusedVacation,
    /// Severance compensation for eligible dismissal categories.
    SeveranceCompensation,
    /// Payment for the mandatory-training-hour shortfall.
    TrainingHours,
    /// Meal allowance accrued over the exit month.
    MealAllowance,
}

/// A single line item of a severance breakdown.
///
/// Each line carries the component it belongs to, a display description,
/// the amount owed, and the Código do Trabalho clause that justifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The component this line belongs to.
    pub component: ComponentKind,
    /// Human-readable description of the line.
    pub description: String,
    /// The amount owed for this component.
    pub amount: Decimal,
    /// Reference to the labor-code clause that justifies this line.
    pub clause_ref: String,
}

/// A single step in the computation trace recording a rule application.
///
/// Each step captures the input, output, and reasoning for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the labor-code clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a calculation.
///
/// Warnings indicate conditions that don't change the amounts but may
/// require attention, such as a dismissal without statutory notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete trace for a calculation.
///
/// Records every rule decision made during the computation, including
/// rules that produced no breakdown line (zero or ineligible components).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<TraceStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<TraceWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a severance calculation.
///
/// Freshly constructed on every computation, never mutated afterwards.
/// The `total` always equals the exact sum of the line amounts; zero
/// components are recorded in the trace but emit no line.
///
/// # Example
///
/// ```
/// use severance_engine::models::{
///     ComputationTrace, SeveranceBreakdown, Tenure, TerminationVariant,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let breakdown = SeveranceBreakdown {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     variant: TerminationVariant::Resignation,
///     tenure: Tenure { total_days: 0, years: 0, months: 0 },
///     lines: vec![],
///     total: Decimal::ZERO,
///     trace: ComputationTrace { steps: vec![], warnings: vec![], duration_us: 0 },
/// };
/// assert!(breakdown.lines.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The variant the calculation ran as.
    pub variant: TerminationVariant,
    /// The worker's length of service.
    pub tenure: Tenure,
    /// Itemized components of the amount owed.
    pub lines: Vec<BreakdownLine>,
    /// Total estimated amount owed; sum of all line amounts.
    pub total: Decimal,
    /// Complete trace of rule decisions.
    pub trace: ComputationTrace,
}

impl SeveranceBreakdown {
    /// Returns the line for the given component, if one was emitted.
    pub fn line(&self, component: ComponentKind) -> Option<&BreakdownLine> {
        self.lines.iter().find(|l| l.component == component)
    }

    /// Returns the amount for the given component, zero when absent.
    pub fn amount(&self, component: ComponentKind) -> Decimal {
        self.line(component).map(|l| l.amount).unwrap_or(Decimal::ZERO)
    }
}

//! Outstanding-salary rule.
//!
//! When the last month's salary has not been paid, the full monthly salary
//! joins the amounts owed.

use rust_decimal::Decimal;

use crate::models::{BreakdownLine, ComponentKind, TraceStep};

/// The clause reference for salary payment.
pub const OUTSTANDING_SALARY_CLAUSE: &str = "CT 278.º";

/// The result of an outstanding-salary check.
#[derive(Debug, Clone)]
pub struct OutstandingSalaryResult {
    /// The breakdown line, when salary is owed.
    pub line: Option<BreakdownLine>,
    /// The trace step recording this check.
    pub trace_step: TraceStep,
}

/// Adds the full monthly salary when the last month was not paid.
pub fn calculate_outstanding_salary(
    monthly_salary: Decimal,
    last_month_unpaid: bool,
    step_number: u32,
) -> OutstandingSalaryResult {
    let amount = if last_month_unpaid {
        monthly_salary
    } else {
        Decimal::ZERO
    };

    let trace_step = TraceStep {
        step_number,
        rule_id: "outstanding_salary".to_string(),
        rule_name: "Outstanding Salary".to_string(),
        clause_ref: OUTSTANDING_SALARY_CLAUSE.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "last_month_unpaid": last_month_unpaid,
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning: if last_month_unpaid {
            format!("Last month unpaid; {} owed", monthly_salary.normalize())
        } else {
            "Last month already paid".to_string()
        },
    };

    let line = (amount > Decimal::ZERO).then(|| BreakdownLine {
        component: ComponentKind::OutstandingSalary,
        description: "Outstanding salary (last month unpaid)".to_string(),
        amount,
        clause_ref: OUTSTANDING_SALARY_CLAUSE.to_string(),
    });

    OutstandingSalaryResult { line, trace_step }
}

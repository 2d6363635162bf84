//! Calculation logic for the severance engine.
//!
//! This module contains the calculation rules for determining the amounts
//! owed at termination: length of service, pro-rated statutory subsidies,
//! unused and proportional vacation payouts, training-hour shortfall,
//! meal-allowance accrual, severance compensation and outstanding salary,
//! plus the composing engine that runs them in order.

mod engine;
mod meal_allowance;
mod outstanding_salary;
mod proportional_vacation;
mod prorated_subsidy;
mod severance_compensation;
mod tenure;
mod training_hours;
mod unused_vacation;

pub use engine::compute_breakdown;
pub use meal_allowance::{
    MEAL_ALLOWANCE_CLAUSE, MealAllowanceResult, calculate_meal_allowance,
    weekdays_through_exit_day,
};
pub use outstanding_salary::{
    OUTSTANDING_SALARY_CLAUSE, OutstandingSalaryResult, calculate_outstanding_salary,
};
pub use proportional_vacation::{
    PROPORTIONAL_VACATION_CLAUSE, ProportionalVacationResult, calculate_proportional_vacation,
};
pub use prorated_subsidy::{
    ProratedSubsidyResult, SUBSIDY_YEAR_DAYS, SubsidyKind, calculate_prorated_subsidy,
    days_worked_in_exit_year,
};
pub use severance_compensation::{
    SEVERANCE_COMPENSATION_CLAUSE, SeveranceCompensationResult, calculate_severance_compensation,
};
pub use tenure::{DAYS_PER_MONTH, DAYS_PER_YEAR, TenureResult, calculate_tenure};
pub use training_hours::{
    TRAINING_HOURS_CLAUSE, TrainingShortfallResult, calculate_training_shortfall,
};
pub use unused_vacation::{
    UNUSED_VACATION_CLAUSE, UnusedVacationResult, calculate_unused_vacation,
};

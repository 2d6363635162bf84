//! Compensation inputs and entitlement selections.
//!
//! These records carry the already-parsed monetary and count inputs for a
//! calculation. Locale parsing of raw form values happens at the API
//! boundary; the core only sees semantic values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary and count inputs for a termination calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInputs {
    /// Monthly base salary.
    pub monthly_salary: Decimal,
    /// Daily meal allowance.
    pub daily_meal_allowance: Decimal,
    /// Vacation days earned but not taken.
    pub unused_vacation_days: u32,
    /// Training hours received this year; `None` when the worker received
    /// no training (hours then count as zero).
    pub training_hours_received: Option<u32>,
}

/// Yes/no entitlement selections for a termination calculation.
///
/// # Example
///
/// ```
/// use severance_engine::models::EntitlementFlags;
///
/// let flags = EntitlementFlags {
///     vacation_subsidy: true,
///     christmas_subsidy: true,
///     last_month_salary_unpaid: false,
///     shift_days_worked: None,
/// };
/// assert!(flags.vacation_subsidy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementFlags {
    /// Whether the pro-rated vacation subsidy is owed this year.
    pub vacation_subsidy: bool,
    /// Whether the pro-rated Christmas subsidy is owed this year.
    pub christmas_subsidy: bool,
    /// Whether the last month's salary is still owed.
    pub last_month_salary_unpaid: bool,
    /// Days worked in the exit month for rotating-shift schedules.
    ///
    /// `Some(n)` means the worker follows a rotating-shift schedule and
    /// the worked-day count is supplied directly instead of being derived
    /// from weekday counting.
    pub shift_days_worked: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_compensation_inputs_deserialization() {
        let json = r#"{
            "monthly_salary": "1000",
            "daily_meal_allowance": "6.50",
            "unused_vacation_days": 10,
            "training_hours_received": 12
        }"#;

        let inputs: CompensationInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.monthly_salary, Decimal::from_str("1000").unwrap());
        assert_eq!(
            inputs.daily_meal_allowance,
            Decimal::from_str("6.50").unwrap()
        );
        assert_eq!(inputs.unused_vacation_days, 10);
        assert_eq!(inputs.training_hours_received, Some(12));
    }

    #[test]
    fn test_no_training_received_deserializes_to_none() {
        let json = r#"{
            "monthly_salary": "900",
            "daily_meal_allowance": "0",
            "unused_vacation_days": 0,
            "training_hours_received": null
        }"#;

        let inputs: CompensationInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.training_hours_received, None);
    }

    #[test]
    fn test_entitlement_flags_round_trip() {
        let flags = EntitlementFlags {
            vacation_subsidy: true,
            christmas_subsidy: false,
            last_month_salary_unpaid: true,
            shift_days_worked: Some(14),
        };
        let json = serde_json::to_string(&flags).unwrap();
        let back: EntitlementFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}

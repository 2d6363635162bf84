//! Lenient parsing of monetary and count inputs.
//!
//! Calculator forms submit locale-formatted values ("1.234,56 €") and the
//! occasional garbage. The boundary policy is deliberate: absence or
//! garbage in a monetary or count field yields zero, never a failure.
//! Dates are NOT lenient; invalid dates are validation errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Parses a locale-formatted currency string, coercing garbage to zero.
///
/// Everything except digits and the decimal comma is stripped, then the
/// comma becomes a decimal point. `"1.234,56 €"` parses to `1234.56`;
/// `"abc"` parses to `0`.
///
/// # Example
///
/// ```
/// use severance_engine::api::parse_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_currency("1.234,56 €"), Decimal::from_str("1234.56").unwrap());
/// assert_eq!(parse_currency("950"), Decimal::from(950));
/// assert_eq!(parse_currency("abc"), Decimal::ZERO);
/// ```
pub fn parse_currency(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);
    normalized.parse().unwrap_or(Decimal::ZERO)
}

/// Parses a day/hour count string, coercing garbage to zero.
pub fn parse_count(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Deserializes a monetary field leniently.
///
/// Accepts a JSON number, a locale-formatted string, or null; anything
/// unparseable yields zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(serde_json::Value::String(s)) => parse_currency(&s),
        _ => Decimal::ZERO,
    })
}

/// Deserializes a count field leniently.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => {
            n.as_u64().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(0)
        }
        Some(serde_json::Value::String(s)) => parse_count(&s),
        _ => 0,
    })
}

/// Deserializes an optional count field leniently.
///
/// Null and absence stay `None`; present values coerce like
/// [`lenient_count`].
pub fn lenient_optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => {
            Some(n.as_u64().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(0))
        }
        Some(serde_json::Value::String(s)) => Some(parse_count(&s)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// LP-001: plain integers parse as-is
    #[test]
    fn test_lp_001_plain_integer() {
        assert_eq!(parse_currency("950"), dec("950"));
    }

    /// LP-002: Portuguese thousands/decimal formatting
    #[test]
    fn test_lp_002_portuguese_formatting() {
        assert_eq!(parse_currency("1.234,56"), dec("1234.56"));
        assert_eq!(parse_currency("1.234,56 €"), dec("1234.56"));
    }

    /// LP-003: garbage coerces to zero
    #[test]
    fn test_lp_003_garbage_coerces_to_zero() {
        assert_eq!(parse_currency("abc"), Decimal::ZERO);
        assert_eq!(parse_currency(""), Decimal::ZERO);
        assert_eq!(parse_count("n/a"), 0);
    }

    /// LP-004: embedded digits survive stripping
    #[test]
    fn test_lp_004_embedded_digits_survive() {
        assert_eq!(parse_currency("EUR 780,25"), dec("780.25"));
        assert_eq!(parse_count("10 dias"), 10);
    }

    /// LP-005: only the first comma becomes the decimal point
    #[test]
    fn test_lp_005_first_comma_wins() {
        // "1,2,3" normalizes to "1.2,3", which fails to parse -> zero,
        // matching the strict-then-zero policy.
        assert_eq!(parse_currency("1,50"), dec("1.50"));
        assert_eq!(parse_currency("1,2,3"), Decimal::ZERO);
    }

    #[derive(serde::Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "lenient_decimal")]
        money: Decimal,
        #[serde(default, deserialize_with = "lenient_count")]
        days: u32,
        #[serde(default, deserialize_with = "lenient_optional_count")]
        hours: Option<u32>,
    }

    /// LP-006: lenient deserializers accept numbers and strings
    #[test]
    fn test_lp_006_lenient_field_deserialization() {
        let w: Wrapper =
            serde_json::from_str(r#"{"money": 1200.50, "days": "8", "hours": 12}"#).unwrap();
        assert_eq!(w.money, dec("1200.50"));
        assert_eq!(w.days, 8);
        assert_eq!(w.hours, Some(12));
    }

    /// LP-007: garbage fields coerce, absent fields default
    #[test]
    fn test_lp_007_garbage_and_absent_fields() {
        let w: Wrapper = serde_json::from_str(r#"{"money": "garbage", "days": true}"#).unwrap();
        assert_eq!(w.money, Decimal::ZERO);
        assert_eq!(w.days, 0);
        assert_eq!(w.hours, None);
    }

    /// LP-008: string counts in optional fields coerce
    #[test]
    fn test_lp_008_optional_string_count() {
        let w: Wrapper = serde_json::from_str(r#"{"hours": "25"}"#).unwrap();
        assert_eq!(w.hours, Some(25));
    }

    #[test]
    fn test_null_money_is_zero() {
        let w: Wrapper = serde_json::from_str(r#"{"money": null}"#).unwrap();
        assert_eq!(w.money, Decimal::ZERO);
    }

    #[test]
    fn test_negative_number_strings_lose_their_sign() {
        // The original form fields strip the minus sign before parsing.
        assert_eq!(parse_currency("-100"), dec("100"));
    }
}

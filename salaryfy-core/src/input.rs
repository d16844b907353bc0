//! Parsing of user-entered rupee amounts.
//!
//! Two flavours are provided. [`parse_amount`] is strict and reports what it
//! could not read. [`sanitize_amount`] never fails: it keeps only the digits
//! of the input, the way a numeric text box would.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned by [`parse_amount`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("amount must not be negative: {0:?}")]
    NegativeAmount(String),
}

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern is valid"));

/// Parses an amount such as `"12,00,000"`, `"₹ 1,50,000.50"` or `"75000"`.
///
/// Commas, the rupee sign and whitespace are ignored. An empty input is
/// zero.
///
/// # Errors
///
/// Returns [`ParseAmountError::InvalidAmount`] if what remains is not a
/// decimal number, or [`ParseAmountError::NegativeAmount`] if it is below
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::{ParseAmountError, parse_amount};
///
/// assert_eq!(parse_amount("₹12,00,000"), Ok(dec!(1200000)));
/// assert_eq!(parse_amount(""), Ok(dec!(0)));
/// assert!(matches!(parse_amount("12k"), Err(ParseAmountError::InvalidAmount(_))));
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && *c != '₹' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value =
        Decimal::from_str(&cleaned).map_err(|_| ParseAmountError::InvalidAmount(s.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseAmountError::NegativeAmount(s.to_string()));
    }

    Ok(value)
}

/// Lossy amount parse: drops every non-digit character.
///
/// A decimal point is dropped too, so `"12.50"` reads as `1250`. Empty
/// input, or a digit string too long to represent, yields zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::sanitize_amount;
///
/// assert_eq!(sanitize_amount("Rs. 12,00,000/-"), dec!(1200000));
/// assert_eq!(sanitize_amount("abc"), dec!(0));
/// ```
pub fn sanitize_amount(s: &str) -> Decimal {
    let digits = NON_DIGITS.replace_all(s, "");
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&digits).unwrap_or_else(|_| {
        warn!(input = %s, "amount out of range, using 0");
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_plain_number() {
        assert_eq!(parse_amount("75000"), Ok(dec!(75000)));
    }

    #[test]
    fn parse_amount_indian_grouping_and_rupee_sign() {
        assert_eq!(parse_amount("₹ 1,50,000.50"), Ok(dec!(150000.50)));
    }

    #[test]
    fn parse_amount_surrounding_whitespace() {
        assert_eq!(parse_amount("  25000\n"), Ok(dec!(25000)));
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), Ok(dec!(0)));
        assert_eq!(parse_amount("   "), Ok(dec!(0)));
    }

    #[test]
    fn parse_amount_rejects_letters() {
        assert_eq!(
            parse_amount("12 lakh"),
            Err(ParseAmountError::InvalidAmount("12 lakh".to_string()))
        );
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert_eq!(
            parse_amount("-5,000"),
            Err(ParseAmountError::NegativeAmount("-5,000".to_string()))
        );
    }

    #[test]
    fn parse_amount_accepts_negative_zero() {
        assert_eq!(parse_amount("-0"), Ok(dec!(0)));
    }

    // =========================================================================
    // sanitize_amount tests
    // =========================================================================

    #[test]
    fn sanitize_amount_keeps_digits_only() {
        assert_eq!(sanitize_amount("₹12,00,000"), dec!(1200000));
    }

    #[test]
    fn sanitize_amount_drops_sign_and_decimal_point() {
        assert_eq!(sanitize_amount("-12.50"), dec!(1250));
    }

    #[test]
    fn sanitize_amount_empty_is_zero() {
        assert_eq!(sanitize_amount(""), dec!(0));
        assert_eq!(sanitize_amount("n/a"), dec!(0));
    }

    #[test]
    fn sanitize_amount_overflow_is_zero() {
        let huge = "9".repeat(40);

        assert_eq!(sanitize_amount(&huge), dec!(0));
    }
}

//! Common utility functions for tax and salary calculations.
//!
//! This module provides the rounding and clamping helpers shared by every
//! calculator. All tax figures are reported in whole rupees.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to the nearest whole rupee.
///
/// Values at exactly 0.5 are rounded away from zero, so `12.5` becomes `13`.
/// Calculator inputs are non-negative, where this matches conventional
/// half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::calculations::common::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(4299.49)), dec!(4299));
/// assert_eq!(round_to_rupee(dec!(4299.50)), dec!(4300));
/// assert_eq!(round_to_rupee(dec!(0.4)), dec!(0));
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero from below.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-250.00)), dec!(0));
/// assert_eq!(non_negative(dec!(250.00)), dec!(250.00));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ZERO }
}

/// Clamps a value into `[0, cap]`.
pub fn clamp_to(
    value: Decimal,
    cap: Decimal,
) -> Decimal {
    non_negative(value).min(cap)
}

/// Subtracts `deductions` from `income`, drops the fractional rupees and
/// clamps the result at zero.
///
/// This is the taxable-income rule for both regimes.
pub fn taxable_amount(
    income: Decimal,
    deductions: Decimal,
) -> Decimal {
    non_negative((income - deductions).floor())
}

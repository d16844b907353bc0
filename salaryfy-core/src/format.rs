//! Indian-rupee display formatting.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_rupee;

const RUPEE_SIGN: char = '₹';

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The last three digits form one group and every group above it has two
/// digits. Fractions are rounded half away from zero before formatting.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::format_inr;
///
/// assert_eq!(format_inr(dec!(1200000)), "₹12,00,000");
/// assert_eq!(format_inr(dec!(999)), "₹999");
/// assert_eq!(format_inr(dec!(-1500)), "-₹1,500");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_to_rupee(amount);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_indian(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{RUPEE_SIGN}{grouped}")
    } else {
        format!("{RUPEE_SIGN}{grouped}")
    }
}

/// Inserts commas into a string of ASCII digits using the lakh/crore pattern.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    // Leading group has one digit when the head length is odd.
    let first = head.len() % 2;
    if first == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[first..].chunks(2).enumerate() {
        if i > 0 || first == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|&b| b as char));
    }

    out.push(',');
    out.push_str(last_three);
    out
}

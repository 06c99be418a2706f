//! Money rounding and display utilities.
//!
//! All monetary display in the engine is truncation-based: values are cut
//! to two decimal places, never rounded up, so a person is never shown a
//! share larger than what they owe. Reconciliation comparisons use a
//! one-cent tolerance to absorb accumulated division error.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Returns the one-cent tolerance used for "fully assigned" and
/// "fully paid" comparisons.
///
/// Repeated division of item totals among assignees accumulates rounding
/// error, so equality against the receipt total is always checked within
/// this epsilon rather than exactly.
pub fn cent_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

/// Truncates a monetary value to exactly two decimal places.
///
/// Truncation (toward zero), not rounding: `12.349` becomes `12.34` and
/// `-1.567` becomes `-1.56`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::money::truncate_to_cents;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("12.349").unwrap();
/// assert_eq!(truncate_to_cents(value), Decimal::from_str("12.34").unwrap());
/// ```
pub fn truncate_to_cents(value: Decimal) -> Decimal {
    value.trunc_with_scale(2)
}

/// Formats a monetary value as USD currency.
///
/// The value is truncated to two decimal places, then rendered with a
/// dollar sign, thousands separators, and exactly two decimal digits.
/// Negative values are prefixed with a minus sign before the dollar sign.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::money::format_currency;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234.56").unwrap()), "$1,234.56");
/// assert_eq!(format_currency(Decimal::from_str("-0.99").unwrap()), "-$0.99");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let truncated = truncate_to_cents(value);
    let negative = truncated.is_sign_negative() && !truncated.is_zero();
    let magnitude = truncated.abs();

    let dollars = magnitude.trunc();
    let cents = ((magnitude - dollars) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or(0);

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(&dollars.to_string()), cents)
}

/// Formats the percentage that a partial value represents of a total.
///
/// The percentage is rounded to one decimal place with trailing zeros
/// trimmed (e.g. `"25.5%"`, `"26%"`). Returns `"0%"` when the total is
/// zero or negative, so callers never divide by zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::money::format_percent;
/// use std::str::FromStr;
///
/// let partial = Decimal::from_str("25.50").unwrap();
/// let total = Decimal::from_str("100.00").unwrap();
/// assert_eq!(format_percent(partial, total), "25.5%");
/// ```
pub fn format_percent(partial: Decimal, total: Decimal) -> String {
    if total <= Decimal::ZERO {
        return "0%".to_string();
    }

    let percent = (partial / total * Decimal::ONE_HUNDRED).round_dp(1);
    format!("{}%", percent.normalize())
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

//! Proportional tax distribution.
//!
//! The receipt's effective tax rate is derived from its printed totals
//! and applied to arbitrary base amounts, so the tax burden lands
//! proportionally on each person's spend rather than per head.

use rust_decimal::Decimal;

use crate::models::ReceiptData;

/// Computes the receipt's effective tax rate.
///
/// The rate is `tax / display_subtotal`. Returns zero when the subtotal
/// is zero or absent, or when the tax is zero or absent, so the division
/// can never blow up on degenerate receipts.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::calculation::tax_rate;
/// use split_engine::models::ReceiptData;
/// use std::str::FromStr;
///
/// let mut receipt: ReceiptData = serde_json::from_str("{}").unwrap();
/// receipt.tax = Some(Decimal::from_str("2").unwrap());
/// receipt.display_subtotal = Some(Decimal::from_str("20").unwrap());
///
/// assert_eq!(tax_rate(&receipt), Decimal::from_str("0.1").unwrap());
/// ```
pub fn tax_rate(receipt: &ReceiptData) -> Decimal {
    let subtotal = match receipt.display_subtotal {
        Some(subtotal) if !subtotal.is_zero() => subtotal,
        _ => return Decimal::ZERO,
    };

    let tax = receipt.tax_or_zero();
    if tax.is_zero() {
        return Decimal::ZERO;
    }

    tax / subtotal
}

/// Computes the tax owed on a base amount at the receipt's rate.
///
/// Used both at receipt level (base = items grand total) and per person
/// (base = that person's pre-tax item total).
pub fn tax_amount(base_amount: Decimal, receipt: &ReceiptData) -> Decimal {
    base_amount * tax_rate(receipt)
}

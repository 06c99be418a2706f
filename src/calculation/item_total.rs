//! Line item total resolution.
//!
//! This module provides the single entry point for computing a line
//! item's monetary total, honoring a transient candidate override when a
//! value is being edited but has not been committed yet.

use rust_decimal::Decimal;

use crate::models::{CandidateValues, LineItem};

/// Resolves a line item's monetary total.
///
/// Returns `candidate.price_per_unit * candidate.quantity` when a
/// candidate override is given, else `item.price_per_unit *
/// item.quantity`. The stored item is never mutated, and no validation is
/// performed here: negative or nonsensical values are an upstream
/// responsibility.
///
/// # Arguments
///
/// * `item` - The line item to resolve
/// * `candidate` - Optional not-yet-committed unit-price/quantity pair
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::calculation::resolve_item_total;
/// use split_engine::models::{CandidateValues, LineItem};
///
/// let item = LineItem {
///     id: "i1".to_string(),
///     name: "Burger".to_string(),
///     price_per_unit: Decimal::new(999, 2),
///     quantity: Decimal::new(2, 0),
///     total_price: Decimal::new(1998, 2),
///     assignees: vec![],
/// };
///
/// assert_eq!(resolve_item_total(&item, None), Decimal::new(1998, 2));
///
/// let candidate = CandidateValues {
///     price_per_unit: Decimal::new(1000, 2),
///     quantity: Decimal::new(3, 0),
/// };
/// assert_eq!(resolve_item_total(&item, Some(&candidate)), Decimal::new(3000, 2));
/// ```
pub fn resolve_item_total(item: &LineItem, candidate: Option<&CandidateValues>) -> Decimal {
    match candidate {
        Some(candidate) => candidate.price_per_unit * candidate.quantity,
        None => item.price_per_unit * item.quantity,
    }
}

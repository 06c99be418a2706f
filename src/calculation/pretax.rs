//! Per-person pre-tax allocation.
//!
//! This module splits each line item's total evenly among its assignees
//! and aggregates the shares per person across the whole receipt. Items
//! with no assignees contribute to nobody's total; their cost surfaces
//! later as the receipt's unassigned amount.

use rust_decimal::Decimal;

use crate::models::{CandidateValues, LineItem, PersonId, PersonTotals, ReceiptData};

use super::item_total::resolve_item_total;

/// Computes one person's share of a single line item.
///
/// Returns zero when the person is not an assignee or the item has no
/// assignees at all. Otherwise the item total is split evenly among all
/// co-assignees, regardless of declared quantity: shared items are split
/// per head, not by who ate how much.
///
/// # Arguments
///
/// * `item` - The line item to split
/// * `person` - The person to compute the share for
/// * `candidate` - Optional live-edit override for the item's values
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::calculation::person_pretax_total_for_item;
/// use split_engine::models::LineItem;
///
/// let item = LineItem {
///     id: "i1".to_string(),
///     name: "Nachos".to_string(),
///     price_per_unit: Decimal::new(3000, 2),
///     quantity: Decimal::ONE,
///     total_price: Decimal::new(3000, 2),
///     assignees: vec!["Alice".to_string(), "Bob".to_string()],
/// };
///
/// assert_eq!(
///     person_pretax_total_for_item(&item, "Alice", None),
///     Decimal::new(1500, 2)
/// );
/// assert_eq!(person_pretax_total_for_item(&item, "Charlie", None), Decimal::ZERO);
/// ```
pub fn person_pretax_total_for_item(
    item: &LineItem,
    person: &str,
    candidate: Option<&CandidateValues>,
) -> Decimal {
    if !item.has_assignees() || !item.is_assigned_to(person) {
        return Decimal::ZERO;
    }

    resolve_item_total(item, candidate) / Decimal::from(item.assignees.len())
}

/// Aggregates pre-tax item shares for every person in `people`.
///
/// Every person is initialized to zero, so people with no assignments
/// still appear in the result. The sum over all people equals the sum of
/// the item totals of all items that have at least one assignee.
pub fn person_pretax_item_totals(receipt: &ReceiptData, people: &[PersonId]) -> PersonTotals {
    let mut totals: PersonTotals = people
        .iter()
        .map(|person| (person.clone(), Decimal::ZERO))
        .collect();

    for item in &receipt.line_items {
        for person in people {
            if let Some(total) = totals.get_mut(person) {
                *total += person_pretax_total_for_item(item, person, None);
            }
        }
    }

    totals
}

/// Sums the item totals of all line items, assigned or not.
///
/// This is the receipt-level items total; it intentionally includes
/// orphaned items that no person's weighted share covers.
pub fn items_grand_total(receipt: &ReceiptData) -> Decimal {
    receipt
        .line_items
        .iter()
        .map(|item| resolve_item_total(item, None))
        .sum()
}

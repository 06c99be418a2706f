//! Split-mode decision predicates.
//!
//! Pure boolean classifiers over a receipt that decide whether the
//! aggregator takes the equal-split or the assignment-weighted path, and
//! whether the receipt is fully assigned. A receipt with some items
//! assigned and some not is NOT equal-split: the unassigned items' cost
//! is simply excluded from every person's total and surfaced as an
//! unassigned amount.

use rust_decimal::Decimal;

use crate::models::ReceiptData;

/// Returns true if the receipt has at least one line item.
pub fn has_line_items(receipt: &ReceiptData) -> bool {
    !receipt.line_items.is_empty()
}

/// Returns true if the receipt has line items and none of them has any
/// assignee.
pub fn no_assignments_made(receipt: &ReceiptData) -> bool {
    has_line_items(receipt)
        && receipt
            .line_items
            .iter()
            .all(|item| !item.has_assignees())
}

/// Returns true when the aggregator should split the receipt total
/// equally among all people instead of weighting by assignment.
///
/// This is the single switch the aggregator uses: equal split applies
/// when there are no line items at all, or when no item has any
/// assignee.
pub fn should_use_equal_split(receipt: &ReceiptData) -> bool {
    !has_line_items(receipt) || no_assignments_made(receipt)
}

/// Returns true if the receipt has line items and every one of them has
/// at least one assignee.
///
/// Consumed by "fully assigned" UI banners; the aggregator itself does
/// not branch on it.
pub fn all_items_assigned(receipt: &ReceiptData) -> bool {
    has_line_items(receipt)
        && receipt
            .line_items
            .iter()
            .all(|item| item.has_assignees())
}

/// Returns true when proportional tax should be distributed over the
/// assigned items.
///
/// Requires line items, tax not already included in item prices, a
/// positive tax amount, and a positive total pre-tax assigned amount, so
/// the distribution step is skipped cleanly when nothing is assigned yet
/// or no tax applies.
pub fn should_apply_tax_to_assigned_items(
    receipt: &ReceiptData,
    total_pretax_assigned: Decimal,
) -> bool {
    has_line_items(receipt)
        && !receipt.tax_included_in_items
        && receipt.tax_or_zero() > Decimal::ZERO
        && total_pretax_assigned > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item_with_assignees(id: &str, assignees: Vec<&str>) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: "Item".to_string(),
            price_per_unit: Decimal::TEN,
            quantity: Decimal::ONE,
            total_price: Decimal::TEN,
            assignees: assignees.into_iter().map(String::from).collect(),
        }
    }

    fn receipt_with_items(line_items: Vec<LineItem>) -> ReceiptData {
        let mut receipt: ReceiptData = serde_json::from_str("{}").unwrap();
        receipt.line_items = line_items;
        receipt
    }

    /// CD-001: empty receipts have no line items
    #[test]
    fn test_has_line_items() {
        assert!(!has_line_items(&receipt_with_items(vec![])));
        assert!(has_line_items(&receipt_with_items(vec![
            item_with_assignees("i1", vec![])
        ])));
    }

    /// CD-002: no assignments requires items and all of them bare
    #[test]
    fn test_no_assignments_made() {
        // No items at all: the predicate is about items, so false
        assert!(!no_assignments_made(&receipt_with_items(vec![])));

        assert!(no_assignments_made(&receipt_with_items(vec![
            item_with_assignees("i1", vec![]),
            item_with_assignees("i2", vec![]),
        ])));

        assert!(!no_assignments_made(&receipt_with_items(vec![
            item_with_assignees("i1", vec![]),
            item_with_assignees("i2", vec!["Alice"]),
        ])));
    }

    /// CD-003: equal split for empty receipts and unassigned receipts
    #[test]
    fn test_should_use_equal_split() {
        assert!(should_use_equal_split(&receipt_with_items(vec![])));
        assert!(should_use_equal_split(&receipt_with_items(vec![
            item_with_assignees("i1", vec![])
        ])));
        assert!(!should_use_equal_split(&receipt_with_items(vec![
            item_with_assignees("i1", vec!["Alice"])
        ])));
    }

    /// CD-004: partial assignment is not equal split
    #[test]
    fn test_partial_assignment_is_not_equal_split() {
        let receipt = receipt_with_items(vec![
            item_with_assignees("i1", vec!["Alice"]),
            item_with_assignees("i2", vec![]),
        ]);

        assert!(!should_use_equal_split(&receipt));
        assert!(!all_items_assigned(&receipt));
    }

    /// CD-005: all items assigned requires every item covered
    #[test]
    fn test_all_items_assigned() {
        assert!(!all_items_assigned(&receipt_with_items(vec![])));

        assert!(all_items_assigned(&receipt_with_items(vec![
            item_with_assignees("i1", vec!["Alice"]),
            item_with_assignees("i2", vec!["Bob", "Alice"]),
        ])));

        assert!(!all_items_assigned(&receipt_with_items(vec![
            item_with_assignees("i1", vec!["Alice"]),
            item_with_assignees("i2", vec![]),
        ])));
    }

    /// CD-006: tax applies only with items, external tax, and spend
    #[test]
    fn test_should_apply_tax_to_assigned_items() {
        let mut receipt = receipt_with_items(vec![item_with_assignees("i1", vec!["Alice"])]);
        receipt.tax = Some(dec("2"));

        assert!(should_apply_tax_to_assigned_items(&receipt, dec("10")));

        // Nothing assigned yet
        assert!(!should_apply_tax_to_assigned_items(&receipt, Decimal::ZERO));

        // Tax already embedded in item prices
        receipt.tax_included_in_items = true;
        assert!(!should_apply_tax_to_assigned_items(&receipt, dec("10")));
        receipt.tax_included_in_items = false;

        // No tax on the receipt
        receipt.tax = None;
        assert!(!should_apply_tax_to_assigned_items(&receipt, dec("10")));
        receipt.tax = Some(Decimal::ZERO);
        assert!(!should_apply_tax_to_assigned_items(&receipt, dec("10")));
    }

    #[test]
    fn test_should_apply_tax_requires_line_items() {
        let mut receipt = receipt_with_items(vec![]);
        receipt.tax = Some(dec("2"));
        assert!(!should_apply_tax_to_assigned_items(&receipt, dec("10")));
    }
}

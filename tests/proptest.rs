//! Property-based tests for the bill allocation engine.
//!
//! These tests verify invariants that should hold for any receipt shape
//! respecting the nullability contract: money is conserved for fully
//! assigned receipts, division guards never blow up, and the fair
//! rounding never loses or creates a cent.

use proptest::prelude::*;
use rust_decimal::Decimal;

use split_engine::calculation::{
    items_grand_total, person_fair_totals, person_final_totals, person_pretax_total_for_item,
    receipt_grand_total, resolve_item_total, tax_amount,
};
use split_engine::models::{LineItem, PersonId, PersonTotals, ReceiptData};
use split_engine::money::cent_epsilon;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

const PEOPLE: [&str; 4] = ["Alice", "Bob", "Cara", "Dan"];

fn full_party() -> Vec<PersonId> {
    PEOPLE.iter().map(|name| name.to_string()).collect()
}

/// Generate a positive amount (0.01 to 1000.00).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a whole quantity (1 to 6).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=6i64).prop_map(Decimal::from)
}

/// Generate a non-empty subset of the party.
fn arb_assignees() -> impl Strategy<Value = Vec<PersonId>> {
    proptest::sample::subsequence(full_party(), 1..=PEOPLE.len())
}

fn line_item(
    index: usize,
    price_per_unit: Decimal,
    quantity: Decimal,
    assignees: Vec<PersonId>,
) -> LineItem {
    LineItem {
        id: format!("item_{index:03}"),
        name: format!("Item {index}"),
        price_per_unit,
        quantity,
        total_price: price_per_unit * quantity,
        assignees,
    }
}

fn receipt_of(line_items: Vec<LineItem>) -> ReceiptData {
    ReceiptData {
        merchant: None,
        date: None,
        line_items,
        tax: None,
        tip: None,
        gratuity: None,
        tax_included_in_items: false,
        display_subtotal: None,
        pretax_total: None,
        items_total: None,
        total: None,
        final_total: None,
    }
}

// =============================================================================
// Engine Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// For a fully assigned receipt with tax not included in items, the
    /// person totals sum back to the receipt grand total within one cent.
    #[test]
    fn fully_assigned_receipts_conserve_money(
        item_params in prop::collection::vec((arb_amount(), arb_quantity(), arb_assignees()), 1..8),
        tax in prop::option::of(arb_amount()),
        tip in prop::option::of(arb_amount()),
        gratuity in prop::option::of(arb_amount()),
    ) {
        let items: Vec<LineItem> = item_params
            .into_iter()
            .enumerate()
            .map(|(i, (price, quantity, assignees))| line_item(i, price, quantity, assignees))
            .collect();

        let mut receipt = receipt_of(items);
        receipt.display_subtotal = Some(items_grand_total(&receipt));
        receipt.tax = tax;
        receipt.tip = tip;
        receipt.gratuity = gratuity;

        let totals = person_final_totals(&receipt, &full_party(), true);
        let sum: Decimal = totals.values().copied().sum();

        prop_assert!((sum - receipt_grand_total(&receipt)).abs() < cent_epsilon());
    }

    /// The shares of a single item sum back to the item total, whatever
    /// the assignee count.
    #[test]
    fn item_shares_sum_to_item_total(
        price in arb_amount(),
        quantity in arb_quantity(),
        assignees in arb_assignees(),
    ) {
        let item = line_item(0, price, quantity, assignees.clone());

        let sum: Decimal = assignees
            .iter()
            .map(|person| person_pretax_total_for_item(&item, person, None))
            .sum();

        prop_assert!((sum - resolve_item_total(&item, None)).abs() < Decimal::new(1, 9));
    }

    /// The tax guard holds for any base amount when the subtotal is zero
    /// or absent.
    #[test]
    fn tax_amount_is_zero_without_subtotal(
        base in arb_amount(),
        tax in prop::option::of(arb_amount()),
    ) {
        let mut receipt = receipt_of(vec![]);
        receipt.tax = tax;

        receipt.display_subtotal = None;
        prop_assert_eq!(tax_amount(base, &receipt), Decimal::ZERO);

        receipt.display_subtotal = Some(Decimal::ZERO);
        prop_assert_eq!(tax_amount(base, &receipt), Decimal::ZERO);
    }

    /// With no assignments anywhere, every person receives the identical
    /// equal share of the grand total.
    #[test]
    fn equal_split_is_uniform(
        item_params in prop::collection::vec((arb_amount(), arb_quantity()), 1..8),
        head_count in 1usize..=6,
        tip in prop::option::of(arb_amount()),
    ) {
        let items: Vec<LineItem> = item_params
            .into_iter()
            .enumerate()
            .map(|(i, (price, quantity))| line_item(i, price, quantity, vec![]))
            .collect();

        let mut receipt = receipt_of(items);
        receipt.tip = tip;

        let people: Vec<PersonId> = (0..head_count).map(|i| format!("person_{i}")).collect();
        let totals = person_final_totals(&receipt, &people, true);

        let expected = receipt_grand_total(&receipt) / Decimal::from(head_count);
        prop_assert_eq!(totals.len(), head_count);
        for share in totals.values() {
            prop_assert_eq!(*share, expected);
        }
    }

    /// Orphaned items are excluded from every person's total, so the
    /// person totals never exceed the receipt grand total.
    #[test]
    fn unassigned_amount_is_non_negative(
        assigned_params in prop::collection::vec((arb_amount(), arb_quantity(), arb_assignees()), 1..6),
        orphan_params in prop::collection::vec((arb_amount(), arb_quantity()), 0..6),
        tax in prop::option::of(arb_amount()),
        tip in prop::option::of(arb_amount()),
    ) {
        let mut items: Vec<LineItem> = assigned_params
            .into_iter()
            .enumerate()
            .map(|(i, (price, quantity, assignees))| line_item(i, price, quantity, assignees))
            .collect();
        items.extend(
            orphan_params
                .into_iter()
                .enumerate()
                .map(|(i, (price, quantity))| line_item(100 + i, price, quantity, vec![])),
        );

        let mut receipt = receipt_of(items);
        receipt.display_subtotal = Some(items_grand_total(&receipt));
        receipt.tax = tax;
        receipt.tip = tip;

        let totals = person_final_totals(&receipt, &full_party(), true);
        let sum: Decimal = totals.values().copied().sum();

        prop_assert!(receipt_grand_total(&receipt) - sum > -cent_epsilon());
    }

    /// The result keys are exactly the people passed in, assignments or
    /// not.
    #[test]
    fn result_keys_equal_people_list(
        item_params in prop::collection::vec((arb_amount(), arb_quantity(), arb_assignees()), 0..5),
        edit_mode in any::<bool>(),
    ) {
        let items: Vec<LineItem> = item_params
            .into_iter()
            .enumerate()
            .map(|(i, (price, quantity, assignees))| line_item(i, price, quantity, assignees))
            .collect();
        let receipt = receipt_of(items);

        let people = full_party();
        let totals = person_final_totals(&receipt, &people, edit_mode);

        let mut expected: Vec<PersonId> = people.clone();
        expected.sort();
        let keys: Vec<PersonId> = totals.keys().cloned().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Fair rounding reconciles any set of shares to the receipt total
    /// in cents, never losing or creating a penny.
    #[test]
    fn fair_totals_reconcile_to_the_cent(
        amounts in prop::collection::vec(arb_amount(), 1..8),
        receipt_total in arb_amount(),
    ) {
        let totals: PersonTotals = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| (format!("person_{i}"), *amount))
            .collect();

        let fair = person_fair_totals(receipt_total, &totals);

        let cent_sum: Decimal = fair
            .values()
            .map(|value| (*value * Decimal::ONE_HUNDRED).trunc())
            .sum();
        let expected = (receipt_total * Decimal::ONE_HUNDRED).trunc();

        prop_assert_eq!(cent_sum, expected);
        prop_assert_eq!(fair.len(), totals.len());
    }
}

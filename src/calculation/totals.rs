//! Receipt and per-person total aggregation.
//!
//! This module composes items, tax, tip, and gratuity into the receipt
//! grand total and each person's final share. Tax is distributed
//! proportionally to each person's pre-tax spend while tip and gratuity
//! are split evenly per head. The asymmetry is deliberate product
//! behavior and is preserved exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllocationSummary, PersonId, PersonTotals, ReceiptData};
use crate::money::cent_epsilon;

use super::conditions::{
    all_items_assigned, has_line_items, should_apply_tax_to_assigned_items, should_use_equal_split,
};
use super::pretax::{items_grand_total, person_pretax_item_totals};
use super::tax::tax_amount;

/// How a receipt-level amount is divided among people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Split equally among all people.
    Even,
    /// Split proportionally to each person's pre-tax spend.
    Proportional,
}

/// Options controlling how receipt-level amounts are divided.
///
/// Only the tax split is selectable; tip and gratuity are always split
/// evenly per head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    /// How tax is divided among people.
    pub tax_split: SplitMode,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            tax_split: SplitMode::Proportional,
        }
    }
}

/// Computes the receipt grand total from live line item values.
///
/// Zero when there are no line items; otherwise the items grand total,
/// plus proportional tax on it when tax is not already embedded in item
/// prices, plus gratuity and tip.
pub fn receipt_grand_total(receipt: &ReceiptData) -> Decimal {
    if !has_line_items(receipt) {
        return Decimal::ZERO;
    }

    let items_total = items_grand_total(receipt);
    let mut total = items_total;

    if !receipt.tax_included_in_items {
        total += tax_amount(items_total, receipt);
    }

    total += receipt.gratuity_or_zero();
    total += receipt.tip_or_zero();

    total
}

/// Returns the receipt-level total the caller reconciles person shares
/// against.
///
/// In edit mode the total is recomputed from live line item values; out
/// of edit mode the persisted receipt total is authoritative (zero when
/// absent).
pub fn receipt_display_total(receipt: &ReceiptData, edit_mode: bool) -> Decimal {
    if edit_mode {
        receipt_grand_total(receipt)
    } else {
        receipt.persisted_total()
    }
}

/// Computes each person's final share of the receipt with the default
/// split options (proportional tax).
///
/// # Arguments
///
/// * `receipt` - The receipt to allocate
/// * `people` - The people to allocate among; keys of the result equal
///   exactly this list
/// * `edit_mode` - When true, live line item values are authoritative;
///   when false, persisted receipt-level totals are
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::calculation::person_final_totals;
/// use split_engine::models::{LineItem, ReceiptData};
/// use std::str::FromStr;
///
/// let mut receipt: ReceiptData = serde_json::from_str("{}").unwrap();
/// receipt.line_items = vec![LineItem {
///     id: "i1".to_string(),
///     name: "Dinner".to_string(),
///     price_per_unit: Decimal::TEN,
///     quantity: Decimal::from(2),
///     total_price: Decimal::from(20),
///     assignees: vec!["Alice".to_string(), "Bob".to_string()],
/// }];
/// receipt.tax = Some(Decimal::from(2));
/// receipt.display_subtotal = Some(Decimal::from(20));
/// receipt.tip = Some(Decimal::from(4));
///
/// let people = vec!["Alice".to_string(), "Bob".to_string()];
/// let totals = person_final_totals(&receipt, &people, true);
///
/// // 10 (item share) + 1 (proportional tax) + 2 (tip per head)
/// assert_eq!(totals.get("Alice"), Some(&Decimal::from_str("13.0").unwrap()));
/// ```
pub fn person_final_totals(
    receipt: &ReceiptData,
    people: &[PersonId],
    edit_mode: bool,
) -> PersonTotals {
    person_final_totals_with(receipt, people, edit_mode, &SplitOptions::default())
}

/// Computes each person's final share of the receipt with explicit split
/// options.
///
/// The calculation flow:
/// 1. When no assignment information exists, the receipt total (live or
///    persisted, per `edit_mode`) is split equally among all people and
///    returned immediately.
/// 2. Otherwise each person starts from their pre-tax item total, plus
///    their tax share when tax applies (proportional to their own spend,
///    or per head under [`SplitMode::Even`]).
/// 3. Tip and gratuity are added split evenly across all people in the
///    list, independent of item assignment.
///
/// All division guards resolve to zero or skip the step; no receipt
/// shape respecting the nullability contract can make this panic.
pub fn person_final_totals_with(
    receipt: &ReceiptData,
    people: &[PersonId],
    edit_mode: bool,
    options: &SplitOptions,
) -> PersonTotals {
    if people.is_empty() {
        return PersonTotals::new();
    }

    let head_count = Decimal::from(people.len());

    if should_use_equal_split(receipt) {
        let total = if edit_mode {
            receipt_grand_total(receipt)
        } else {
            receipt.persisted_final_total()
        };
        let share = total / head_count;

        return people
            .iter()
            .map(|person| (person.clone(), share))
            .collect();
    }

    let mut totals = person_pretax_item_totals(receipt, people);
    let total_pretax_assigned: Decimal = totals.values().copied().sum();

    if should_apply_tax_to_assigned_items(receipt, total_pretax_assigned) {
        match options.tax_split {
            SplitMode::Proportional => {
                for amount in totals.values_mut() {
                    *amount += tax_amount(*amount, receipt);
                }
            }
            SplitMode::Even => {
                let tax_per_person = tax_amount(total_pretax_assigned, receipt) / head_count;
                for amount in totals.values_mut() {
                    *amount += tax_per_person;
                }
            }
        }
    }

    let tip_and_gratuity = receipt.tip_or_zero() + receipt.gratuity_or_zero();
    if !tip_and_gratuity.is_zero() {
        let share_per_person = tip_and_gratuity / head_count;
        for amount in totals.values_mut() {
            *amount += share_per_person;
        }
    }

    totals
}

/// Builds the receipt-level reconciliation summary for a computed set of
/// final totals.
///
/// The unassigned amount is the portion of the receipt total not covered
/// by any person (clamped to zero); full assignment is judged within the
/// one-cent tolerance.
pub fn allocation_summary(
    receipt: &ReceiptData,
    edit_mode: bool,
    final_totals: &PersonTotals,
) -> AllocationSummary {
    let receipt_total = receipt_display_total(receipt, edit_mode);
    let assigned_total: Decimal = final_totals.values().copied().sum();
    let unassigned_amount = (receipt_total - assigned_total).max(Decimal::ZERO);
    let is_fully_assigned = (assigned_total - receipt_total).abs() < cent_epsilon();

    AllocationSummary {
        receipt_total,
        assigned_total,
        unassigned_amount,
        is_fully_assigned,
        equal_split: should_use_equal_split(receipt),
        all_items_assigned: all_items_assigned(receipt),
    }
}

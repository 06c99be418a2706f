//! Penny-distribution rounding for person totals.
//!
//! Truncating each person's share to whole cents can leave the shares
//! summing a few cents away from the receipt total. This module closes
//! that gap by working in integer cents and handing the surplus or
//! missing pennies out one at a time, so the displayed shares always
//! reconcile exactly.

use rust_decimal::Decimal;

use crate::models::{PersonId, PersonTotals};

/// Rounds person totals to whole cents and distributes the rounding gap
/// so their cent sum equals the receipt total's cents exactly.
///
/// The algorithm:
/// 1. Convert each share directly to integer cents by truncation (a
///    single conversion, so no compounding of representation error).
/// 2. Compute the gap between the cent sum and the receipt total's cents.
/// 3. Sort people by largest fractional dollar part, so whoever lost the
///    most to truncation is first in line for a penny.
/// 4. Hand out (or claw back) one cent at a time, cycling through people,
///    until the gap is closed.
///
/// # Arguments
///
/// * `receipt_total` - The receipt total the shares must reconcile to
/// * `person_totals` - Each person's computed (unrounded) share
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::calculation::person_fair_totals;
/// use split_engine::models::PersonTotals;
/// use std::str::FromStr;
///
/// let mut totals = PersonTotals::new();
/// let third = Decimal::from_str("10.333333333333333333").unwrap();
/// totals.insert("Alice".to_string(), third);
/// totals.insert("Bob".to_string(), third);
/// totals.insert("Charlie".to_string(), third);
///
/// let fair = person_fair_totals(Decimal::from(31), &totals);
/// let sum: Decimal = fair.values().copied().sum();
/// assert_eq!(sum, Decimal::from(31));
/// ```
pub fn person_fair_totals(receipt_total: Decimal, person_totals: &PersonTotals) -> PersonTotals {
    struct Entry {
        person: PersonId,
        original: Decimal,
        cents: Decimal,
    }

    // Step 1: convert directly to integer cents
    let mut entries: Vec<Entry> = person_totals
        .iter()
        .map(|(person, &original)| Entry {
            person: person.clone(),
            original,
            cents: (original * Decimal::ONE_HUNDRED).trunc(),
        })
        .collect();

    if entries.is_empty() {
        return PersonTotals::new();
    }

    // Step 2: the rounding gap, in cents
    let rounded_sum_cents: Decimal = entries.iter().map(|entry| entry.cents).sum();
    let receipt_total_cents = (receipt_total * Decimal::ONE_HUNDRED).trunc();
    let mut diff_cents = receipt_total_cents - rounded_sum_cents;

    // Step 3: largest fractional part first
    entries.sort_by(|a, b| b.original.fract().cmp(&a.original.fract()));

    // Step 4: distribute one cent at a time, cycling through people
    let mut index = 0;
    while !diff_cents.is_zero() {
        let step = if diff_cents > Decimal::ZERO {
            Decimal::ONE
        } else {
            -Decimal::ONE
        };
        entries[index % entries.len()].cents += step;
        diff_cents -= step;
        index += 1;
    }

    entries
        .into_iter()
        .map(|entry| (entry.person, entry.cents / Decimal::ONE_HUNDRED))
        .collect()
}

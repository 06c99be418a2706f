//! Line item model and the candidate-override pair.
//!
//! This module defines the LineItem struct for a single priced row on a
//! receipt, and the CandidateValues override used to preview edits before
//! they are committed upstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PersonId;

/// A single priced row on a receipt.
///
/// `total_price` carries the value committed by the upstream OCR layer;
/// the engine itself always computes from `price_per_unit * quantity` so
/// that in-flight edits are reflected immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for the line item (a UUID string upstream).
    pub id: String,
    /// The item name as read off the receipt.
    pub name: String,
    /// The price of a single unit.
    pub price_per_unit: Decimal,
    /// The number of units purchased.
    pub quantity: Decimal,
    /// The committed row total from the upstream layer.
    pub total_price: Decimal,
    /// The people sharing responsibility for this item's cost.
    /// May be empty: the item is then unassigned and excluded from every
    /// person's weighted total.
    #[serde(default)]
    pub assignees: Vec<PersonId>,
}

impl LineItem {
    /// Returns true if the given person is one of this item's assignees.
    pub fn is_assigned_to(&self, person: &str) -> bool {
        self.assignees.iter().any(|p| p == person)
    }

    /// Returns true if at least one person is assigned to this item.
    pub fn has_assignees(&self) -> bool {
        !self.assignees.is_empty()
    }
}

/// A transient unit-price/quantity pair used to preview calculations
/// during editing without mutating the stored item.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use split_engine::models::CandidateValues;
///
/// let candidate = CandidateValues {
///     price_per_unit: Decimal::new(1500, 2),
///     quantity: Decimal::new(3, 0),
/// };
/// assert_eq!(candidate.price_per_unit * candidate.quantity, Decimal::new(4500, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateValues {
    /// The not-yet-committed price of a single unit.
    pub price_per_unit: Decimal,
    /// The not-yet-committed number of units.
    pub quantity: Decimal,
}

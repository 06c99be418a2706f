//! Allocation result models.
//!
//! This module contains the [`AllocationResult`] type and its associated
//! structures that capture the full output of a bill allocation: per-person
//! totals, reconciliation figures, and the split-mode flags the UI renders.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PersonId;

/// A mapping of person to monetary amount.
///
/// Keys equal exactly the people passed into the computation; people with
/// no assignments still appear, with value zero. A `BTreeMap` keeps
/// iteration and serialization order deterministic.
pub type PersonTotals = BTreeMap<PersonId, Decimal>;

/// Receipt-level reconciliation figures for an allocation.
///
/// When some items are assigned and some are not, the unassigned items'
/// cost belongs to nobody: `assigned_total` then falls short of
/// `receipt_total` and the difference is surfaced as `unassigned_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    /// The receipt-level total being reconciled against.
    pub receipt_total: Decimal,
    /// The sum of all people's final totals.
    pub assigned_total: Decimal,
    /// The portion of the receipt total not covered by any person,
    /// clamped to zero.
    pub unassigned_amount: Decimal,
    /// True when the assigned total matches the receipt total within one
    /// cent.
    pub is_fully_assigned: bool,
    /// True when the allocation fell back to an equal split.
    pub equal_split: bool,
    /// True when every line item has at least one assignee.
    pub all_items_assigned: bool,
}

/// The complete result of a bill allocation.
///
/// # Example
///
/// ```
/// use split_engine::models::{AllocationResult, AllocationSummary};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use uuid::Uuid;
///
/// let result = AllocationResult {
///     allocation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     people: vec!["Alice".to_string()],
///     pretax_totals: BTreeMap::new(),
///     final_totals: BTreeMap::new(),
///     fair_totals: BTreeMap::new(),
///     summary: AllocationSummary {
///         receipt_total: Decimal::ZERO,
///         assigned_total: Decimal::ZERO,
///         unassigned_amount: Decimal::ZERO,
///         is_fully_assigned: true,
///         equal_split: false,
///         all_items_assigned: true,
///     },
///     duration_us: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Unique identifier for this allocation.
    pub allocation_id: Uuid,
    /// When the allocation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the allocation.
    pub engine_version: String,
    /// The people the allocation was computed for.
    pub people: Vec<PersonId>,
    /// Each person's pre-tax item total.
    pub pretax_totals: PersonTotals,
    /// Each person's final total (items + tax + tip + gratuity share).
    pub final_totals: PersonTotals,
    /// Final totals after penny-distribution rounding, whose cent sum
    /// reconciles exactly with the receipt total.
    pub fair_totals: PersonTotals,
    /// Receipt-level reconciliation figures.
    pub summary: AllocationSummary,
    /// The allocation duration in microseconds.
    pub duration_us: u64,
}

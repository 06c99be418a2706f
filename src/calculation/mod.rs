//! Calculation logic for the Bill Allocation Engine.
//!
//! This module contains all the allocation functions: resolving a line
//! item's total (with optional live-edit candidate overrides), splitting
//! items among their assignees, distributing tax proportionally to spend,
//! the split-mode decision predicates, composing receipt and per-person
//! grand totals, and penny-distribution rounding so the shares reconcile
//! to the receipt total exactly.

mod conditions;
mod fair_totals;
mod item_total;
mod pretax;
mod tax;
mod totals;

pub use conditions::{
    all_items_assigned, has_line_items, no_assignments_made, should_apply_tax_to_assigned_items,
    should_use_equal_split,
};
pub use fair_totals::person_fair_totals;
pub use item_total::resolve_item_total;
pub use pretax::{items_grand_total, person_pretax_item_totals, person_pretax_total_for_item};
pub use tax::{tax_amount, tax_rate};
pub use totals::{
    SplitMode, SplitOptions, allocation_summary, person_final_totals, person_final_totals_with,
    receipt_display_total, receipt_grand_total,
};

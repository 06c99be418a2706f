//! Request types for the Bill Allocation Engine API.
//!
//! This module defines the JSON request structures for the `/allocate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LineItem, ReceiptData};

/// Request body for the `/allocate` endpoint.
///
/// Contains the receipt to allocate, the people to allocate among, and
/// whether live or persisted totals are authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The receipt to allocate.
    pub receipt: ReceiptDataRequest,
    /// The people to allocate among. When absent, the distinct union of
    /// all line item assignees is used.
    #[serde(default)]
    pub people: Option<Vec<String>>,
    /// When true, live line item values are authoritative; when false
    /// (the default), persisted receipt-level totals are.
    #[serde(default)]
    pub edit_mode: bool,
}

/// Receipt information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptDataRequest {
    /// The merchant name.
    #[serde(default)]
    pub merchant: Option<String>,
    /// The receipt date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The priced rows on the receipt.
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
    /// The tax amount printed on the receipt.
    #[serde(default)]
    pub tax: Option<Decimal>,
    /// The tip added by the diners.
    #[serde(default)]
    pub tip: Option<Decimal>,
    /// A gratuity imposed by the venue.
    #[serde(default)]
    pub gratuity: Option<Decimal>,
    /// True when item prices already embed tax.
    #[serde(default)]
    pub tax_included_in_items: bool,
    /// The printed subtotal the tax was computed against.
    #[serde(default)]
    pub display_subtotal: Option<Decimal>,
    /// The persisted pre-tax total.
    #[serde(default)]
    pub pretax_total: Option<Decimal>,
    /// The persisted sum of all line items.
    #[serde(default)]
    pub items_total: Option<Decimal>,
    /// The persisted receipt total.
    #[serde(default)]
    pub total: Option<Decimal>,
    /// The persisted grand total including tip and gratuity.
    #[serde(default)]
    pub final_total: Option<Decimal>,
}

/// Line item information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Unique identifier for the line item.
    pub id: String,
    /// The item name.
    pub name: String,
    /// The price of a single unit.
    pub price_per_unit: Decimal,
    /// The number of units purchased.
    pub quantity: Decimal,
    /// The committed row total from the upstream layer.
    pub total_price: Decimal,
    /// The people sharing responsibility for this item's cost.
    #[serde(default)]
    pub assignees: Vec<String>,
}

impl From<ReceiptDataRequest> for ReceiptData {
    fn from(req: ReceiptDataRequest) -> Self {
        ReceiptData {
            merchant: req.merchant,
            date: req.date,
            line_items: req.line_items.into_iter().map(Into::into).collect(),
            tax: req.tax,
            tip: req.tip,
            gratuity: req.gratuity,
            tax_included_in_items: req.tax_included_in_items,
            display_subtotal: req.display_subtotal,
            pretax_total: req.pretax_total,
            items_total: req.items_total,
            total: req.total,
            final_total: req.final_total,
        }
    }
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            id: req.id,
            name: req.name,
            price_per_unit: req.price_per_unit,
            quantity: req.quantity,
            total_price: req.total_price,
            assignees: req.assignees,
        }
    }
}

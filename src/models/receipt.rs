//! Receipt model.
//!
//! This module defines the ReceiptData struct, the externally-validated
//! contract the allocation engine consumes. Every numeric field except
//! `tax_included_in_items` is optional and treated as zero when absent;
//! the engine never rejects a receipt for missing optional fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// A scanned receipt as delivered by the upstream OCR/validation layer.
///
/// Receipt-level totals come in two flavors: values the engine can derive
/// from line items ("live"), and values persisted upstream when the
/// receipt was committed. Which flavor is authoritative is selected by the
/// caller's edit-mode flag at allocation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// The merchant name, when OCR could read one.
    #[serde(default)]
    pub merchant: Option<String>,
    /// The receipt date, when OCR could read one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The priced rows on the receipt.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// The tax amount printed on the receipt.
    #[serde(default)]
    pub tax: Option<Decimal>,
    /// The tip added by the diners.
    #[serde(default)]
    pub tip: Option<Decimal>,
    /// A gratuity imposed by the venue.
    #[serde(default)]
    pub gratuity: Option<Decimal>,
    /// True when item prices already embed tax; no tax amount is then
    /// added anywhere by the engine.
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

impl ReceiptData {
    /// Returns the tax amount, or zero when absent.
    pub fn tax_or_zero(&self) -> Decimal {
        self.tax.unwrap_or(Decimal::ZERO)
    }

    /// Returns the tip, or zero when absent.
    pub fn tip_or_zero(&self) -> Decimal {
        self.tip.unwrap_or(Decimal::ZERO)
    }

    /// Returns the gratuity, or zero when absent.
    pub fn gratuity_or_zero(&self) -> Decimal {
        self.gratuity.unwrap_or(Decimal::ZERO)
    }

    /// Returns the persisted receipt total, or zero when absent.
    pub fn persisted_total(&self) -> Decimal {
        self.total.unwrap_or(Decimal::ZERO)
    }

    /// Returns the persisted grand total, falling back to the persisted
    /// receipt total and then to zero.
    pub fn persisted_final_total(&self) -> Decimal {
        self.final_total.or(self.total).unwrap_or(Decimal::ZERO)
    }
}

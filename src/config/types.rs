//! Configuration types.

use serde::{Deserialize, Serialize};

use crate::calculation::{SplitMode, SplitOptions};

/// Engine configuration.
///
/// Loaded from YAML with [`EngineConfig::load`], or constructed with
/// [`Default::default`] for the stock behavior: proportional tax, even
/// tip and gratuity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How receipt-level amounts are divided among people.
    #[serde(default)]
    pub splits: SplitsConfig,
}

impl EngineConfig {
    /// Returns the split options the aggregator should run with.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            tax_split: self.splits.tax,
        }
    }
}

/// Split-mode selection for each receipt-level amount.
///
/// Tax may be split proportionally to spend (the default) or evenly per
/// head. Tip and gratuity only support the even split; the loader
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitsConfig {
    /// How tax is divided.
    #[serde(default = "default_tax_split")]
    pub tax: SplitMode,
    /// How the tip is divided. Only `even` is supported.
    #[serde(default = "default_even_split")]
    pub tip: SplitMode,
    /// How the gratuity is divided. Only `even` is supported.
    #[serde(default = "default_even_split")]
    pub gratuity: SplitMode,
}

impl Default for SplitsConfig {
    fn default() -> Self {
        Self {
            tax: default_tax_split(),
            tip: default_even_split(),
            gratuity: default_even_split(),
        }
    }
}

fn default_tax_split() -> SplitMode {
    SplitMode::Proportional
}

fn default_even_split() -> SplitMode {
    SplitMode::Even
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ExtraCostKind;

/// How the salesperson's incentive is carved out of the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveConfig {
    pub mode: IncentiveMode,
    #[serde(default)]
    pub margin: MarginSource,
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            mode: IncentiveMode::Percent(Decimal::ZERO),
            margin: MarginSource::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveMode {
    /// Percentage of the margin, clamped to [0, 100].
    Percent(Decimal),
    /// Fixed amount, capped at the margin.
    Fixed(Decimal),
}

/// Which part of the price counts as margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginSource {
    /// Markup quoted on top of the product price. It is part of the taxable
    /// subtotal.
    Markup(Decimal),
    /// One of the computed extra-cost lines.
    ExtraCost(ExtraCostKind),
}

impl Default for MarginSource {
    fn default() -> Self {
        Self::Markup(Decimal::ZERO)
    }
}

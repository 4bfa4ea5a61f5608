use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax rates supplied with each quote.
///
/// The variant also selects the pricing mode: a composite rate means the
/// product price already includes tax, a split rate means it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RateConfig {
    /// Single blended percentage, reversed out of a tax-inclusive price.
    Composite { rate_percent: Decimal },

    /// Two-bracket tax on a tax-exclusive subtotal.
    ///
    /// `share_percent` of the subtotal is taxed at `rate_a_percent`, the
    /// remaining `100 - share_percent` at `rate_b_percent`.
    Split {
        share_percent: Decimal,
        rate_a_percent: Decimal,
        rate_b_percent: Decimal,
    },
}

impl RateConfig {
    pub fn mode(&self) -> PricingMode {
        match self {
            Self::Composite { .. } => PricingMode::Inclusive,
            Self::Split { .. } => PricingMode::ExclusiveSplit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    #[default]
    Inclusive,
    ExclusiveSplit,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::ExclusiveSplit => "exclusive-split",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inclusive" => Some(Self::Inclusive),
            "exclusive-split" => Some(Self::ExclusiveSplit),
            _ => None,
        }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExtraCostToggles, IncentiveConfig, Product, RateConfig};

/// Everything needed to price one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInput {
    /// Selected package. `None` means nothing has been chosen yet.
    pub product: Option<Product>,

    /// Replaces the product's listed price when set (the sales desk may
    /// quote a negotiated system price).
    pub price_override: Option<Decimal>,

    pub rates: RateConfig,

    #[serde(default)]
    pub extras: ExtraCostToggles,

    #[serde(default)]
    pub incentive: IncentiveConfig,

    #[serde(default)]
    pub discount: Decimal,

    /// Falls back to the configured default when `None`.
    pub central_subsidy: Option<Decimal>,

    /// Falls back to the configured default when `None`.
    pub state_subsidy: Option<Decimal>,
}

impl QuoteInput {
    /// Creates an input with no extras, no incentive, no discount and the
    /// default subsidies.
    pub fn new(
        product: Option<Product>,
        rates: RateConfig,
    ) -> Self {
        Self {
            product,
            price_override: None,
            rates,
            extras: ExtraCostToggles::default(),
            incentive: IncentiveConfig::default(),
            discount: Decimal::ZERO,
            central_subsidy: None,
            state_subsidy: None,
        }
    }
}

//! Tunable defaults handed to the engine with every computation.
//!
//! Nothing in the engine reads ambient state. Callers build a
//! [`PricingDefaults`] once (usually via `Default`, optionally overlaid with a
//! settings file) and pass it by reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RateConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingDefaults {
    /// Composite rate used when a tax-inclusive price is reversed.
    pub composite_rate_percent: Decimal,
    pub split_rate: SplitRateDefaults,
    pub subsidy: SubsidyDefaults,
    /// Logistics fee for sites outside the base area when neither the quote
    /// nor the product supplies one.
    pub out_of_area_fee: Decimal,
    pub savings: SavingsConfig,
    /// Prefix for generated quote numbers.
    pub quote_prefix: String,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            composite_rate_percent: Decimal::new(89, 1),
            split_rate: SplitRateDefaults::default(),
            subsidy: SubsidyDefaults::default(),
            out_of_area_fee: Decimal::new(5000, 0),
            savings: SavingsConfig::default(),
            quote_prefix: "ASS".to_string(),
        }
    }
}

impl PricingDefaults {
    /// Rate configuration for tax-inclusive pricing with the default rate.
    pub fn composite_rates(&self) -> RateConfig {
        RateConfig::Composite {
            rate_percent: self.composite_rate_percent,
        }
    }

    /// Rate configuration for split-rate pricing with the default brackets.
    pub fn split_rates(&self) -> RateConfig {
        RateConfig::Split {
            share_percent: self.split_rate.share_percent,
            rate_a_percent: self.split_rate.rate_a_percent,
            rate_b_percent: self.split_rate.rate_b_percent,
        }
    }
}

/// Supply/service split of the goods and services tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRateDefaults {
    /// Share of the subtotal treated as supply of goods.
    pub share_percent: Decimal,
    /// Rate on the supply share.
    pub rate_a_percent: Decimal,
    /// Rate on the service share.
    pub rate_b_percent: Decimal,
}

impl Default for SplitRateDefaults {
    fn default() -> Self {
        Self {
            share_percent: Decimal::new(70, 0),
            rate_a_percent: Decimal::new(5, 0),
            rate_b_percent: Decimal::new(18, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyDefaults {
    pub central: Decimal,
    pub state: Decimal,
}

impl Default for SubsidyDefaults {
    fn default() -> Self {
        Self {
            central: Decimal::new(78000, 0),
            state: Decimal::new(30000, 0),
        }
    }
}

/// Generation and tariff assumptions behind the savings estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsConfig {
    /// Average units (kWh) generated per kW of capacity per day.
    pub units_per_kw_per_day: Decimal,
    pub days_per_year: Decimal,
    /// Average grid tariff per unit, in rupees.
    pub grid_cost_per_unit: Decimal,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            units_per_kw_per_day: Decimal::new(4, 0),
            days_per_year: Decimal::new(365, 0),
            grid_cost_per_unit: Decimal::new(65, 1),
        }
    }
}

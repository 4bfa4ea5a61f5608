mod extra_cost_toggles;
mod incentive_config;
mod pricing_defaults;
mod product;
mod quote_breakdown;
mod quote_input;
mod quote_view;
mod rate_config;

pub use extra_cost_toggles::{
    ExtraCostKind, ExtraCostToggles, ExtraPanels, ExtraWire, Location, StructureSurcharge,
};
pub use incentive_config::{IncentiveConfig, IncentiveMode, MarginSource};
pub use pricing_defaults::{PricingDefaults, SavingsConfig, SplitRateDefaults, SubsidyDefaults};
pub use product::Product;
pub use quote_breakdown::{
    ExtraCosts, IncentiveSplit, QuoteBreakdown, SavingsSummary, SubsidySummary, TaxAmounts,
};
pub use quote_input::QuoteInput;
pub use quote_view::{CustomerQuote, SalesQuote};
pub use rate_config::{PricingMode, RateConfig};

//! Pricing settings loaded from TOML.
//!
//! Every key is optional. Missing keys keep the value from
//! [`PricingDefaults::default`]; NaN and infinite numbers become zero.
//!
//! ```toml
//! composite_rate_percent = 8.9
//! out_of_area_fee = 5000
//! quote_prefix = "ASS"
//!
//! [split_rate]
//! share_percent = 70
//! rate_a_percent = 5
//! rate_b_percent = 18
//!
//! [subsidy]
//! central = 78000
//! state = 30000
//!
//! [savings]
//! units_per_kw_per_day = 4
//! days_per_year = 365
//! grid_cost_per_unit = 6.5
//! ```

use std::path::Path;

use quote_core::PricingDefaults;
use quote_core::calculations::common::finite_or_zero;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    composite_rate_percent: Option<f64>,
    out_of_area_fee: Option<f64>,
    quote_prefix: Option<String>,
    split_rate: RawSplitRate,
    subsidy: RawSubsidy,
    savings: RawSavings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSplitRate {
    share_percent: Option<f64>,
    rate_a_percent: Option<f64>,
    rate_b_percent: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSubsidy {
    central: Option<f64>,
    state: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSavings {
    units_per_kw_per_day: Option<f64>,
    days_per_year: Option<f64>,
    grid_cost_per_unit: Option<f64>,
}

fn overlay(
    target: &mut Decimal,
    value: Option<f64>,
) {
    if let Some(value) = value {
        *target = finite_or_zero(value);
    }
}

impl RawSettings {
    fn into_defaults(self) -> PricingDefaults {
        let mut defaults = PricingDefaults::default();

        overlay(&mut defaults.composite_rate_percent, self.composite_rate_percent);
        overlay(&mut defaults.out_of_area_fee, self.out_of_area_fee);
        if let Some(prefix) = self.quote_prefix {
            defaults.quote_prefix = prefix;
        }

        overlay(&mut defaults.split_rate.share_percent, self.split_rate.share_percent);
        overlay(&mut defaults.split_rate.rate_a_percent, self.split_rate.rate_a_percent);
        overlay(&mut defaults.split_rate.rate_b_percent, self.split_rate.rate_b_percent);

        overlay(&mut defaults.subsidy.central, self.subsidy.central);
        overlay(&mut defaults.subsidy.state, self.subsidy.state);

        overlay(&mut defaults.savings.units_per_kw_per_day, self.savings.units_per_kw_per_day);
        overlay(&mut defaults.savings.days_per_year, self.savings.days_per_year);
        overlay(&mut defaults.savings.grid_cost_per_unit, self.savings.grid_cost_per_unit);

        defaults
    }
}

/// Parses TOML settings text over [`PricingDefaults::default`].
pub fn load_from_str(input: &str) -> Result<PricingDefaults, SettingsError> {
    let raw: RawSettings = toml::from_str(input)?;
    Ok(raw.into_defaults())
}

/// Reads a settings file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<PricingDefaults, SettingsError> {
    let contents = std::fs::read_to_string(path)?;
    let defaults = load_from_str(&contents)?;

    info!(path = %path.display(), "loaded pricing settings");

    Ok(defaults)
}

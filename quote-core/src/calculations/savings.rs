//! Generation, savings and payback estimate for a quoted system.
//!
//! | Output          | Formula                                            |
//! |-----------------|----------------------------------------------------|
//! | units per day   | capacity (kW) × units per kW per day               |
//! | annual units    | units per day × days per year                      |
//! | annual savings  | annual units × grid cost per unit                  |
//! | total subsidy   | central + state                                    |
//! | net cost        | max(0, total cost − total subsidy)                 |
//! | payback (years) | net cost ÷ annual savings, or 0 without savings    |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SavingsConfig;
use crate::calculations::common::{
    max, non_negative, round_half_up, round_one_dp, saturating_add, saturating_div, saturating_mul,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub units_per_day: Decimal,
    pub annual_units: Decimal,
    pub annual_savings: Decimal,
    pub total_subsidy: Decimal,
    pub net_cost: Decimal,
    /// Tenths of a year. Zero when there are no savings to pay the system back.
    pub roi_years: Decimal,
}

/// Estimates generation and payback for a system of `capacity_kw`.
///
/// Amounts and units are rounded to two decimals, years to one.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::SavingsConfig;
/// use quote_core::calculations::estimate_savings;
///
/// let estimate = estimate_savings(
///     dec!(3),
///     dec!(196020),
///     dec!(78000),
///     dec!(30000),
///     &SavingsConfig::default(),
/// );
///
/// assert_eq!(estimate.annual_units, dec!(4380));
/// assert_eq!(estimate.annual_savings, dec!(28470));
/// assert_eq!(estimate.net_cost, dec!(88020));
/// assert_eq!(estimate.roi_years, dec!(3.1));
/// ```
pub fn estimate_savings(
    capacity_kw: Decimal,
    total_cost: Decimal,
    central_subsidy: Decimal,
    state_subsidy: Decimal,
    config: &SavingsConfig,
) -> SavingsEstimate {
    let capacity_kw = non_negative(capacity_kw, "capacity_kw");

    let units_per_day = saturating_mul(
        capacity_kw,
        non_negative(config.units_per_kw_per_day, "units_per_kw_per_day"),
    );
    let annual_units = saturating_mul(
        units_per_day,
        non_negative(config.days_per_year, "days_per_year"),
    );
    let annual_savings = saturating_mul(
        annual_units,
        non_negative(config.grid_cost_per_unit, "grid_cost_per_unit"),
    );

    let total_subsidy = round_half_up(saturating_add(
        non_negative(central_subsidy, "central_subsidy"),
        non_negative(state_subsidy, "state_subsidy"),
    ));
    let net_cost = max(
        round_half_up(non_negative(total_cost, "total_cost") - total_subsidy),
        Decimal::ZERO,
    );

    let roi_years = if annual_savings > Decimal::ZERO {
        round_one_dp(saturating_div(net_cost, annual_savings))
    } else {
        Decimal::ZERO
    };

    debug!(
        annual_units = %annual_units,
        annual_savings = %annual_savings,
        net_cost = %net_cost,
        roi_years = %roi_years,
        "estimated savings"
    );

    SavingsEstimate {
        units_per_day: round_half_up(units_per_day),
        annual_units: round_half_up(annual_units),
        annual_savings: round_half_up(annual_savings),
        total_subsidy,
        net_cost,
        roi_years,
    }
}

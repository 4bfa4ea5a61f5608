//! Add-on costs gated by the quote's extra-cost toggles.
//!
//! | Line      | Amount when enabled                         |
//! |-----------|---------------------------------------------|
//! | structure | capacity (kW) × 1000 × rate per watt        |
//! | panels    | count × price per panel                     |
//! | wire      | length (m) × rate per meter                 |
//! | logistics | quote fee, else product fee, else default   |
//!
//! Disabled lines are zero. Negative inputs are clamped to zero and products
//! too large for a `Decimal` saturate at `Decimal::MAX`. Nothing is rounded
//! here; the tax engine rounds the subtotal it builds from these.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{non_negative, saturating_add, saturating_mul};
use crate::{ExtraCostToggles, ExtraCosts, Location};

/// Prices every enabled extra-cost line.
///
/// # Arguments
///
/// * `system_capacity_kw` - Installed capacity the structure surcharge scales with
/// * `toggles` - Which extras apply and their rates
/// * `product_out_of_area_fee` - Logistics fee listed with the product
/// * `default_out_of_area_fee` - Fallback when neither the quote nor the product has a fee
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::compute_extra_costs;
/// use quote_core::{ExtraCostToggles, ExtraWire, Location, StructureSurcharge};
///
/// let toggles = ExtraCostToggles {
///     structure: Some(StructureSurcharge { rate_per_watt: dec!(2) }),
///     extra_panels: None,
///     extra_wire: Some(ExtraWire { length_meters: dec!(10), rate_per_meter: dec!(50) }),
///     location: Location::OutOfArea { fee: None },
/// };
///
/// let costs = compute_extra_costs(dec!(3), &toggles, dec!(5000), dec!(5000));
///
/// assert_eq!(costs.structure, dec!(6000));
/// assert_eq!(costs.wire, dec!(500));
/// assert_eq!(costs.logistics, dec!(5000));
/// assert_eq!(costs.total, dec!(11500));
/// ```
pub fn compute_extra_costs(
    system_capacity_kw: Decimal,
    toggles: &ExtraCostToggles,
    product_out_of_area_fee: Decimal,
    default_out_of_area_fee: Decimal,
) -> ExtraCosts {
    let capacity = non_negative(system_capacity_kw, "system_capacity_kw");

    let structure = toggles.structure.map_or(Decimal::ZERO, |s| {
        saturating_mul(
            saturating_mul(capacity, Decimal::ONE_THOUSAND),
            non_negative(s.rate_per_watt, "structure.rate_per_watt"),
        )
    });

    let panels = toggles.extra_panels.map_or(Decimal::ZERO, |p| {
        saturating_mul(
            non_negative(p.count, "extra_panels.count"),
            non_negative(p.price_per_panel, "extra_panels.price_per_panel"),
        )
    });

    let wire = toggles.extra_wire.map_or(Decimal::ZERO, |w| {
        saturating_mul(
            non_negative(w.length_meters, "extra_wire.length_meters"),
            non_negative(w.rate_per_meter, "extra_wire.rate_per_meter"),
        )
    });

    let logistics = logistics_fee(
        toggles.location,
        product_out_of_area_fee,
        default_out_of_area_fee,
    );

    let total = [panels, wire, logistics]
        .into_iter()
        .fold(structure, saturating_add);

    debug!(
        structure = %structure,
        panels = %panels,
        wire = %wire,
        logistics = %logistics,
        total = %total,
        "computed extra costs"
    );

    ExtraCosts {
        structure,
        panels,
        wire,
        logistics,
        total,
    }
}

/// Resolves the out-of-area logistics fee.
///
/// The first positive value of the quote's editable fee, the product's fee
/// and the configured default is used.
fn logistics_fee(
    location: Location,
    product_fee: Decimal,
    default_fee: Decimal,
) -> Decimal {
    match location {
        Location::BaseArea => Decimal::ZERO,
        Location::OutOfArea { fee } => [fee.unwrap_or(Decimal::ZERO), product_fee, default_fee]
            .into_iter()
            .find(|f| *f > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{ExtraPanels, ExtraWire, StructureSurcharge};

    fn all_enabled() -> ExtraCostToggles {
        ExtraCostToggles {
            structure: Some(StructureSurcharge {
                rate_per_watt: dec!(1.5),
            }),
            extra_panels: Some(ExtraPanels {
                count: dec!(2),
                price_per_panel: dec!(15000),
            }),
            extra_wire: Some(ExtraWire {
                length_meters: dec!(10),
                rate_per_meter: dec!(50),
            }),
            location: Location::OutOfArea { fee: None },
        }
    }

    // =========================================================================
    // individual line tests
    // =========================================================================

    #[test]
    fn structure_scales_with_capacity_in_watts() {
        let costs = compute_extra_costs(dec!(3.36), &all_enabled(), dec!(5000), dec!(5000));

        // 3.36 kW × 1000 × 1.5
        assert_eq!(costs.structure, dec!(5040));
    }

    #[test]
    fn panels_multiply_count_by_price() {
        let costs = compute_extra_costs(dec!(3), &all_enabled(), dec!(5000), dec!(5000));

        assert_eq!(costs.panels, dec!(30000));
    }

    #[test]
    fn wire_multiplies_length_by_rate() {
        let costs = compute_extra_costs(dec!(3), &all_enabled(), dec!(5000), dec!(5000));

        assert_eq!(costs.wire, dec!(500));
    }

    #[test]
    fn total_sums_all_lines() {
        let costs = compute_extra_costs(dec!(3), &all_enabled(), dec!(5000), dec!(5000));

        // 4500 + 30000 + 500 + 5000
        assert_eq!(costs.total, dec!(40000));
    }

    #[test]
    fn oversized_lines_saturate() {
        let toggles = ExtraCostToggles {
            structure: Some(StructureSurcharge {
                rate_per_watt: Decimal::MAX,
            }),
            extra_panels: Some(ExtraPanels {
                count: Decimal::MAX,
                price_per_panel: dec!(15000),
            }),
            extra_wire: Some(ExtraWire {
                length_meters: dec!(10),
                rate_per_meter: Decimal::MAX,
            }),
            location: Location::OutOfArea { fee: None },
        };

        let costs = compute_extra_costs(Decimal::MAX, &toggles, dec!(5000), dec!(5000));

        assert_eq!(costs.structure, Decimal::MAX);
        assert_eq!(costs.panels, Decimal::MAX);
        assert_eq!(costs.wire, Decimal::MAX);
        assert_eq!(costs.total, Decimal::MAX);
    }

    // =========================================================================
    // toggle tests
    // =========================================================================

    #[test]
    fn disabled_toggles_contribute_nothing() {
        let costs =
            compute_extra_costs(dec!(10), &ExtraCostToggles::default(), dec!(5000), dec!(5000));

        assert_eq!(costs, ExtraCosts::default());
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let toggles = ExtraCostToggles {
            structure: Some(StructureSurcharge {
                rate_per_watt: dec!(-2),
            }),
            extra_panels: Some(ExtraPanels {
                count: dec!(-1),
                price_per_panel: dec!(15000),
            }),
            extra_wire: Some(ExtraWire {
                length_meters: dec!(10),
                rate_per_meter: dec!(-50),
            }),
            location: Location::BaseArea,
        };

        let costs = compute_extra_costs(dec!(3), &toggles, dec!(5000), dec!(5000));

        assert_eq!(costs.total, dec!(0));
    }

    // =========================================================================
    // logistics_fee tests
    // =========================================================================

    #[test]
    fn logistics_zero_in_base_area() {
        assert_eq!(
            logistics_fee(Location::BaseArea, dec!(5000), dec!(5000)),
            dec!(0)
        );
    }

    #[test]
    fn logistics_prefers_editable_fee() {
        let location = Location::OutOfArea {
            fee: Some(dec!(7500)),
        };

        assert_eq!(logistics_fee(location, dec!(5000), dec!(5000)), dec!(7500));
    }

    #[test]
    fn logistics_ignores_zero_editable_fee() {
        let location = Location::OutOfArea {
            fee: Some(dec!(0)),
        };

        assert_eq!(logistics_fee(location, dec!(6000), dec!(5000)), dec!(6000));
    }

    #[test]
    fn logistics_falls_back_to_default() {
        let location = Location::OutOfArea { fee: None };

        assert_eq!(logistics_fee(location, dec!(0), dec!(5000)), dec!(5000));
    }
}

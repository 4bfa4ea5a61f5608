//! Panel count and installed capacity for a requested system size.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::Product;
use crate::calculations::common::{non_negative, round_half_up, saturating_mul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSize {
    pub module_count: u32,
    /// Capacity actually installed once whole modules are counted.
    pub actual_capacity_kw: Decimal,
}

/// Number of modules needed to reach `requested_kw`, rounded up, and the
/// resulting installed capacity.
///
/// A module wattage of zero is treated as one watt so the count stays finite.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::size_system;
///
/// let size = size_system(dec!(3), 620);
///
/// assert_eq!(size.module_count, 5);
/// assert_eq!(size.actual_capacity_kw, dec!(3.10));
/// ```
pub fn size_system(
    requested_kw: Decimal,
    module_wattage: u32,
) -> SystemSize {
    let wattage = Decimal::from(module_wattage.max(1));
    let requested_watts =
        saturating_mul(non_negative(requested_kw, "requested_kw"), Decimal::ONE_THOUSAND);

    let module_count = (requested_watts / wattage).ceil().to_u32().unwrap_or(u32::MAX);
    let installed_watts = Decimal::from(module_count) * Decimal::from(module_wattage);
    let actual_capacity_kw = round_half_up(installed_watts / Decimal::ONE_THOUSAND);

    SystemSize {
        module_count,
        actual_capacity_kw,
    }
}

/// Builds a product for a system that is not in any price list.
///
/// The capacity is the installed capacity after sizing, not the requested one.
pub fn custom_product(
    requested_kw: Decimal,
    module_wattage: u32,
    phase: u8,
    base_price: Decimal,
) -> Product {
    let size = size_system(requested_kw, module_wattage);

    Product {
        capacity_kw: size.actual_capacity_kw,
        phase,
        module_wattage,
        module_count: size.module_count,
        base_price: non_negative(base_price, "base_price"),
        wire_meters: Decimal::ZERO,
        out_of_area_fee: Decimal::ZERO,
        supplier: None,
    }
}

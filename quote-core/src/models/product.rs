use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A packaged solar system as listed in a supplier price list.
///
/// `base_price` is whole rupees. Whether it is tax-inclusive or tax-exclusive
/// depends on the [`RateConfig`](crate::RateConfig) the quote is priced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub capacity_kw: Decimal,
    pub phase: u8,
    pub module_wattage: u32,
    pub module_count: u32,
    pub base_price: Decimal,
    /// Cable length included in the package, in meters.
    pub wire_meters: Decimal,
    pub out_of_area_fee: Decimal,
    pub supplier: Option<String>,
}

impl Product {
    /// Returns `true` when the product can be priced at all.
    pub fn has_capacity(&self) -> bool {
        self.capacity_kw > Decimal::ZERO
    }
}

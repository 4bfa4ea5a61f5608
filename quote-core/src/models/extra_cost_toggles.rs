use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional surcharges added on top of the product price.
///
/// Every item is either absent (contributes nothing) or present with the
/// numbers needed to price it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCostToggles {
    /// Raised or high-rise mounting structure.
    pub structure: Option<StructureSurcharge>,
    pub extra_panels: Option<ExtraPanels>,
    /// Cable beyond the package allowance.
    pub extra_wire: Option<ExtraWire>,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSurcharge {
    pub rate_per_watt: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPanels {
    pub count: Decimal,
    pub price_per_panel: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraWire {
    pub length_meters: Decimal,
    pub rate_per_meter: Decimal,
}

/// Where the installation site is relative to the retailer's base city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    #[default]
    BaseArea,
    /// Outside the base area. `fee` overrides the product's logistics fee
    /// when it is set and positive.
    OutOfArea { fee: Option<Decimal> },
}

/// Names one line of [`ExtraCosts`](crate::ExtraCosts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraCostKind {
    Structure,
    Panels,
    Wire,
    Logistics,
}

impl ExtraCostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Panels => "panels",
            Self::Wire => "wire",
            Self::Logistics => "logistics",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "structure" => Some(Self::Structure),
            "panels" => Some(Self::Panels),
            "wire" => Some(Self::Wire),
            "logistics" => Some(Self::Logistics),
            _ => None,
        }
    }
}

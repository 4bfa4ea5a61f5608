use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExtraCostKind, PricingMode};

/// Priced add-on lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCosts {
    pub structure: Decimal,
    pub panels: Decimal,
    pub wire: Decimal,
    pub logistics: Decimal,
    pub total: Decimal,
}

impl ExtraCosts {
    pub fn get(
        &self,
        kind: ExtraCostKind,
    ) -> Decimal {
        match kind {
            ExtraCostKind::Structure => self.structure,
            ExtraCostKind::Panels => self.panels,
            ExtraCostKind::Wire => self.wire,
            ExtraCostKind::Logistics => self.logistics,
        }
    }
}

/// Tax charged on the taxable subtotal.
///
/// For composite-rate quotes the whole amount sits in `bracket_a_amount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAmounts {
    pub bracket_a_amount: Decimal,
    pub bracket_b_amount: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveSplit {
    /// Paid to the salesperson.
    pub amount: Decimal,
    pub company_retained_margin: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidySummary {
    pub central: Decimal,
    pub state: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub units_per_day: Decimal,
    pub annual_units: Decimal,
    pub annual_savings: Decimal,
    pub roi_years: Decimal,
}

/// The complete, rounded price breakdown of one quote.
///
/// Built by [`compute_quote`](crate::compute_quote) and never changed
/// afterwards. Renderers and persistence layers read it as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Set when no product or capacity was supplied; every amount is zero.
    pub empty: bool,
    pub mode: PricingMode,
    pub capacity_kw: Decimal,
    /// Pre-tax system price. Derived from the inclusive price in
    /// [`PricingMode::Inclusive`].
    pub base_price: Decimal,
    /// Markup included in the subtotal (zero when the margin is an extra-cost line).
    pub margin_markup: Decimal,
    /// Amount the incentive was drawn from.
    pub margin_amount: Decimal,
    pub extra_costs: ExtraCosts,
    pub taxable_subtotal: Decimal,
    pub tax: TaxAmounts,
    pub total_before_discount: Decimal,
    pub discount: Decimal,
    pub grand_total: Decimal,
    pub incentive: IncentiveSplit,
    pub subsidy: SubsidySummary,
    /// Grand total less subsidies, never below zero.
    pub effective_cost: Decimal,
    pub savings: SavingsSummary,
}

impl QuoteBreakdown {
    /// A zeroed breakdown flagged as empty, rendered as a blank quote.
    pub fn empty(mode: PricingMode) -> Self {
        Self {
            empty: true,
            mode,
            ..Self::default()
        }
    }
}

//! Customer-facing and sales-facing projections of a [`QuoteBreakdown`].
//!
//! Both views carry the same numbers. The customer view hides how the margin
//! is split between salesperson and company; the sales view shows everything.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::saturating_add;
use crate::{ExtraCosts, PricingMode, QuoteBreakdown, SubsidySummary, TaxAmounts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerQuote {
    pub capacity_kw: Decimal,
    /// Base price with any markup folded in.
    pub system_price: Decimal,
    pub extra_costs: ExtraCosts,
    pub taxable_subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub discount: Decimal,
    pub grand_total: Decimal,
    pub subsidy: SubsidySummary,
    pub effective_cost: Decimal,
    pub annual_units: Decimal,
    pub annual_savings: Decimal,
    pub roi_years: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesQuote {
    pub mode: PricingMode,
    pub capacity_kw: Decimal,
    pub base_price: Decimal,
    pub margin_markup: Decimal,
    pub extra_costs: ExtraCosts,
    pub taxable_subtotal: Decimal,
    pub tax: TaxAmounts,
    pub total_before_discount: Decimal,
    pub discount: Decimal,
    pub grand_total: Decimal,
    pub margin_amount: Decimal,
    pub salesperson_incentive: Decimal,
    pub company_retained_margin: Decimal,
    pub subsidy_total: Decimal,
    pub effective_cost: Decimal,
}

impl QuoteBreakdown {
    pub fn customer_view(&self) -> CustomerQuote {
        CustomerQuote {
            capacity_kw: self.capacity_kw,
            system_price: saturating_add(self.base_price, self.margin_markup),
            extra_costs: self.extra_costs,
            taxable_subtotal: self.taxable_subtotal,
            tax_amount: self.tax.total_amount,
            total: self.total_before_discount,
            discount: self.discount,
            grand_total: self.grand_total,
            subsidy: self.subsidy,
            effective_cost: self.effective_cost,
            annual_units: self.savings.annual_units,
            annual_savings: self.savings.annual_savings,
            roi_years: self.savings.roi_years,
        }
    }

    pub fn sales_view(&self) -> SalesQuote {
        SalesQuote {
            mode: self.mode,
            capacity_kw: self.capacity_kw,
            base_price: self.base_price,
            margin_markup: self.margin_markup,
            extra_costs: self.extra_costs,
            taxable_subtotal: self.taxable_subtotal,
            tax: self.tax,
            total_before_discount: self.total_before_discount,
            discount: self.discount,
            grand_total: self.grand_total,
            margin_amount: self.margin_amount,
            salesperson_incentive: self.incentive.amount,
            company_retained_margin: self.incentive.company_retained_margin,
            subsidy_total: self.subsidy.total,
            effective_cost: self.effective_cost,
        }
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "{label:<28}{amount:>16.2}")
}

/// Writes an extra-cost line only when it is charged.
fn extra_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    if amount > Decimal::ZERO {
        row(f, label, amount)?;
    }
    Ok(())
}

impl fmt::Display for CustomerQuote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Solar system {} kWp", self.capacity_kw.normalize())?;
        row(f, "System price", self.system_price)?;
        extra_row(f, "+ Extra structure", self.extra_costs.structure)?;
        extra_row(f, "+ Extra panels", self.extra_costs.panels)?;
        extra_row(f, "+ Extra wire", self.extra_costs.wire)?;
        extra_row(f, "+ Out-of-area logistics", self.extra_costs.logistics)?;
        row(f, "Taxable value", self.taxable_subtotal)?;
        row(f, "GST", self.tax_amount)?;
        row(f, "Total", self.total)?;
        extra_row(f, "- Discount", self.discount)?;
        row(f, "Grand total", self.grand_total)?;
        row(f, "Central subsidy", self.subsidy.central)?;
        row(f, "State subsidy", self.subsidy.state)?;
        row(f, "Effective cost", self.effective_cost)?;
        row(f, "Annual units (kWh)", self.annual_units)?;
        row(f, "Annual savings", self.annual_savings)?;
        writeln!(f, "{:<28}{:>16.1}", "Payback (years)", self.roi_years)
    }
}

impl fmt::Display for SalesQuote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Solar system {} kWp ({})",
            self.capacity_kw.normalize(),
            self.mode.as_str()
        )?;
        row(f, "Base price", self.base_price)?;
        row(f, "Margin markup", self.margin_markup)?;
        row(f, "Extra structure", self.extra_costs.structure)?;
        row(f, "Extra panels", self.extra_costs.panels)?;
        row(f, "Extra wire", self.extra_costs.wire)?;
        row(f, "Logistics", self.extra_costs.logistics)?;
        row(f, "Taxable subtotal", self.taxable_subtotal)?;
        row(f, "Tax bracket A", self.tax.bracket_a_amount)?;
        row(f, "Tax bracket B", self.tax.bracket_b_amount)?;
        row(f, "Tax total", self.tax.total_amount)?;
        row(f, "Total before discount", self.total_before_discount)?;
        row(f, "Discount", self.discount)?;
        row(f, "Grand total", self.grand_total)?;
        row(f, "Margin", self.margin_amount)?;
        row(f, "Salesperson incentive", self.salesperson_incentive)?;
        row(f, "Company retained margin", self.company_retained_margin)?;
        row(f, "Subsidy total", self.subsidy_total)?;
        row(f, "Effective cost", self.effective_cost)
    }
}

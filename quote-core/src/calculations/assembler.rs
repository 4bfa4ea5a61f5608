//! Assembles a complete [`QuoteBreakdown`] from a [`QuoteInput`].
//!
//! # Computation Order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Extra costs from the toggles |
//! | 2    | Margin: the quoted markup or one extra-cost line |
//! | 3    | Tax in the selected mode over base + markup + extras |
//! | 4    | Incentive drawn from the margin |
//! | 5    | Discount: grand total = max(0, total − discount) |
//! | 6    | Subsidies and savings, with the grand total as cost basis |
//!
//! Later steps read the rounded outputs of earlier steps, so the order is
//! fixed. The assembler never fails: out-of-range numbers are clamped, and a
//! missing product or capacity yields [`QuoteBreakdown::empty`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::{PricingDefaults, Product, QuoteInput, compute_quote};
//!
//! let product = Product {
//!     capacity_kw: dec!(3),
//!     phase: 1,
//!     module_wattage: 600,
//!     module_count: 5,
//!     base_price: dec!(180000),
//!     wire_meters: dec!(150),
//!     out_of_area_fee: dec!(5000),
//!     supplier: None,
//! };
//!
//! let defaults = PricingDefaults::default();
//! let input = QuoteInput::new(Some(product), defaults.split_rates());
//!
//! let quote = compute_quote(&input, &defaults);
//!
//! assert_eq!(quote.tax.total_amount, dec!(16020.00));
//! assert_eq!(quote.grand_total, dec!(196020.00));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculations::common::{max, non_negative, round_half_up, saturating_add};
use crate::calculations::{
    allocate_incentive, compute_extra_costs, estimate_savings, reverse_inclusive_tax,
    split_rate_tax,
};
use crate::{
    ExtraCosts, IncentiveSplit, MarginSource, PricingDefaults, QuoteBreakdown, QuoteInput,
    RateConfig, SavingsSummary, SubsidySummary, TaxAmounts,
};

/// Output of the tax step, common to both modes.
struct TaxedPrice {
    base_price: Decimal,
    taxable_subtotal: Decimal,
    tax: TaxAmounts,
    total: Decimal,
}

/// Computes the full breakdown for one quote.
///
/// This is a pure function of its arguments: calling it twice with the same
/// input yields equal breakdowns.
pub fn compute_quote(
    input: &QuoteInput,
    defaults: &PricingDefaults,
) -> QuoteBreakdown {
    let mode = input.rates.mode();

    let Some(product) = input.product.as_ref().filter(|p| p.has_capacity()) else {
        info!(mode = mode.as_str(), "no product or capacity selected; returning empty quote");
        return QuoteBreakdown::empty(mode);
    };

    let capacity_kw = product.capacity_kw;
    let list_price = input.price_override.unwrap_or(product.base_price);

    // Step 1
    let extra_costs = compute_extra_costs(
        capacity_kw,
        &input.extras,
        product.out_of_area_fee,
        defaults.out_of_area_fee,
    );

    // Step 2
    let (margin_markup, margin_amount) = resolve_margin(input.incentive.margin, &extra_costs);

    // Step 3
    let taxed = apply_tax(
        input.rates,
        list_price,
        saturating_add(extra_costs.total, margin_markup),
    );

    // Step 4
    let allocation = allocate_incentive(margin_amount, input.incentive.mode);

    // Step 5
    let discount = round_half_up(non_negative(input.discount, "discount"));
    let grand_total = max(round_half_up(taxed.total - discount), Decimal::ZERO);

    // Step 6
    let central = non_negative(
        input.central_subsidy.unwrap_or(defaults.subsidy.central),
        "central_subsidy",
    );
    let state = non_negative(
        input.state_subsidy.unwrap_or(defaults.subsidy.state),
        "state_subsidy",
    );
    let savings = estimate_savings(capacity_kw, grand_total, central, state, &defaults.savings);

    debug!(
        mode = mode.as_str(),
        total = %taxed.total,
        discount = %discount,
        grand_total = %grand_total,
        effective_cost = %savings.net_cost,
        "assembled quote"
    );

    QuoteBreakdown {
        empty: false,
        mode,
        capacity_kw,
        base_price: taxed.base_price,
        margin_markup,
        margin_amount,
        extra_costs,
        taxable_subtotal: taxed.taxable_subtotal,
        tax: taxed.tax,
        total_before_discount: taxed.total,
        discount,
        grand_total,
        incentive: IncentiveSplit {
            amount: allocation.incentive_amount,
            company_retained_margin: allocation.retained_amount,
        },
        subsidy: SubsidySummary {
            central: round_half_up(central),
            state: round_half_up(state),
            total: savings.total_subsidy,
        },
        effective_cost: savings.net_cost,
        savings: SavingsSummary {
            units_per_day: savings.units_per_day,
            annual_units: savings.annual_units,
            annual_savings: savings.annual_savings,
            roi_years: savings.roi_years,
        },
    }
}

/// Returns `(markup added to the subtotal, margin the incentive is drawn from)`.
fn resolve_margin(
    source: MarginSource,
    extra_costs: &ExtraCosts,
) -> (Decimal, Decimal) {
    match source {
        MarginSource::Markup(amount) => {
            let markup = round_half_up(non_negative(amount, "margin.markup"));
            (markup, markup)
        }
        MarginSource::ExtraCost(kind) => (Decimal::ZERO, round_half_up(extra_costs.get(kind))),
    }
}

/// Runs the tax mode selected by `rates`.
fn apply_tax(
    rates: RateConfig,
    list_price: Decimal,
    additions: Decimal,
) -> TaxedPrice {
    match rates {
        RateConfig::Composite { rate_percent } => {
            let tax = reverse_inclusive_tax(list_price, rate_percent, additions);
            TaxedPrice {
                base_price: tax.base,
                taxable_subtotal: tax.taxable_subtotal,
                tax: TaxAmounts {
                    bracket_a_amount: tax.tax_amount,
                    bracket_b_amount: Decimal::ZERO,
                    total_amount: tax.tax_amount,
                },
                total: tax.total,
            }
        }
        RateConfig::Split {
            share_percent,
            rate_a_percent,
            rate_b_percent,
        } => {
            let base_price = round_half_up(non_negative(list_price, "base_price"));
            let tax = split_rate_tax(
                base_price,
                additions,
                share_percent,
                rate_a_percent,
                rate_b_percent,
            );
            TaxedPrice {
                base_price,
                taxable_subtotal: tax.subtotal,
                tax: TaxAmounts {
                    bracket_a_amount: tax.bracket_a_amount,
                    bracket_b_amount: tax.bracket_b_amount,
                    total_amount: tax.total_tax,
                },
                total: tax.total,
            }
        }
    }
}

//! Goods and services tax on solar system quotes.
//!
//! Two pricing modes are supported:
//!
//! - **Inclusive reversal** ([`reverse_inclusive_tax`]): the listed price
//!   already contains tax at a composite rate. The pre-tax base is derived,
//!   extra costs are added, and tax is charged again on the combined value.
//! - **Split rate** ([`split_rate_tax`]): the listed price is pre-tax. A
//!   configured share of the subtotal is taxed at rate A (supply of goods),
//!   the remainder at rate B (services).
//!
//! Every derived amount is rounded to two decimals where it is computed. In
//! split mode each bracket is rounded on its own before the two are summed,
//! which can differ by a paisa from rounding one blended amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::split_rate_tax;
//!
//! let tax = split_rate_tax(dec!(180000), dec!(0), dec!(70), dec!(5), dec!(18));
//!
//! assert_eq!(tax.bracket_a_amount, dec!(6300.00));
//! assert_eq!(tax.bracket_b_amount, dec!(9720.00));
//! assert_eq!(tax.total_tax, dec!(16020.00));
//! assert_eq!(tax.total, dec!(196020.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{
    clamp_percent, non_negative, round_half_up, saturating_add, saturating_div, saturating_mul,
};

/// Result of reversing tax out of an inclusive price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveTax {
    /// Pre-tax price derived from the inclusive price.
    pub base: Decimal,
    /// Base plus extra costs.
    pub taxable_subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Result of the two-bracket tax computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitTax {
    pub subtotal: Decimal,
    pub bracket_a_amount: Decimal,
    pub bracket_b_amount: Decimal,
    pub total_tax: Decimal,
    pub total: Decimal,
}

/// Derives the pre-tax base from a tax-inclusive price and re-taxes it
/// together with the extra costs.
///
/// A zero rate leaves the base equal to the inclusive price and charges no
/// tax. Negative inputs are clamped to zero.
///
/// Tax is charged on the unrounded base plus extra costs; `base` and
/// `taxable_subtotal` are rounded for display only. Without extra costs the
/// total therefore reproduces the inclusive price.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::reverse_inclusive_tax;
///
/// let tax = reverse_inclusive_tax(dec!(118000), dec!(18), dec!(0));
///
/// assert_eq!(tax.base, dec!(100000.00));
/// assert_eq!(tax.tax_amount, dec!(18000.00));
/// assert_eq!(tax.total, dec!(118000.00));
/// ```
pub fn reverse_inclusive_tax(
    inclusive_price: Decimal,
    rate_percent: Decimal,
    extra_costs_total: Decimal,
) -> InclusiveTax {
    let inclusive_price = non_negative(inclusive_price, "inclusive_price");
    let rate = non_negative(rate_percent, "rate_percent") / Decimal::ONE_HUNDRED;
    let extra_costs_total = non_negative(extra_costs_total, "extra_costs_total");

    let exact_base = saturating_div(inclusive_price, saturating_add(Decimal::ONE, rate));
    let exact_subtotal = saturating_add(exact_base, extra_costs_total);
    let tax_amount = round_half_up(saturating_mul(exact_subtotal, rate));
    let total = round_half_up(saturating_add(exact_subtotal, tax_amount));
    let base = round_half_up(exact_base);
    let taxable_subtotal = round_half_up(exact_subtotal);

    debug!(
        base = %base,
        taxable_subtotal = %taxable_subtotal,
        tax_amount = %tax_amount,
        total = %total,
        "reversed inclusive tax"
    );

    InclusiveTax {
        base,
        taxable_subtotal,
        tax_amount,
        total,
    }
}

/// Taxes `base_price + extra_costs_total` in two brackets.
///
/// `share_percent` is clamped to [0, 100]; rates are clamped to zero or
/// above. Each bracket is rounded independently and the total tax is the sum
/// of the rounded brackets.
pub fn split_rate_tax(
    base_price: Decimal,
    extra_costs_total: Decimal,
    share_percent: Decimal,
    rate_a_percent: Decimal,
    rate_b_percent: Decimal,
) -> SplitTax {
    let subtotal = round_half_up(saturating_add(
        non_negative(base_price, "base_price"),
        non_negative(extra_costs_total, "extra_costs_total"),
    ));
    let share_a = clamp_percent(share_percent, "share_percent") / Decimal::ONE_HUNDRED;
    let share_b = Decimal::ONE - share_a;
    let rate_a = non_negative(rate_a_percent, "rate_a_percent") / Decimal::ONE_HUNDRED;
    let rate_b = non_negative(rate_b_percent, "rate_b_percent") / Decimal::ONE_HUNDRED;

    let bracket_a_amount = round_half_up(saturating_mul(saturating_mul(subtotal, share_a), rate_a));
    let bracket_b_amount = round_half_up(saturating_mul(saturating_mul(subtotal, share_b), rate_b));
    let total_tax = round_half_up(saturating_add(bracket_a_amount, bracket_b_amount));
    let total = round_half_up(saturating_add(subtotal, total_tax));

    debug!(
        subtotal = %subtotal,
        bracket_a = %bracket_a_amount,
        bracket_b = %bracket_b_amount,
        total_tax = %total_tax,
        total = %total,
        "computed split-rate tax"
    );

    SplitTax {
        subtotal,
        bracket_a_amount,
        bracket_b_amount,
        total_tax,
        total,
    }
}

/// Blended percentage equivalent to a split-rate configuration.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::effective_composite_rate;
///
/// // (70% × 5%) + (30% × 18%) = 3.5% + 5.4%
/// assert_eq!(effective_composite_rate(dec!(70), dec!(5), dec!(18)), dec!(8.9));
/// ```
pub fn effective_composite_rate(
    share_percent: Decimal,
    rate_a_percent: Decimal,
    rate_b_percent: Decimal,
) -> Decimal {
    let share_a = clamp_percent(share_percent, "share_percent");
    let share_b = Decimal::ONE_HUNDRED - share_a;
    let blended = saturating_add(
        saturating_mul(share_a, non_negative(rate_a_percent, "rate_a_percent")),
        saturating_mul(share_b, non_negative(rate_b_percent, "rate_b_percent")),
    ) / Decimal::ONE_HUNDRED;
    blended.normalize()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // reverse_inclusive_tax tests
    // =========================================================================

    #[test]
    fn reverse_inclusive_derives_base() {
        let tax = reverse_inclusive_tax(dec!(180000), dec!(8.9), dec!(0));

        // 180000 / 1.089 = 165289.2561...
        assert_eq!(tax.base, dec!(165289.26));
        assert_eq!(tax.taxable_subtotal, dec!(165289.26));
    }

    #[test]
    fn reverse_inclusive_reapplies_tax() {
        let tax = reverse_inclusive_tax(dec!(180000), dec!(8.9), dec!(0));

        // 165289.2561... × 0.089 = 14710.7438...
        assert_eq!(tax.tax_amount, dec!(14710.74));
        assert_eq!(tax.total, dec!(180000.00));
    }

    #[test]
    fn reverse_inclusive_adds_extra_costs_before_tax() {
        let tax = reverse_inclusive_tax(dec!(118000), dec!(18), dec!(1000));

        assert_eq!(tax.base, dec!(100000.00));
        assert_eq!(tax.taxable_subtotal, dec!(101000.00));
        assert_eq!(tax.tax_amount, dec!(18180.00));
        assert_eq!(tax.total, dec!(119180.00));
    }

    #[test]
    fn reverse_inclusive_zero_rate_keeps_price() {
        let tax = reverse_inclusive_tax(dec!(180000), dec!(0), dec!(0));

        assert_eq!(tax.base, dec!(180000));
        assert_eq!(tax.tax_amount, dec!(0));
        assert_eq!(tax.total, dec!(180000));
    }

    #[test]
    fn reverse_inclusive_round_trips_within_a_paisa() {
        let prices = [dec!(0), dec!(1), dec!(99.99), dec!(135000), dec!(305000), dec!(515000)];
        let rates = [dec!(0), dec!(5), dec!(8.9), dec!(12), dec!(18), dec!(28)];

        for price in prices {
            for rate in rates {
                let tax = reverse_inclusive_tax(price, rate, dec!(0));
                let rebuilt = round_half_up(tax.base * (Decimal::ONE + rate / dec!(100)));

                assert!(
                    (rebuilt - price).abs() <= dec!(0.01),
                    "price {price} rate {rate} rebuilt {rebuilt}"
                );
                assert_eq!(tax.total, price, "price {price} rate {rate}");
            }
        }
    }

    #[test]
    fn reverse_inclusive_taxes_unrounded_base() {
        // 100017 / 1.089 = 91842.9752...; taxing the rounded 91842.98 would
        // give 8174.03 and a total of 100017.01.
        let tax = reverse_inclusive_tax(dec!(100017), dec!(8.9), dec!(0));

        assert_eq!(tax.base, dec!(91842.98));
        assert_eq!(tax.tax_amount, dec!(8174.02));
        assert_eq!(tax.total, dec!(100017.00));
    }

    #[test]
    fn reverse_inclusive_saturates_huge_price() {
        let tax = reverse_inclusive_tax(Decimal::MAX, dec!(8.9), Decimal::MAX);

        assert_eq!(tax.taxable_subtotal, Decimal::MAX);
        assert_eq!(tax.total, Decimal::MAX);
    }

    #[test]
    fn reverse_inclusive_clamps_negative_price() {
        let tax = reverse_inclusive_tax(dec!(-500), dec!(8.9), dec!(0));

        assert_eq!(tax.total, dec!(0));
    }

    // =========================================================================
    // split_rate_tax tests
    // =========================================================================

    #[test]
    fn split_rate_taxes_each_bracket() {
        let tax = split_rate_tax(dec!(100000), dec!(0), dec!(70), dec!(5), dec!(18));

        assert_eq!(tax.subtotal, dec!(100000));
        assert_eq!(tax.bracket_a_amount, dec!(3500.00));
        assert_eq!(tax.bracket_b_amount, dec!(5400.00));
        assert_eq!(tax.total_tax, dec!(8900.00));
        assert_eq!(tax.total, dec!(108900.00));
    }

    #[test]
    fn split_rate_includes_extra_costs_in_subtotal() {
        let tax = split_rate_tax(dec!(180000), dec!(20000), dec!(70), dec!(5), dec!(18));

        assert_eq!(tax.subtotal, dec!(200000));
        assert_eq!(tax.bracket_a_amount, dec!(7000.00));
        assert_eq!(tax.bracket_b_amount, dec!(10800.00));
    }

    #[test]
    fn split_rate_rounds_brackets_independently() {
        // A: 1.01 × 0.5 × 0.05 = 0.02525 -> 0.03
        // B: 1.01 × 0.5 × 0.05 = 0.02525 -> 0.03
        // One blended rounding would give 0.0505 -> 0.05
        let tax = split_rate_tax(dec!(1.01), dec!(0), dec!(50), dec!(5), dec!(5));

        assert_eq!(tax.bracket_a_amount, dec!(0.03));
        assert_eq!(tax.bracket_b_amount, dec!(0.03));
        assert_eq!(tax.total_tax, dec!(0.06));
    }

    #[test]
    fn split_rate_brackets_sum_to_total_tax() {
        let shares = [dec!(0), dec!(12.5), dec!(33), dec!(70), dec!(99.9), dec!(100)];

        for share in shares {
            let tax = split_rate_tax(dec!(187654.33), dec!(1234.56), share, dec!(5), dec!(18));

            assert_eq!(tax.bracket_a_amount + tax.bracket_b_amount, tax.total_tax);
            assert_eq!(tax.subtotal + tax.total_tax, tax.total);
        }
    }

    #[test]
    fn split_rate_clamps_share_above_hundred() {
        let tax = split_rate_tax(dec!(100000), dec!(0), dec!(150), dec!(5), dec!(18));

        assert_eq!(tax.bracket_a_amount, dec!(5000.00));
        assert_eq!(tax.bracket_b_amount, dec!(0));
    }

    #[test]
    fn split_rate_clamps_negative_share() {
        let tax = split_rate_tax(dec!(100000), dec!(0), dec!(-10), dec!(5), dec!(18));

        assert_eq!(tax.bracket_a_amount, dec!(0));
        assert_eq!(tax.bracket_b_amount, dec!(18000.00));
    }

    #[test]
    fn split_rate_clamps_negative_rates() {
        let tax = split_rate_tax(dec!(100000), dec!(0), dec!(70), dec!(-5), dec!(18));

        assert_eq!(tax.bracket_a_amount, dec!(0));
        assert_eq!(tax.total_tax, dec!(5400.00));
    }

    #[test]
    fn split_rate_saturates_huge_subtotal() {
        let tax = split_rate_tax(Decimal::MAX, dec!(1), dec!(70), dec!(5), dec!(18));

        assert_eq!(tax.subtotal, Decimal::MAX);
        assert_eq!(tax.total, Decimal::MAX);
    }

    // =========================================================================
    // effective_composite_rate tests
    // =========================================================================

    #[test]
    fn effective_rate_matches_split_defaults() {
        assert_eq!(effective_composite_rate(dec!(70), dec!(5), dec!(18)), dec!(8.9));
    }

    #[test]
    fn effective_rate_with_full_share_is_rate_a() {
        assert_eq!(effective_composite_rate(dec!(100), dec!(5), dec!(18)), dec!(5));
    }
}

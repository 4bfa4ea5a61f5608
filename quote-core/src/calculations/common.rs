//! Common utility functions for quote calculations.
//!
//! This module provides shared functionality used across every calculator,
//! including rounding and the clamp points that turn out-of-range input into
//! something the engine can price.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to one decimal place, half away from zero.
///
/// Used for payback periods, which are reported in tenths of a year.
pub fn round_one_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a monetary or quantity input to zero when it is negative.
///
/// `field` names the input in the warning emitted when a clamp happens.
pub fn non_negative(
    value: Decimal,
    field: &'static str,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative input clamped to zero");
        Decimal::ZERO
    } else {
        value
    }
}

/// Clamps a percentage to the closed range [0, 100].
pub fn clamp_percent(
    value: Decimal,
    field: &'static str,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "percentage below 0 clamped to 0");
        Decimal::ZERO
    } else if value > Decimal::ONE_HUNDRED {
        warn!(field, value = %value, "percentage above 100 clamped to 100");
        Decimal::ONE_HUNDRED
    } else {
        value
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Adds two values, saturating at `Decimal::MAX` / `Decimal::MIN` instead of
/// overflowing.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::saturating_add;
///
/// assert_eq!(saturating_add(dec!(1.25), dec!(2)), dec!(3.25));
/// assert_eq!(saturating_add(Decimal::MAX, dec!(1)), Decimal::MAX);
/// ```
pub fn saturating_add(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!(a = %a, b = %b, "sum out of range saturated");
        saturated(a.is_sign_negative())
    })
}

/// Multiplies two values, saturating at `Decimal::MAX` / `Decimal::MIN`
/// instead of overflowing.
pub fn saturating_mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!(a = %a, b = %b, "product out of range saturated");
        saturated(a.is_sign_negative() != b.is_sign_negative())
    })
}

/// Divides `a` by `b`, saturating when the quotient is out of range.
///
/// Division by zero yields zero.
pub fn saturating_div(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if b.is_zero() {
        warn!(a = %a, "division by zero yields zero");
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or_else(|| {
        warn!(a = %a, b = %b, "quotient out of range saturated");
        saturated(a.is_sign_negative() != b.is_sign_negative())
    })
}

/// Converts a floating point value into a [`Decimal`].
///
/// NaN, infinities and values outside the `Decimal` range become zero. This
/// is the single entry point for `f64` data coming from outside the engine.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::finite_or_zero;
///
/// assert_eq!(finite_or_zero(6.5), dec!(6.5));
/// assert_eq!(finite_or_zero(f64::NAN), dec!(0));
/// assert_eq!(finite_or_zero(f64::INFINITY), dec!(0));
/// ```
pub fn finite_or_zero(value: f64) -> Decimal {
    if !value.is_finite() {
        warn!(value, "non-finite input coerced to zero");
        return Decimal::ZERO;
    }
    Decimal::try_from(value).unwrap_or_else(|_| {
        warn!(value, "input outside decimal range coerced to zero");
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // round_one_dp tests
    // =========================================================================

    #[test]
    fn round_one_dp_rounds_up_at_midpoint() {
        assert_eq!(round_one_dp(dec!(2.45)), dec!(2.5));
    }

    #[test]
    fn round_one_dp_rounds_down_below_midpoint() {
        assert_eq!(round_one_dp(dec!(2.449)), dec!(2.4));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_negative_and_positive() {
        assert_eq!(max(dec!(-50.00), dec!(0)), dec!(0));
    }

    // =========================================================================
    // clamp tests
    // =========================================================================

    #[test]
    fn non_negative_clamps_negative_values() {
        assert_eq!(non_negative(dec!(-0.01), "test"), dec!(0));
    }

    #[test]
    fn non_negative_keeps_positive_values() {
        assert_eq!(non_negative(dec!(1500), "test"), dec!(1500));
    }

    #[test]
    fn clamp_percent_bounds_both_ends() {
        assert_eq!(clamp_percent(dec!(-5), "test"), dec!(0));
        assert_eq!(clamp_percent(dec!(120), "test"), dec!(100));
        assert_eq!(clamp_percent(dec!(70), "test"), dec!(70));
    }

    // =========================================================================
    // saturating arithmetic tests
    // =========================================================================

    #[test]
    fn saturating_add_keeps_in_range_sums_exact() {
        assert_eq!(saturating_add(dec!(165289.26), dec!(4500)), dec!(169789.26));
    }

    #[test]
    fn saturating_add_pins_to_bounds() {
        assert_eq!(saturating_add(Decimal::MAX, Decimal::MAX), Decimal::MAX);
        assert_eq!(saturating_add(Decimal::MIN, dec!(-1)), Decimal::MIN);
    }

    #[test]
    fn saturating_mul_pins_to_bounds() {
        assert_eq!(saturating_mul(Decimal::MAX, dec!(1000)), Decimal::MAX);
        assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
        assert_eq!(saturating_mul(dec!(3.3), dec!(1000)), dec!(3300.0));
    }

    #[test]
    fn saturating_div_by_zero_is_zero() {
        assert_eq!(saturating_div(dec!(150000), Decimal::ZERO), dec!(0));
    }

    #[test]
    fn saturating_div_pins_to_bounds() {
        assert_eq!(saturating_div(Decimal::MAX, dec!(0.001)), Decimal::MAX);
        assert_eq!(saturating_div(dec!(150000), dec!(60000)), dec!(2.5));
    }

    // =========================================================================
    // finite_or_zero tests
    // =========================================================================

    #[test]
    fn finite_or_zero_converts_finite_values() {
        assert_eq!(finite_or_zero(78000.0), dec!(78000));
    }

    #[test]
    fn finite_or_zero_rejects_non_finite_values() {
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), dec!(0));
        assert_eq!(finite_or_zero(f64::NAN), dec!(0));
    }
}

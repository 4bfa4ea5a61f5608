//! Splits the quote margin between the salesperson and the company.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::IncentiveMode;
use crate::calculations::common::{clamp_percent, non_negative, round_half_up, saturating_mul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveAllocation {
    pub incentive_amount: Decimal,
    pub retained_amount: Decimal,
}

/// Draws the salesperson incentive from `margin_amount`.
///
/// - Percent mode pays `margin × percent / 100` with the percentage clamped
///   to [0, 100].
/// - Fixed mode pays the fixed amount, silently capped at the margin.
///
/// The incentive is never negative and never exceeds the margin, and
/// `incentive_amount + retained_amount == margin_amount`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::IncentiveMode;
/// use quote_core::calculations::allocate_incentive;
///
/// let split = allocate_incentive(dec!(10000), IncentiveMode::Fixed(dec!(15000)));
///
/// assert_eq!(split.incentive_amount, dec!(10000));
/// assert_eq!(split.retained_amount, dec!(0));
/// ```
pub fn allocate_incentive(
    margin_amount: Decimal,
    mode: IncentiveMode,
) -> IncentiveAllocation {
    let margin = round_half_up(non_negative(margin_amount, "margin_amount"));

    let incentive_amount = match mode {
        IncentiveMode::Percent(percent) => {
            let share = clamp_percent(percent, "incentive.percent") / Decimal::ONE_HUNDRED;
            round_half_up(saturating_mul(margin, share))
        }
        IncentiveMode::Fixed(amount) => {
            let amount = non_negative(amount, "incentive.fixed_amount");
            if amount > margin {
                warn!(
                    fixed_amount = %amount,
                    margin = %margin,
                    "fixed incentive capped at margin"
                );
            }
            round_half_up(amount.min(margin))
        }
    };

    let retained_amount = round_half_up(margin - incentive_amount);

    debug!(
        margin = %margin,
        incentive = %incentive_amount,
        retained = %retained_amount,
        "allocated incentive"
    );

    IncentiveAllocation {
        incentive_amount,
        retained_amount,
    }
}

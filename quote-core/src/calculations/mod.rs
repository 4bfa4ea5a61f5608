//! Pricing calculations for solar system quotations.
//!
//! Each calculator is a pure function over rounded decimals. The
//! [`assembler`] runs them in a fixed order to produce a
//! [`QuoteBreakdown`](crate::QuoteBreakdown).

pub mod assembler;
pub mod common;
pub mod extra_costs;
pub mod incentive;
pub mod savings;
pub mod sizing;
pub mod tax_engine;

pub use assembler::compute_quote;
pub use extra_costs::compute_extra_costs;
pub use incentive::{IncentiveAllocation, allocate_incentive};
pub use savings::{SavingsEstimate, estimate_savings};
pub use sizing::{SystemSize, custom_product, size_system};
pub use tax_engine::{
    InclusiveTax, SplitTax, effective_composite_rate, reverse_inclusive_tax, split_rate_tax,
};

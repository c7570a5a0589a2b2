//! Tiered rate tables and the cost of a quantity under them.
//!
//! Two billing policies exist in the wild for the same table shape and
//! they disagree; both are first-class here and the caller picks one
//! explicitly:
//!
//! - [`BillingPolicy::Marginal`] — progressive, like income-tax brackets:
//!   each unit is billed at the rate of the bracket it falls in.
//! - [`BillingPolicy::SingleBracket`] — the bracket containing the *total*
//!   prices every unit.
//!
//! Tables are normalized (sorted by lower bound) on every computation and
//! tolerate gaps, overlaps, and unsorted input without failing.

pub mod consumption;
pub mod cost;
pub mod tier;

pub use consumption::{monthly_bill, total_monthly_kwh, Appliance, BillSummary};
pub use cost::{
    applicable_tier, breakdown, cost_for_quantity, marginal_breakdown, marginal_cost,
    single_bracket_cost, BillingPolicy, CostQuote, TierCharge,
};
pub use tier::{normalized, RateTier};

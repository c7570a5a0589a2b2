//! Cost of a quantity under a rate table, for both billing policies.

use serde::{Deserialize, Serialize};

use crate::tier::{normalized, RateTier};

/// How a rate table is applied to a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPolicy {
    /// Progressive schedule: lower brackets fill first and each consumed
    /// portion is billed at its own bracket's rate.
    Marginal,
    /// The whole quantity is billed at the rate of the one bracket that
    /// contains the total.
    SingleBracket,
}

/// A priced quantity. `priced` is `false` when some (or all) of the
/// quantity had no applicable tier; the unpriced portion simply costs
/// nothing, it never raises an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostQuote {
    pub cost: f64,
    pub priced: bool,
}

/// One line of a per-tier breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierCharge {
    pub tier: RateTier,
    pub consumed: f64,
    pub cost: f64,
}

/// Cost of consuming `x` units under `tiers` with the chosen policy.
pub fn cost_for_quantity(tiers: &[RateTier], x: f64, policy: BillingPolicy) -> CostQuote {
    match policy {
        BillingPolicy::Marginal => marginal_cost(tiers, x),
        BillingPolicy::SingleBracket => single_bracket_cost(tiers, x),
    }
}

/// Progressive cost: brackets are consumed in sorted order, each by its
/// width, until the quantity is exhausted.
///
/// Consumption goes by bracket *width* (`upper - from`), so gaps between
/// brackets do not strand any quantity and overlaps cannot double-bill.
/// Quantity left over after the last bracket is unbilled and flips
/// `priced` off.
pub fn marginal_cost(tiers: &[RateTier], x: f64) -> CostQuote {
    let mut remaining = x.max(0.0);
    let mut cost = 0.0;

    for tier in normalized(tiers) {
        if remaining <= 0.0 {
            break;
        }
        let take = remaining.min(tier.width());
        if take <= 0.0 {
            continue;
        }
        cost += take * tier.rate;
        remaining -= take;
    }

    CostQuote {
        cost,
        priced: remaining <= 1e-9,
    }
}

/// Per-tier lines of the progressive cost.
pub fn marginal_breakdown(tiers: &[RateTier], x: f64) -> Vec<TierCharge> {
    let mut remaining = x.max(0.0);
    let mut charges = Vec::new();

    for tier in normalized(tiers) {
        if remaining <= 0.0 {
            break;
        }
        let take = remaining.min(tier.width());
        if take <= 0.0 {
            continue;
        }
        charges.push(TierCharge {
            tier,
            consumed: take,
            cost: take * tier.rate,
        });
        remaining -= take;
    }

    charges
}

/// Flat cost: the first sorted tier containing `x` prices the entire
/// quantity; with no containing tier the quantity is unpriced.
pub fn single_bracket_cost(tiers: &[RateTier], x: f64) -> CostQuote {
    match applicable_tier(tiers, x) {
        Some(tier) => CostQuote {
            cost: x.max(0.0) * tier.rate,
            priced: true,
        },
        None => CostQuote {
            cost: 0.0,
            priced: false,
        },
    }
}

/// The tier that would price `x` under the single-bracket policy.
pub fn applicable_tier(tiers: &[RateTier], x: f64) -> Option<RateTier> {
    normalized(tiers).into_iter().find(|t| t.contains(x))
}

/// Breakdown lines under either policy: the consumed-per-bracket schedule
/// for marginal billing, or the single applied bracket.
pub fn breakdown(tiers: &[RateTier], x: f64, policy: BillingPolicy) -> Vec<TierCharge> {
    match policy {
        BillingPolicy::Marginal => marginal_breakdown(tiers, x),
        BillingPolicy::SingleBracket => match applicable_tier(tiers, x) {
            Some(tier) => vec![TierCharge {
                tier,
                consumed: x.max(0.0),
                cost: x.max(0.0) * tier.rate,
            }],
            None => Vec::new(),
        },
    }
}

//! Household consumption model: appliances to monthly energy to a bill.

use serde::{Deserialize, Serialize};

use crate::cost::{breakdown, cost_for_quantity, BillingPolicy, CostQuote, TierCharge};
use crate::tier::RateTier;

/// One appliance line as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    pub quantity: f64,
    pub power_kw: f64,
    pub hours_per_month: f64,
}

impl Appliance {
    /// Energy drawn per month: quantity × kW × hours.
    pub fn monthly_kwh(&self) -> f64 {
        self.quantity * self.power_kw * self.hours_per_month
    }
}

/// Total monthly energy across all appliance lines.
pub fn total_monthly_kwh(items: &[Appliance]) -> f64 {
    items.iter().map(Appliance::monthly_kwh).sum()
}

/// A month's bill: total energy, its quote, and the per-tier lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary {
    pub total_kwh: f64,
    pub quote: CostQuote,
    pub breakdown: Vec<TierCharge>,
}

/// Price a month of consumption under the chosen policy.
pub fn monthly_bill(items: &[Appliance], tiers: &[RateTier], policy: BillingPolicy) -> BillSummary {
    let total_kwh = total_monthly_kwh(items);
    BillSummary {
        total_kwh,
        quote: cost_for_quantity(tiers, total_kwh, policy),
        breakdown: breakdown(tiers, total_kwh, policy),
    }
}

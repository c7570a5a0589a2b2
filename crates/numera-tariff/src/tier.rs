//! Rate tiers: numeric brackets with a per-unit price.

use serde::{Deserialize, Serialize};

/// One bracket of a rate table.
///
/// `to: None` means the bracket is unbounded above (a trailing "and
/// everything beyond" tier, `null` in the JSON tables).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub from: f64,
    pub to: Option<f64>,
    pub rate: f64,
}

impl RateTier {
    pub fn new(from: f64, to: Option<f64>, rate: f64) -> Self {
        RateTier { from, to, rate }
    }

    /// Upper bound, `+∞` when unbounded.
    pub fn upper(&self) -> f64 {
        self.to.unwrap_or(f64::INFINITY)
    }

    /// Bracket width, `+∞` when unbounded.
    pub fn width(&self) -> f64 {
        self.upper() - self.from
    }

    /// Closed-interval containment: `from <= x <= upper`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.from && x <= self.upper()
    }
}

/// Tiers sorted ascending by `from`.
///
/// Tables arrive from user input and may be unsorted, gapped or
/// overlapping; every computation normalizes first and must cope with
/// whatever remains.
pub fn normalized(tiers: &[RateTier]) -> Vec<RateTier> {
    let mut sorted = tiers.to_vec();
    sorted.sort_by(|a, b| a.from.total_cmp(&b.from));
    sorted
}

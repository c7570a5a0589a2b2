//! Tolerances shared by the interval-scanning searches.

/// Stopping and deduplication tolerances for the scanning functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanTolerances {
    /// |f(x)| below this counts as a zero.
    pub zero_tol: f64,
    /// Results closer together than this collapse into one.
    pub min_spacing: f64,
    /// Iteration cap for bisection refinement.
    pub max_bisections: usize,
}

impl ScanTolerances {
    pub const DEFAULT_ZERO_TOL: f64 = 1e-9;
    pub const DEFAULT_MIN_SPACING: f64 = 1e-6;
    pub const DEFAULT_MAX_BISECTIONS: usize = 60;
}

impl Default for ScanTolerances {
    fn default() -> Self {
        ScanTolerances {
            zero_tol: Self::DEFAULT_ZERO_TOL,
            min_spacing: Self::DEFAULT_MIN_SPACING,
            max_bisections: Self::DEFAULT_MAX_BISECTIONS,
        }
    }
}

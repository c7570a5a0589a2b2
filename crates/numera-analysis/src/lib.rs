//! Numeric analysis of formulas over an interval.
//!
//! Pure, synchronous scans over a user-supplied formula:
//!
//! - sampling: `linspace`, `sample`
//! - root finding: sign-change scan + bisection (`find_roots`)
//! - intersections of two formulas (`find_intersections`)
//! - sampled extrema (`find_extremes`)
//! - composite trapezoid integration (`integrate`,
//!   `integrate_absolute_difference`, `average_value`)
//!
//! Every scan skips unevaluable points instead of failing, and treats a
//! degenerate interval (`a >= b`) as empty.

pub mod extremes;
pub mod integrate;
pub mod intersections;
pub mod point;
pub mod roots;
pub mod sample;
pub mod tolerances;

pub use extremes::{find_extremes, Extremes};
pub use integrate::{average_value, integrate, integrate_absolute_difference};
pub use intersections::{find_intersections, find_intersections_with};
pub use point::Point;
pub use roots::{find_roots, find_roots_with};
pub use sample::{linspace, sample, SamplePoint};
pub use tolerances::ScanTolerances;

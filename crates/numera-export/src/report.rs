//! The comparison report: everything the analysis engine knows about a
//! pair of formulas over an interval, as one serializable bundle.

use std::fmt;

use serde::Serialize;

use numera_analysis::{
    average_value, find_extremes, find_intersections, find_roots,
    integrate_absolute_difference, Extremes, Point,
};
use numera_eval::Expression;

/// Analysis results for one formula.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSummary {
    pub formula: String,
    pub roots: Vec<f64>,
    pub extremes: Extremes,
    pub average: f64,
}

/// Analysis results for a pair of formulas over `[from, to]`.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub from: f64,
    pub to: f64,
    pub first: FunctionSummary,
    pub second: FunctionSummary,
    pub intersections: Vec<Point>,
    pub enclosed_area: f64,
}

/// Run the full analysis of `f` against `g` over `[a, b]`.
///
/// `samples` is the caller's density knob; the individual scans apply
/// their own floors (roots get at least 200 sub-intervals, the dense
/// scans at least 400) so a low setting degrades the plot, not the
/// analysis.
pub fn compare(f: &Expression, g: &Expression, a: f64, b: f64, samples: usize) -> ComparisonReport {
    let root_samples = (samples / 3).max(200);
    let dense_samples = samples.max(400);

    ComparisonReport {
        from: a,
        to: b,
        first: summarize(f, a, b, root_samples, dense_samples),
        second: summarize(g, a, b, root_samples, dense_samples),
        intersections: find_intersections(f, g, a, b, dense_samples),
        enclosed_area: integrate_absolute_difference(f, g, a, b, dense_samples),
    }
}

fn summarize(
    expr: &Expression,
    a: f64,
    b: f64,
    root_samples: usize,
    dense_samples: usize,
) -> FunctionSummary {
    FunctionSummary {
        formula: expr.source().to_string(),
        roots: find_roots(expr, a, b, root_samples),
        extremes: find_extremes(expr, a, b, dense_samples),
        average: average_value(expr, a, b, dense_samples),
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "interval: [{}, {}]", self.from, self.to)?;
        write_summary(out, "f", &self.first)?;
        write_summary(out, "g", &self.second)?;

        writeln!(out, "intersections:")?;
        if self.intersections.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (i, p) in self.intersections.iter().enumerate() {
            writeln!(out, "  {}. x={:.4}, y={:.4}", i + 1, p.x, p.y)?;
        }

        writeln!(out, "enclosed area ≈ {:.6}", self.enclosed_area)
    }
}

fn write_summary(
    out: &mut fmt::Formatter<'_>,
    label: &str,
    summary: &FunctionSummary,
) -> fmt::Result {
    writeln!(out, "{}(x) = {}", label, summary.formula)?;

    if summary.roots.is_empty() {
        writeln!(out, "  roots: (none)")?;
    } else {
        let roots: Vec<String> = summary.roots.iter().map(|r| format!("{:.4}", r)).collect();
        writeln!(out, "  roots: {}", roots.join(", "))?;
    }

    match summary.extremes.max {
        Some(p) => writeln!(out, "  max: x={:.4}, y={:.4}", p.x, p.y)?,
        None => writeln!(out, "  max: (undefined)")?,
    }
    match summary.extremes.min {
        Some(p) => writeln!(out, "  min: x={:.4}, y={:.4}", p.x, p.y)?,
        None => writeln!(out, "  min: (undefined)")?,
    }

    writeln!(out, "  average ≈ {:.6}", summary.average)
}

//! Triangle metrics from side lengths.
//!
//! Sides follow the usual naming: `a` opposite vertex A, `b` opposite B,
//! `c` opposite C.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangleError {
    #[error("side lengths must be positive finite numbers")]
    InvalidSide,

    /// The sum of two sides must exceed the third.
    #[error("sides {a}, {b}, {c} violate the triangle inequality")]
    InequalityViolated { a: f64, b: f64, c: f64 },
}

/// Classification by side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SideKind {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by the largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleKind {
    Right,
    Obtuse,
    Acute,
}

/// Interior angles in degrees, by opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Per-vertex lengths (medians, bisectors, altitudes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VertexLengths {
    pub from_a: f64,
    pub from_b: f64,
    pub from_c: f64,
}

/// Validated side lengths of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleSides {
    a: f64,
    b: f64,
    c: f64,
}

const SIDE_EQ_TOL: f64 = 1e-6;

impl TriangleSides {
    /// Validate sides: finite, positive, and satisfying the (strict)
    /// triangle inequality.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, TriangleError> {
        if ![a, b, c].iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(TriangleError::InvalidSide);
        }
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(TriangleError::InequalityViolated { a, b, c });
        }
        Ok(TriangleSides { a, b, c })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Heron's formula. Near-degenerate input can push the radicand a hair
    /// below zero; that clamps to an area of 0.
    pub fn area(&self) -> f64 {
        let s = self.semiperimeter();
        let under = s * (s - self.a) * (s - self.b) * (s - self.c);
        if under <= 0.0 {
            return 0.0;
        }
        under.sqrt()
    }

    /// Interior angles in degrees via the law of cosines; the cosine is
    /// clamped to [-1, 1] against rounding, and the third angle closes the
    /// sum to 180.
    pub fn angles(&self) -> Angles {
        let (a, b, c) = (self.a, self.b, self.c);
        let clamp = |v: f64| v.clamp(-1.0, 1.0);
        let alpha = clamp((b * b + c * c - a * a) / (2.0 * b * c)).acos().to_degrees();
        let beta = clamp((a * a + c * c - b * b) / (2.0 * a * c)).acos().to_degrees();
        let gamma = 180.0 - alpha - beta;
        Angles { alpha, beta, gamma }
    }

    /// Median lengths from each vertex to the opposite side's midpoint.
    pub fn medians(&self) -> VertexLengths {
        let (a, b, c) = (self.a, self.b, self.c);
        VertexLengths {
            from_a: 0.5 * (2.0 * b * b + 2.0 * c * c - a * a).sqrt(),
            from_b: 0.5 * (2.0 * a * a + 2.0 * c * c - b * b).sqrt(),
            from_c: 0.5 * (2.0 * a * a + 2.0 * b * b - c * c).sqrt(),
        }
    }

    /// Internal angle-bisector lengths: from A, `2·b·c·cos(α/2) / (b+c)`,
    /// and cyclically for the other vertices.
    pub fn bisectors(&self) -> VertexLengths {
        let angles = self.angles();
        VertexLengths {
            from_a: bisector_length(self.b, self.c, angles.alpha),
            from_b: bisector_length(self.a, self.c, angles.beta),
            from_c: bisector_length(self.a, self.b, angles.gamma),
        }
    }

    /// Altitude from each vertex: twice the area over the opposite side.
    pub fn altitudes(&self) -> VertexLengths {
        let area = self.area();
        VertexLengths {
            from_a: 2.0 * area / self.a,
            from_b: 2.0 * area / self.b,
            from_c: 2.0 * area / self.c,
        }
    }

    pub fn classify_by_sides(&self) -> SideKind {
        let (a, b, c) = (self.a, self.b, self.c);
        if (a - b).abs() < SIDE_EQ_TOL && (b - c).abs() < SIDE_EQ_TOL {
            SideKind::Equilateral
        } else if (a - b).abs() < SIDE_EQ_TOL
            || (b - c).abs() < SIDE_EQ_TOL
            || (a - c).abs() < SIDE_EQ_TOL
        {
            SideKind::Isosceles
        } else {
            SideKind::Scalene
        }
    }

    /// Right / obtuse / acute by comparing the squared longest side with
    /// the sum of the other two squares.
    pub fn classify_by_angles(&self) -> AngleKind {
        let mut sides = [self.a, self.b, self.c];
        sides.sort_by(f64::total_cmp);
        let [small, mid, large] = sides;
        let diff = large * large - (small * small + mid * mid);
        if diff.abs() < SIDE_EQ_TOL {
            AngleKind::Right
        } else if diff > 0.0 {
            AngleKind::Obtuse
        } else {
            AngleKind::Acute
        }
    }
}

fn bisector_length(adj1: f64, adj2: f64, angle_deg: f64) -> f64 {
    let half = angle_deg.to_radians() / 2.0;
    2.0 * adj1 * adj2 * half.cos() / (adj1 + adj2)
}

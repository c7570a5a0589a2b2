//! Notable centers of a triangle given its vertex coordinates.
//!
//! Constructions that divide by an orientation determinant return `None`
//! for (near-)collinear vertices instead of blowing up.

use crate::point::Point2;

const COLLINEAR_TOL: f64 = 1e-12;

/// Intersection of the medians.
pub fn centroid(a: Point2, b: Point2, c: Point2) -> Point2 {
    Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Center of the circumscribed circle.
pub fn circumcenter(a: Point2, b: Point2, c: Point2) -> Option<Point2> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLLINEAR_TOL {
        return None;
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Some(Point2::new(ux, uy))
}

/// Center of the inscribed circle: the side-length weighted vertex mean.
pub fn incenter(a: Point2, b: Point2, c: Point2) -> Option<Point2> {
    // each weight is the side opposite its vertex
    let wa = b.distance(c);
    let wb = a.distance(c);
    let wc = a.distance(b);
    let p = wa + wb + wc;
    if p == 0.0 {
        return None;
    }
    Some(Point2::new(
        (wa * a.x + wb * b.x + wc * c.x) / p,
        (wa * a.y + wb * b.y + wc * c.y) / p,
    ))
}

/// Intersection of the altitudes.
pub fn orthocenter(a: Point2, b: Point2, c: Point2) -> Option<Point2> {
    // two altitude lines written as A1·x + B1·y = C, solved by Cramer
    let a1 = b.y - c.y;
    let b1 = c.x - b.x;
    let c2 = -(b1 * a.x - a1 * a.y);
    let a3 = c.y - a.y;
    let b3 = a.x - c.x;
    let c4 = -(b3 * b.x - a3 * b.y);
    let det = b1 * (-a3) - b3 * (-a1);
    if det.abs() < COLLINEAR_TOL {
        return None;
    }
    let x = (-c2 * (-a3) - (-c4) * (-a1)) / det;
    let y = (b1 * (-c4) - b3 * (-c2)) / det;
    Some(Point2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> (Point2, Point2, Point2) {
        (
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        )
    }

    #[test]
    fn test_centroid() {
        let (a, b, c) = right_triangle();
        let g = centroid(a, b, c);
        assert!((g.x - 4.0 / 3.0).abs() < 1e-12);
        assert!((g.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_circumcenter_of_right_triangle_is_hypotenuse_midpoint() {
        let (a, b, c) = right_triangle();
        let o = circumcenter(a, b, c).unwrap();
        assert!((o.x - 2.0).abs() < 1e-12);
        assert!((o.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_incenter_of_3_4_5() {
        let (a, b, c) = right_triangle();
        // inradius 1, tangent to both legs at distance 1 from the corner
        let i = incenter(a, b, c).unwrap();
        assert!((i.x - 1.0).abs() < 1e-12);
        assert!((i.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthocenter_of_right_triangle_is_the_right_angle_vertex() {
        let (a, b, c) = right_triangle();
        let h = orthocenter(a, b, c).unwrap();
        assert!((h.x - 0.0).abs() < 1e-9);
        assert!((h.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_collinear_points_have_no_circumcenter() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(circumcenter(a, b, c).is_none());
        assert!(orthocenter(a, b, c).is_none());
    }
}

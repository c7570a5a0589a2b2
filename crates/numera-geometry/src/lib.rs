//! Triangle geometry: metrics from side lengths, classification, and the
//! classical centers from vertex coordinates.
//!
//! Everything here is a pure formula; drawing and applet integration live
//! with the caller.

pub mod centers;
pub mod point;
pub mod triangle;

pub use centers::{centroid, circumcenter, incenter, orthocenter};
pub use point::Point2;
pub use triangle::{
    AngleKind, Angles, SideKind, TriangleError, TriangleSides, VertexLengths,
};

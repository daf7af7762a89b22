//! Drawing point with an optional bulge

use super::Vector2;
use std::fmt;

/// A vertex as it appears in the drawing.
///
/// `bulge` is the curvature hint stored with polyline vertices
/// (0 = straight segment to the next vertex, positive = counterclockwise arc).
/// Geometry routines only look at `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl Point {
    /// Create a point without bulge
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y, bulge: 0.0 }
    }

    /// Create a point carrying a bulge value
    pub const fn with_bulge(x: f64, y: f64, bulge: f64) -> Self {
        Point { x, y, bulge }
    }

    /// Planar location of the point
    pub fn location(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        self.location().distance(&other.location())
    }

    /// Midpoint between two points (bulge dropped)
    pub fn midpoint(&self, other: &Point) -> Point {
        self.location().midpoint(&other.location()).into()
    }

    /// Same location with the bulge cleared
    pub fn without_bulge(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        p.location()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bulge == 0.0 {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "({}, {}; bulge {})", self.x, self.y, self.bulge)
        }
    }
}

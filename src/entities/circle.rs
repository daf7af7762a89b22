//! Circle entity

use super::{Entity, EntityKinds, Polygon, PolygonId};
use crate::types::{BoundingBox2D, Point, Vector2};
use std::f64::consts::PI;

/// A circle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Layer name
    pub layer: String,
    /// Center point of the circle
    pub center: Point,
    /// Radius of the circle
    pub radius: f64,
}

impl Circle {
    /// Side count used when lowering a circle to a polygon
    pub const DEFAULT_SIDES: usize = 20;

    /// Smallest side count accepted by [`Circle::to_polygon`]
    pub const MIN_SIDES: usize = 3;

    /// Create a new circle with center and radius
    pub fn new(layer: impl Into<String>, center: Point, radius: f64) -> Self {
        Circle {
            layer: layer.into(),
            center,
            radius,
        }
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Get the area of the circle
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Approximate the circle by a regular polygon.
    ///
    /// Angles run from 0 to 2π in steps of `π / (sides / 2)` inclusive, so the
    /// ring holds `sides + 1` points and the last one lands back on the first.
    /// Side counts below [`Circle::MIN_SIDES`] are raised to it.
    pub fn to_polygon(&self, id: PolygonId, sides: usize) -> Polygon {
        let sides = sides.max(Self::MIN_SIDES);
        let step = PI / (sides as f64 / 2.0);

        let points = (0..=sides)
            .map(|k| {
                let angle = k as f64 * step;
                Point::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect();

        Polygon::new(id, self.layer.clone(), points)
    }
}

impl Entity for Circle {
    fn layer(&self) -> &str {
        &self.layer
    }

    fn kind(&self) -> EntityKinds {
        EntityKinds::CIRCLE
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        let r = Vector2::new(self.radius.abs(), self.radius.abs());
        let c = self.center.location();
        Some(BoundingBox2D::new(c - r, c + r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new("COLUMNS", Point::new(5.0, 5.0), 10.0);
        assert_eq!(circle.center, Point::new(5.0, 5.0));
        assert_eq!(circle.diameter(), 20.0);
        assert_eq!(circle.entity_type(), "CIRCLE");
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new("0", Point::new(0.0, 0.0), 5.0);
        assert!((circle.area() - 78.53981633974483).abs() < 1e-10);
    }

    #[test]
    fn test_circle_to_square() {
        let circle = Circle::new("0", Point::new(0.0, 0.0), 1.0);
        let polygon = circle.to_polygon(PolygonId(7), 4);
        assert_eq!(polygon.id, PolygonId(7));
        assert_eq!(polygon.layer, "0");
        assert_eq!(polygon.points.len(), 5);
        assert_eq!(polygon.expected_vertex_count, 5);

        let first = polygon.points[0];
        let last = polygon.points[4];
        assert!((first.x - 1.0).abs() < 1e-12 && first.y.abs() < 1e-12);
        assert!(first.distance(&last) < 1e-12);
        assert!((polygon.points[1].y - 1.0).abs() < 1e-12);
        assert!((polygon.points[2].x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_default_sides() {
        let circle = Circle::new("0", Point::new(2.0, -1.0), 3.0);
        let polygon = circle.to_polygon(PolygonId(0), Circle::DEFAULT_SIDES);
        assert_eq!(polygon.points.len(), 21);
        for point in &polygon.points {
            assert!((point.distance(&circle.center) - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_circle_minimum_sides() {
        let circle = Circle::new("0", Point::new(0.0, 0.0), 1.0);
        assert_eq!(circle.to_polygon(PolygonId(0), 0).points.len(), 4);
    }

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new("0", Point::new(1.0, 1.0), 2.0);
        let bbox = circle.bounding_box().unwrap();
        assert_eq!(bbox.min, Vector2::new(-1.0, -1.0));
        assert_eq!(bbox.max, Vector2::new(3.0, 3.0));
    }
}

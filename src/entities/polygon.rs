//! Closed polygon built from an LWPOLYLINE entity

use super::{Entity, EntityKinds};
use crate::geometry;
use crate::types::{BoundingBox2D, Point};
use std::fmt;

/// Identity of a polygon within one collection.
///
/// Extraction numbers polygons by completion order; split products get ids
/// above every id already in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub usize);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A closed polygon.
///
/// `points` are in drawing order and the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Identity inside the owning collection
    pub id: PolygonId,
    /// Layer name
    pub layer: String,
    /// Vertex count announced by the entity (group code 90)
    pub expected_vertex_count: usize,
    /// Vertices
    pub points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon whose expected vertex count matches its points
    pub fn new(id: PolygonId, layer: impl Into<String>, points: Vec<Point>) -> Self {
        Polygon {
            id,
            layer: layer.into(),
            expected_vertex_count: points.len(),
            points,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Check whether the polygon has exactly four vertices
    pub fn is_quadrilateral(&self) -> bool {
        self.points.len() == 4
    }

    /// Even-odd containment test of a point
    pub fn contains(&self, point: &Point) -> bool {
        geometry::point_in_polygon(&self.points, point)
    }

    /// Bounding-box center of the vertices
    pub fn center(&self) -> Option<Point> {
        geometry::bounding_box_center(&self.points)
    }

    /// Unsigned area of the ring
    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.points)
    }
}

impl Entity for Polygon {
    fn layer(&self) -> &str {
        &self.layer
    }

    fn kind(&self) -> EntityKinds {
        EntityKinds::POLYGON
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }

    fn bounding_box(&self) -> Option<BoundingBox2D> {
        geometry::bounding_box(&self.points)
    }
}

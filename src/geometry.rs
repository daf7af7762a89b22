//! Geometry primitives shared by the mapper and the splitter.
//!
//! All routines work on the planar location of [`Point`]s and ignore bulges,
//! so arc segments are treated as their chords.

use crate::entities::Polygon;
use crate::types::{BoundingBox2D, Point, Vector2};

/// Even-odd ray casting test of `test` against the implicitly closed ring `points`.
///
/// Each edge `(i, j = i - 1 mod n)` toggles containment when exactly one of
/// its endpoints lies strictly above `test.y` and `test.x` lies left of the
/// edge's x-intercept at `test.y`. For an axis-aligned square this puts the
/// bottom and left edges inside and the top and right edges outside.
pub fn point_in_polygon(points: &[Point], test: &Point) -> bool {
    let mut inside = false;
    let Some(mut j) = points.len().checked_sub(1) else {
        return false;
    };

    for (i, pi) in points.iter().enumerate() {
        let pj = &points[j];
        if (pi.y > test.y) != (pj.y > test.y)
            && test.x < (pj.x - pi.x) * (test.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Index of the point of `candidates` closest to `reference`.
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
pub fn nearest_point_index(candidates: &[Point], reference: &Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = candidate.distance(reference);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// The point of `candidates` closest to `reference` (first one on ties).
pub fn nearest_point<'a>(candidates: &'a [Point], reference: &Point) -> Option<&'a Point> {
    nearest_point_index(candidates, reference).map(|index| &candidates[index])
}

/// Center of the axis-aligned box around `points`.
///
/// This is the "center" used for room-like shapes; it is not the area centroid.
pub fn bounding_box_center(points: &[Point]) -> Option<Point> {
    bounding_box(points).map(|bbox| bbox.center().into())
}

/// Axis-aligned box around `points`.
pub fn bounding_box(points: &[Point]) -> Option<BoundingBox2D> {
    let locations: Vec<Vector2> = points.iter().map(Point::location).collect();
    BoundingBox2D::from_points(&locations)
}

/// Unsigned area of the implicitly closed ring (shoelace formula).
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.location().cross(&b.location()))
        .sum();
    twice.abs() / 2.0
}

/// Box enclosing every vertex of every polygon, `None` when there are no vertices.
pub fn drawing_extents(polygons: &[Polygon]) -> Option<BoundingBox2D> {
    polygons
        .iter()
        .filter_map(|polygon| bounding_box(&polygon.points))
        .reduce(|acc, bbox| acc.merge(&bbox))
}

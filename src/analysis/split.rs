//! Subdivision of labeled quadrilaterals
//!
//! A four-sided room holding two labels is cut in two halves, one holding four
//! labels is cut in quarters around its bounding-box center. Every other
//! combination is left alone, with the reason reported by [`SplitOutcome`].

use super::Mapping;
use crate::entities::{Polygon, PolygonId, Text};
use crate::geometry::{bounding_box_center, nearest_point_index};
use crate::types::Point;
use std::fmt;
use tracing::{debug, warn};

/// A four-point ring produced by a split
pub type Quad = [Point; 4];

/// Why a polygon was not split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// The polygon does not have exactly four vertices
    NotQuadrilateral,
    /// Only two or four labels lead to a split
    UnsupportedLabelCount(usize),
    /// Both labels are nearest to the same vertex
    SharedNearestVertex,
}

impl fmt::Display for UnchangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotQuadrilateral => write!(f, "not a quadrilateral"),
            Self::UnsupportedLabelCount(count) => write!(f, "{count} label(s)"),
            Self::SharedNearestVertex => write!(f, "labels share their nearest vertex"),
        }
    }
}

/// Result of splitting one polygon
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// The parts, in label order for two labels and vertex order for four
    Split(Vec<Quad>),
    /// The polygon stays as it is
    Unchanged(UnchangedReason),
}

impl SplitOutcome {
    /// Check whether the polygon was split
    pub fn is_split(&self) -> bool {
        matches!(self, SplitOutcome::Split(_))
    }
}

/// Split one polygon according to the texts it contains
pub fn split_polygon(polygon: &Polygon, texts: &[&Text]) -> SplitOutcome {
    if !polygon.is_quadrilateral() {
        return SplitOutcome::Unchanged(UnchangedReason::NotQuadrilateral);
    }

    let vertices: Vec<Point> = polygon.points.iter().map(Point::without_bulge).collect();
    let Ok(vertices) = <[Point; 4]>::try_from(vertices) else {
        return SplitOutcome::Unchanged(UnchangedReason::NotQuadrilateral);
    };

    match texts {
        [first, second] => split_in_halves(&vertices, &first.anchor, &second.anchor),
        [_, _, _, _] => SplitOutcome::Split(split_in_quarters(&vertices)),
        _ => SplitOutcome::Unchanged(UnchangedReason::UnsupportedLabelCount(texts.len())),
    }
}

fn split_in_halves(v: &Quad, first: &Point, second: &Point) -> SplitOutcome {
    let (Some(a), Some(b)) = (nearest_point_index(v, first), nearest_point_index(v, second)) else {
        return SplitOutcome::Unchanged(UnchangedReason::NotQuadrilateral);
    };
    if a == b {
        return SplitOutcome::Unchanged(UnchangedReason::SharedNearestVertex);
    }

    let next = |i: usize| (i + 1) % 4;
    let prev = |i: usize| (i + 3) % 4;

    if next(next(a)) == b {
        // Opposite corners: cut between the edges leaving each near vertex
        let mid_near = v[a].midpoint(&v[next(a)]);
        let mid_far = v[b].midpoint(&v[next(b)]);
        return SplitOutcome::Split(vec![
            [mid_near, v[a], v[prev(a)], mid_far],
            [mid_near, v[prev(b)], v[b], mid_far],
        ]);
    }

    // Adjacent corners: cut across the shared edge and the opposite one
    let far: Vec<Point> = (0..4).filter(|&i| i != a && i != b).map(|i| v[i]).collect();
    let mid_near = v[a].midpoint(&v[b]);
    let mid_far = far[0].midpoint(&far[1]);

    let mut far_a = nearest_point_index(&far, &v[a]).unwrap_or(0);
    let mut far_b = nearest_point_index(&far, &v[b]).unwrap_or(1);
    if far_a == far_b {
        // both near vertices picked the same far vertex; pair by adjacency
        let neighbour_of_a = if next(a) == b { prev(a) } else { next(a) };
        far_a = if far[0] == v[neighbour_of_a] { 0 } else { 1 };
        far_b = 1 - far_a;
    }

    SplitOutcome::Split(vec![
        [mid_near, v[a], far[far_a], mid_far],
        [mid_near, v[b], far[far_b], mid_far],
    ])
}

fn split_in_quarters(v: &Quad) -> Vec<Quad> {
    let center = bounding_box_center(v).unwrap_or_default();
    let mid: Vec<Point> = (0..4).map(|k| v[k].midpoint(&v[(k + 1) % 4])).collect();

    (0..4)
        .map(|k| [mid[(k + 3) % 4], v[k], mid[k], center])
        .collect()
}

/// Apply the split to every mapped polygon.
///
/// Split polygons are removed from the returned collection and their parts
/// appended in mapping order, inheriting the layer and numbered above every
/// existing id. Other polygons keep their position.
pub fn split_polygons(mapping: &Mapping<'_>, polygons: &[Polygon]) -> Vec<Polygon> {
    let mut result = polygons.to_vec();
    let mut next_id = polygons.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);

    for entry in mapping.entries() {
        let quads = match split_polygon(entry.polygon, &entry.texts) {
            SplitOutcome::Split(quads) => quads,
            SplitOutcome::Unchanged(reason) => {
                if !entry.is_unlabeled() {
                    debug!(polygon = %entry.polygon.id, %reason, "polygon left unchanged");
                }
                continue;
            }
        };

        let Some(position) = result.iter().position(|p| p.id == entry.polygon.id) else {
            warn!(polygon = %entry.polygon.id, "mapped polygon missing from collection");
            continue;
        };
        let original = result.remove(position);

        debug!(polygon = %original.id, parts = quads.len(), first_id = next_id, "polygon split");
        for quad in quads {
            result.push(Polygon::new(PolygonId(next_id), original.layer.clone(), quad.to_vec()));
            next_id += 1;
        }
    }

    result
}

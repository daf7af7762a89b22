//! Spatial analysis over extracted entities
//!
//! [`build_mapping`] associates each text label with the polygons containing
//! it; [`split_polygons`] uses that mapping to subdivide rooms holding two or
//! four labels.

pub mod mapping;
pub mod split;

pub use mapping::{build_mapping, Mapping, MappingEntry};
pub use split::{split_polygon, split_polygons, Quad, SplitOutcome, UnchangedReason};

//! Drawing entity types and traits

use crate::types::BoundingBox2D;
use indexmap::IndexMap;

pub mod circle;
pub mod polygon;
pub mod text;

pub use circle::Circle;
pub use polygon::{Polygon, PolygonId};
pub use text::{strip_formatting, Text};

bitflags::bitflags! {
    /// Entity kinds understood by the extractors, used as a layer filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntityKinds: u8 {
        /// LWPOLYLINE
        const POLYGON = 1;
        /// CIRCLE
        const CIRCLE = 2;
        /// TEXT and MTEXT
        const TEXT = 4;
    }
}

impl EntityKinds {
    /// Kind announced by an entity-start token line
    pub fn from_token(token: &str) -> Option<EntityKinds> {
        match token {
            "LWPOLYLINE" => Some(EntityKinds::POLYGON),
            "CIRCLE" => Some(EntityKinds::CIRCLE),
            "TEXT" | "MTEXT" => Some(EntityKinds::TEXT),
            _ => None,
        }
    }

    /// Entity-start tokens covered by this set
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.contains(EntityKinds::POLYGON) {
            tokens.push("LWPOLYLINE");
        }
        if self.contains(EntityKinds::CIRCLE) {
            tokens.push("CIRCLE");
        }
        if self.contains(EntityKinds::TEXT) {
            tokens.extend(["TEXT", "MTEXT"]);
        }
        tokens
    }
}

/// Common behaviour of extracted entities
pub trait Entity {
    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Kind of the entity
    fn kind(&self) -> EntityKinds;

    /// DXF type name
    fn entity_type(&self) -> &'static str;

    /// Planar extent of the entity
    fn bounding_box(&self) -> Option<BoundingBox2D>;
}

/// Group entities under their layer name, keeping first-seen layer order
/// and the entity order within each layer.
pub fn group_by_layer<T: Entity>(entities: &[T]) -> IndexMap<&str, Vec<&T>> {
    let mut groups: IndexMap<&str, Vec<&T>> = IndexMap::new();
    for entity in entities {
        groups.entry(entity.layer()).or_default().push(entity);
    }
    groups
}

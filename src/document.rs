//! Drawing structure

use crate::analysis::{build_mapping, split_polygons, Mapping};
use crate::entities::{group_by_layer, Circle, EntityKinds, Polygon, PolygonId, Text};
use crate::io::dxf::{read_entity_layers, EntityReader, SectionTable, TableReader};
use crate::notification::NotificationCollection;
use crate::tables::{Layer, Table, ViewportParameters};
use crate::types::BoundingBox2D;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Everything extracted from one DXF drawing
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Raw section lines
    pub sections: SectionTable,

    /// Polygons, numbered in completion order
    pub polygons: Vec<Polygon>,

    /// Circles
    pub circles: Vec<Circle>,

    /// Text labels
    pub texts: Vec<Text>,

    /// Layer table
    pub layers: Table<Layer>,

    /// Parameters of the first viewport record
    pub parameters: ViewportParameters,

    /// Notifications collected during extraction
    pub notifications: NotificationCollection,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every entity collection, the layer table and the viewport
    /// parameters from split sections
    pub fn from_sections(sections: SectionTable) -> Self {
        Self::from_sections_with(sections, None)
    }

    /// Like [`Drawing::from_sections`], appending each circle to the polygons
    /// as a regular polygon of `circle_sides` sides when set
    pub fn from_sections_with(sections: SectionTable, circle_sides: Option<usize>) -> Self {
        let mut entities = EntityReader::new(sections.entities());
        let mut polygons = entities.read_polygons();
        let circles = entities.read_circles();
        let texts = entities.read_texts();

        let mut tables = TableReader::new(sections.tables());
        let layers = tables.read_layer_table();
        let parameters = tables.read_parameters();

        let mut notifications = entities.into_notifications();
        notifications.extend(tables.into_notifications());

        if let Some(sides) = circle_sides {
            let mut next_id = polygons.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);
            for circle in &circles {
                polygons.push(circle.to_polygon(PolygonId(next_id), sides));
                next_id += 1;
            }
        }

        debug!(
            polygons = polygons.len(),
            circles = circles.len(),
            texts = texts.len(),
            layers = layers.len(),
            notifications = notifications.len(),
            "drawing extracted"
        );

        Self {
            sections,
            polygons,
            circles,
            texts,
            layers,
            parameters,
            notifications,
        }
    }

    /// Map the texts to the polygons containing them
    pub fn mapping(&self) -> Mapping<'_> {
        build_mapping(&self.texts, &self.polygons)
    }

    /// Polygons after splitting rooms labeled twice or four times
    pub fn split_polygons(&self) -> Vec<Polygon> {
        split_polygons(&self.mapping(), &self.polygons)
    }

    /// Box around every polygon vertex
    pub fn extents(&self) -> Option<BoundingBox2D> {
        crate::geometry::drawing_extents(&self.polygons)
    }

    /// Layers used by entities of the given kinds, in first-seen order
    pub fn entity_layers(&self, kinds: EntityKinds) -> IndexSet<String> {
        read_entity_layers(self.sections.entities(), kinds)
    }

    /// Polygons grouped by layer
    pub fn polygons_by_layer(&self) -> IndexMap<&str, Vec<&Polygon>> {
        group_by_layer(&self.polygons)
    }

    /// Texts grouped by layer
    pub fn texts_by_layer(&self) -> IndexMap<&str, Vec<&Text>> {
        group_by_layer(&self.texts)
    }
}

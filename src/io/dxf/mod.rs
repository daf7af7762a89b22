//! DXF (Drawing Exchange Format) reading
//!
//! The pipeline is line based: the stream is split into sections
//! ([`split_sections`]), then each extractor makes its own forward pass over
//! the section lines it needs.
//!
//! ```rust,ignore
//! use dxf_rooms::io::dxf::{self, DxfReader};
//!
//! let sections = DxfReader::from_file("plan.dxf")?.read_sections()?;
//! let polygons = dxf::extract_polygons(&sections);
//! let texts = dxf::extract_texts(&sections);
//! ```

pub mod code_page;
mod cursor;
mod dxf_code;
mod reader;
mod section;

pub use cursor::LineCursor;
pub use dxf_code::DxfCode;
pub use reader::{
    read_entity_layers, CircleBuilder, DxfReader, DxfReaderConfiguration, DxfStreamReader,
    DxfTextReader, EntityBuilder, EntityReader, Lines, PolygonBuilder, TableReader, TextBuilder,
};
pub use section::{split_sections, SectionName, SectionSplitter, SectionTable};

use crate::entities::{Circle, EntityKinds, Polygon, Text};
use crate::tables::ViewportParameters;
use indexmap::IndexSet;

/// Every complete polygon of the ENTITIES section, numbered in completion order
pub fn extract_polygons(sections: &SectionTable) -> Vec<Polygon> {
    EntityReader::new(sections.entities()).read_polygons()
}

/// Every complete circle of the ENTITIES section
pub fn extract_circles(sections: &SectionTable) -> Vec<Circle> {
    EntityReader::new(sections.entities()).read_circles()
}

/// Every complete text label of the ENTITIES section
pub fn extract_texts(sections: &SectionTable) -> Vec<Text> {
    EntityReader::new(sections.entities()).read_texts()
}

/// Layer names, in first-seen order.
///
/// Without a filter these are the records of the TABLES layer table. With a
/// filter they are the layers used by entities of those kinds in ENTITIES.
pub fn extract_layers(sections: &SectionTable, kinds: Option<EntityKinds>) -> IndexSet<String> {
    match kinds {
        None => TableReader::new(sections.tables()).read_layer_names(),
        Some(kinds) => read_entity_layers(sections.entities(), kinds),
    }
}

/// Rotation, origin and view center of the first viewport record
pub fn extract_parameters(sections: &SectionTable) -> ViewportParameters {
    TableReader::new(sections.tables()).read_parameters()
}

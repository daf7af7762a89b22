//! # dxf-rooms
//!
//! Extract rooms and their labels from ASCII DXF floor plans.
//!
//! The library reads a DXF drawing as lines, splits it into sections, folds
//! the ENTITIES section into polygons, circles and text labels, and relates
//! labels to the rooms containing them. Rooms holding two or four labels can
//! be subdivided so that every part carries one label.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_rooms::io::dxf::DxfReader;
//!
//! let drawing = DxfReader::from_file("plan.dxf")?.read()?;
//!
//! let mapping = drawing.mapping();
//! for entry in mapping.entries() {
//!     println!("{} holds {} label(s)", entry.polygon.id, entry.text_count());
//! }
//!
//! let rooms = drawing.split_polygons();
//! # Ok::<(), dxf_rooms::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::dxf`] - line source, section splitter and entity extractors
//! - [`entities`] - `Polygon`, `Circle` and `Text`
//! - [`geometry`] - point-in-polygon, nearest point, bounding-box center
//! - [`analysis`] - label mapping and polygon splitting
//! - [`Drawing`] - everything extracted from one file

#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{BoundingBox2D, Point, Vector2};

// Re-export entity types
pub use entities::{Circle, Entity, EntityKinds, Polygon, PolygonId, Text};

// Re-export table types
pub use tables::{Layer, Table, TableEntry, ViewportParameters};

// Re-export analysis
pub use analysis::{build_mapping, split_polygons, Mapping, SplitOutcome};

// Re-export document
pub use document::Drawing;

// Re-export I/O types
pub use io::dxf::{DxfReader, DxfReaderConfiguration, SectionTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

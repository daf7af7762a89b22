//! Shared test utilities for dxf-rooms integration tests.
//!
//! Builds small ASCII DXF drawings in memory and reads them back, so the
//! test crates import a single helper module via `mod common;`.

#![allow(dead_code)]

use dxf_rooms::io::dxf::{DxfReader, DxfReaderConfiguration};
use dxf_rooms::{Drawing, SectionTable};
use std::io::Cursor;
use std::path::PathBuf;

// ===========================================================================
// Drawing builder
// ===========================================================================

/// Builder for an ASCII DXF document.
///
/// Group codes are written in the usual right-aligned three character field.
#[derive(Debug, Default)]
pub struct DxfBuilder {
    header: Vec<String>,
    layers: Vec<(String, i16, i16)>,
    viewport: Option<(f64, (f64, f64), (f64, f64))>,
    entities: Vec<String>,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header variable with its value code
    pub fn header_var(mut self, name: &str, code: i32, value: &str) -> Self {
        push_pair(&mut self.header, 9, name);
        push_pair(&mut self.header, code, value);
        self
    }

    /// Add a layer table record
    pub fn layer(mut self, name: &str, flags: i16, color: i16) -> Self {
        self.layers.push((name.to_string(), flags, color));
        self
    }

    /// Set the active viewport: rotation, snap base, view center
    pub fn viewport(mut self, rotation: f64, origin: (f64, f64), center: (f64, f64)) -> Self {
        self.viewport = Some((rotation, origin, center));
        self
    }

    /// Add an LWPOLYLINE
    pub fn polygon(mut self, layer: &str, points: &[(f64, f64)]) -> Self {
        let e = &mut self.entities;
        push_pair(e, 0, "LWPOLYLINE");
        push_pair(e, 5, "2F");
        push_pair(e, 100, "AcDbEntity");
        push_pair(e, 8, layer);
        push_pair(e, 100, "AcDbPolyline");
        push_pair(e, 90, &points.len().to_string());
        push_pair(e, 70, "1");
        for (x, y) in points {
            push_pair(e, 10, &x.to_string());
            push_pair(e, 20, &y.to_string());
        }
        self
    }

    /// Add an axis-aligned rectangle
    pub fn rectangle(self, layer: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.polygon(
            layer,
            &[(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
        )
    }

    /// Add a CIRCLE
    pub fn circle(mut self, layer: &str, center: (f64, f64), radius: f64) -> Self {
        let e = &mut self.entities;
        push_pair(e, 0, "CIRCLE");
        push_pair(e, 8, layer);
        push_pair(e, 10, &center.0.to_string());
        push_pair(e, 20, &center.1.to_string());
        push_pair(e, 30, "0.0");
        push_pair(e, 40, &radius.to_string());
        self
    }

    /// Add a single-line TEXT
    pub fn text(mut self, layer: &str, at: (f64, f64), content: &str) -> Self {
        let e = &mut self.entities;
        push_pair(e, 0, "TEXT");
        push_pair(e, 8, layer);
        push_pair(e, 10, &at.0.to_string());
        push_pair(e, 20, &at.1.to_string());
        push_pair(e, 30, "0.0");
        push_pair(e, 40, "2.5");
        push_pair(e, 1, content);
        self
    }

    /// Add an MTEXT whose content is split into `  3` chunks and a final `  1`
    pub fn mtext(mut self, layer: &str, at: (f64, f64), chunks: &[&str], last: &str) -> Self {
        let e = &mut self.entities;
        push_pair(e, 0, "MTEXT");
        push_pair(e, 8, layer);
        push_pair(e, 10, &at.0.to_string());
        push_pair(e, 20, &at.1.to_string());
        for chunk in chunks {
            push_pair(e, 3, chunk);
        }
        push_pair(e, 1, last);
        self
    }

    /// Append raw entity lines
    pub fn raw_entity_lines(mut self, lines: &[&str]) -> Self {
        self.entities.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    /// Render the whole document
    pub fn build(&self) -> String {
        let mut out = Vec::new();

        open_section(&mut out, "HEADER");
        out.extend(self.header.iter().cloned());
        close_section(&mut out);

        open_section(&mut out, "TABLES");
        push_pair(&mut out, 0, "TABLE");
        push_pair(&mut out, 2, "VPORT");
        if let Some((rotation, origin, center)) = self.viewport {
            push_pair(&mut out, 0, "VPORT");
            push_pair(&mut out, 100, "AcDbSymbolTableRecord");
            push_pair(&mut out, 100, "AcDbViewportTableRecord");
            push_pair(&mut out, 2, "*ACTIVE");
            push_pair(&mut out, 12, &center.0.to_string());
            push_pair(&mut out, 22, &center.1.to_string());
            push_pair(&mut out, 13, &origin.0.to_string());
            push_pair(&mut out, 23, &origin.1.to_string());
            push_pair(&mut out, 51, &rotation.to_string());
        }
        push_pair(&mut out, 0, "ENDTAB");
        push_pair(&mut out, 0, "TABLE");
        push_pair(&mut out, 2, "LAYER");
        for (name, flags, color) in &self.layers {
            push_pair(&mut out, 0, "LAYER");
            push_pair(&mut out, 100, "AcDbSymbolTableRecord");
            push_pair(&mut out, 100, "AcDbLayerTableRecord");
            push_pair(&mut out, 2, name);
            push_pair(&mut out, 70, &flags.to_string());
            push_pair(&mut out, 62, &color.to_string());
            push_pair(&mut out, 6, "Continuous");
        }
        push_pair(&mut out, 0, "ENDTAB");
        close_section(&mut out);

        open_section(&mut out, "ENTITIES");
        out.extend(self.entities.iter().cloned());
        close_section(&mut out);

        push_pair(&mut out, 0, "EOF");
        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

fn push_pair(out: &mut Vec<String>, code: i32, value: &str) {
    out.push(format!("{code:>3}"));
    out.push(value.to_string());
}

fn open_section(out: &mut Vec<String>, name: &str) {
    push_pair(out, 0, "SECTION");
    push_pair(out, 2, name);
}

fn close_section(out: &mut Vec<String>) {
    push_pair(out, 0, "ENDSEC");
}

// ===========================================================================
// Read helpers
// ===========================================================================

/// Read DXF text into a drawing
pub fn read_drawing(dxf: &str) -> Drawing {
    read_drawing_with(dxf, DxfReaderConfiguration::default())
}

/// Read DXF text into a drawing with a configuration
pub fn read_drawing_with(dxf: &str, config: DxfReaderConfiguration) -> Drawing {
    DxfReader::from_reader(Cursor::new(dxf.as_bytes().to_vec()))
        .unwrap_or_else(|e| panic!("Cannot open DXF: {e:?}"))
        .with_configuration(config)
        .read()
        .unwrap_or_else(|e| panic!("Failed to read DXF: {e:?}"))
}

/// Read DXF text into sections
pub fn read_sections(dxf: &str) -> SectionTable {
    DxfReader::from_reader(Cursor::new(dxf.as_bytes().to_vec()))
        .unwrap_or_else(|e| panic!("Cannot open DXF: {e:?}"))
        .read_sections()
        .unwrap_or_else(|e| panic!("Failed to split DXF: {e:?}"))
}

/// Path for a scratch file in the system temp directory
pub fn temp_dxf_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dxf_rooms_{}_{name}", std::process::id()))
}

/// Sum of polygon areas
pub fn total_area(polygons: &[dxf_rooms::Polygon]) -> f64 {
    polygons.iter().map(|p| p.area()).sum()
}

//! In-progress entities and their completion predicates

use crate::entities::{Circle, EntityKinds, Polygon, PolygonId, Text};
use crate::error::Result;
use crate::io::dxf::{DxfCode, LineCursor};
use crate::types::Point;

/// An entity being assembled from group codes.
///
/// [`EntityBuilder::apply`] reports whether the code changed the builder;
/// the extractor checks [`EntityBuilder::finish`] after every change.
pub trait EntityBuilder {
    /// The finished entity
    type Output;

    /// Kind of entity built
    const KIND: EntityKinds;

    /// Fresh builder for an entity starting at section line `start_line`
    fn start(start_line: usize) -> Self;

    /// Section line holding the start token
    fn start_line(&self) -> usize;

    /// Apply the group code under `cursor`
    fn apply(&mut self, code: DxfCode, cursor: &LineCursor<'_>) -> Result<bool>;

    /// The entity, once its completion predicate holds.
    /// `ordinal` is the number of entities finished before it.
    fn finish(&self, ordinal: usize) -> Option<Self::Output>;
}

/// LWPOLYLINE: complete once the vertex count is reached and a layer is set
#[derive(Debug)]
pub struct PolygonBuilder {
    start_line: usize,
    layer: Option<String>,
    expected_vertex_count: Option<usize>,
    points: Vec<Point>,
}

impl EntityBuilder for PolygonBuilder {
    type Output = Polygon;
    const KIND: EntityKinds = EntityKinds::POLYGON;

    fn start(start_line: usize) -> Self {
        Self {
            start_line,
            layer: None,
            expected_vertex_count: None,
            points: Vec::new(),
        }
    }

    fn start_line(&self) -> usize {
        self.start_line
    }

    fn apply(&mut self, code: DxfCode, cursor: &LineCursor<'_>) -> Result<bool> {
        match code {
            DxfCode::LayerName => self.layer = Some(cursor.value(1)?.to_string()),
            DxfCode::VertexCount => self.expected_vertex_count = Some(cursor.count(1)?),
            DxfCode::XCoordinate => self.points.push(cursor.vertex()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn finish(&self, ordinal: usize) -> Option<Polygon> {
        let layer = self.layer.as_ref()?;
        let expected = self.expected_vertex_count?;
        if self.points.len() != expected {
            return None;
        }
        Some(Polygon {
            id: PolygonId(ordinal),
            layer: layer.clone(),
            expected_vertex_count: expected,
            points: self.points.clone(),
        })
    }
}

/// CIRCLE: complete once layer, center and a non-zero radius are set
#[derive(Debug)]
pub struct CircleBuilder {
    start_line: usize,
    layer: Option<String>,
    center: Option<Point>,
    radius: Option<f64>,
}

impl EntityBuilder for CircleBuilder {
    type Output = Circle;
    const KIND: EntityKinds = EntityKinds::CIRCLE;

    fn start(start_line: usize) -> Self {
        Self {
            start_line,
            layer: None,
            center: None,
            radius: None,
        }
    }

    fn start_line(&self) -> usize {
        self.start_line
    }

    fn apply(&mut self, code: DxfCode, cursor: &LineCursor<'_>) -> Result<bool> {
        match code {
            DxfCode::LayerName => self.layer = Some(cursor.value(1)?.to_string()),
            DxfCode::XCoordinate => self.center = Some(cursor.vector()?.into()),
            DxfCode::Radius => self.radius = Some(cursor.real(1)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn finish(&self, _ordinal: usize) -> Option<Circle> {
        match (&self.layer, self.center, self.radius) {
            (Some(layer), Some(center), Some(radius)) if radius != 0.0 => {
                Some(Circle::new(layer.clone(), center, radius))
            }
            _ => None,
        }
    }
}

/// TEXT / MTEXT: complete once layer, anchor and non-empty content are set
#[derive(Debug)]
pub struct TextBuilder {
    start_line: usize,
    layer: Option<String>,
    anchor: Option<Point>,
    /// MTEXT `  3` chunks preceding the final `  1` value
    chunks: String,
    content: Option<String>,
}

impl EntityBuilder for TextBuilder {
    type Output = Text;
    const KIND: EntityKinds = EntityKinds::TEXT;

    fn start(start_line: usize) -> Self {
        Self {
            start_line,
            layer: None,
            anchor: None,
            chunks: String::new(),
            content: None,
        }
    }

    fn start_line(&self) -> usize {
        self.start_line
    }

    fn apply(&mut self, code: DxfCode, cursor: &LineCursor<'_>) -> Result<bool> {
        match code {
            DxfCode::LayerName => self.layer = Some(cursor.value(1)?.to_string()),
            DxfCode::XCoordinate => self.anchor = Some(cursor.vector()?.into()),
            DxfCode::TextChunk => self.chunks.push_str(cursor.value(1)?),
            DxfCode::Text => {
                let mut content = self.chunks.clone();
                content.push_str(cursor.value(1)?);
                self.content = Some(content);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn finish(&self, _ordinal: usize) -> Option<Text> {
        let layer = self.layer.as_ref()?;
        let anchor = self.anchor?;
        let content = self.content.as_deref()?;
        Text::from_raw(layer.clone(), content, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn feed<B: EntityBuilder>(builder: &mut B, lines: &[String]) -> Result<()> {
        for index in 0..lines.len() {
            if let Some(code) = DxfCode::from_token(&lines[index]) {
                builder.apply(code, &LineCursor::new(lines, index))?;
            }
        }
        Ok(())
    }

    #[test]
    fn test_polygon_completes_on_last_vertex() {
        let lines = lines(&[
            "  8", "ROOMS", " 90", "        2", " 10", "0.0", " 20", "0.0", " 10", "4.0", " 20",
            "0.0",
        ]);
        let mut builder = PolygonBuilder::start(0);
        feed(&mut builder, &lines).unwrap();
        let polygon = builder.finish(3).unwrap();
        assert_eq!(polygon.id, PolygonId(3));
        assert_eq!(polygon.layer, "ROOMS");
        assert_eq!(polygon.points, vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
    }

    #[test]
    fn test_polygon_without_layer_is_incomplete() {
        let lines = lines(&[" 90", "1", " 10", "0.0", " 20", "0.0"]);
        let mut builder = PolygonBuilder::start(0);
        feed(&mut builder, &lines).unwrap();
        assert!(builder.finish(0).is_none());
    }

    #[test]
    fn test_circle_needs_non_zero_radius() {
        let lines = lines(&["  8", "0", " 10", "1.0", " 20", "2.0", " 40", "0.0"]);
        let mut builder = CircleBuilder::start(0);
        feed(&mut builder, &lines).unwrap();
        assert!(builder.finish(0).is_none());

        let lines = self::lines(&[" 40", "2.5"]);
        feed(&mut builder, &lines).unwrap();
        let circle = builder.finish(0).unwrap();
        assert_eq!(circle.center, Point::new(1.0, 2.0));
        assert_eq!(circle.radius, 2.5);
    }

    #[test]
    fn test_text_joins_chunks() {
        let lines = lines(&[
            "  8", "LABELS", " 10", "1.0", " 20", "1.0", "  3", "Living ", "  1", "room",
        ]);
        let mut builder = TextBuilder::start(0);
        feed(&mut builder, &lines).unwrap();
        assert_eq!(builder.finish(0).unwrap().content, "Living room");
    }

    #[test]
    fn test_text_with_blank_content_is_incomplete() {
        let lines = lines(&["  8", "LABELS", " 10", "1.0", " 20", "1.0", "  1", "  "]);
        let mut builder = TextBuilder::start(0);
        feed(&mut builder, &lines).unwrap();
        assert!(builder.finish(0).is_none());
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let lines = lines(&[" 90", "four"]);
        let mut builder = PolygonBuilder::start(0);
        assert!(feed(&mut builder, &lines).is_err());
    }
}

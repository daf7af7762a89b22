//! ENTITIES section readers

use super::entity_builder::{CircleBuilder, EntityBuilder, PolygonBuilder, TextBuilder};
use crate::entities::{Circle, Polygon, Text};
use crate::error::DxfError;
use crate::io::dxf::{DxfCode, LineCursor};
use crate::notification::{NotificationCollection, NotificationType};
use tracing::{debug, trace};

/// States for the entity extraction state machine
#[derive(Debug)]
enum ExtractState<B> {
    Idle,
    Building(B),
}

/// Reader folding the lines of an ENTITIES section into typed entities.
///
/// Each entity kind is extracted by its own forward pass. Entities that are
/// dropped on the way are recorded in [`EntityReader::notifications`].
pub struct EntityReader<'a> {
    lines: &'a [String],
    notifications: NotificationCollection,
}

impl<'a> EntityReader<'a> {
    /// Create a reader over the lines of an ENTITIES section
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            notifications: NotificationCollection::new(),
        }
    }

    /// Read every complete LWPOLYLINE, numbered in completion order
    pub fn read_polygons(&mut self) -> Vec<Polygon> {
        self.extract::<PolygonBuilder>()
    }

    /// Read every complete CIRCLE
    pub fn read_circles(&mut self) -> Vec<Circle> {
        self.extract::<CircleBuilder>()
    }

    /// Read every complete TEXT and MTEXT
    pub fn read_texts(&mut self) -> Vec<Text> {
        self.extract::<TextBuilder>()
    }

    /// Diagnostics gathered so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Take the gathered diagnostics
    pub fn into_notifications(self) -> NotificationCollection {
        self.notifications
    }

    fn extract<B: EntityBuilder>(&mut self) -> Vec<B::Output> {
        let lines = self.lines;
        let tokens = B::KIND.tokens();
        let mut entities = Vec::new();
        let mut state = ExtractState::Idle;

        for (index, line) in lines.iter().enumerate() {
            if tokens.contains(&line.as_str()) {
                if let ExtractState::Building(builder) = state {
                    self.discard(&builder, line, "a new entity started");
                }
                state = ExtractState::Building(B::start(index));
                continue;
            }

            let ExtractState::Building(builder) = &mut state else {
                continue;
            };
            let Some(code) = DxfCode::from_token(line) else {
                continue;
            };

            match builder.apply(code, &LineCursor::new(lines, index)) {
                Ok(false) => {}
                Ok(true) => {
                    if let Some(entity) = builder.finish(entities.len()) {
                        trace!(line = builder.start_line() + 1, "entity completed");
                        entities.push(entity);
                        state = ExtractState::Idle;
                    }
                }
                Err(err) => {
                    self.reject(builder, &err);
                    state = ExtractState::Idle;
                }
            }
        }

        if let ExtractState::Building(builder) = state {
            self.discard(&builder, "ENDSEC", "the section ended");
        }

        debug!(kind = ?B::KIND, count = entities.len(), "entities extracted");
        entities
    }

    /// Record an entity that never completed
    fn discard<B: EntityBuilder>(&mut self, builder: &B, at: &str, reason: &str) {
        let line = builder.start_line() + 1;
        let token = self.lines.get(builder.start_line()).map_or("entity", String::as_str);
        debug!(line, token, at, "incomplete entity discarded");
        self.notifications.notify(
            NotificationType::Warning,
            format!("{token} at line {line} discarded: incomplete when {reason}"),
        );
    }

    /// Record an entity dropped because one of its values could not be read
    fn reject<B: EntityBuilder>(&mut self, builder: &B, err: &DxfError) {
        let line = builder.start_line() + 1;
        let token = self.lines.get(builder.start_line()).map_or("entity", String::as_str);
        debug!(line, token, error = %err, "malformed entity discarded");
        self.notifications.notify(
            NotificationType::Error,
            format!("{token} at line {line} discarded: {err}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PolygonId;
    use crate::types::Point;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn square_lines(layer: &str, x: f64) -> Vec<String> {
        let mut out = lines(&["  0", "LWPOLYLINE", "  8", layer, " 90", "        4"]);
        for (px, py) in [(x, 0.0), (x + 1.0, 0.0), (x + 1.0, 1.0), (x, 1.0)] {
            out.extend(lines(&[" 10", &px.to_string(), " 20", &py.to_string()]));
        }
        out
    }

    #[test]
    fn test_polygons_are_numbered_in_order() {
        let mut section = square_lines("A", 0.0);
        section.extend(square_lines("B", 5.0));
        let mut reader = EntityReader::new(&section);
        let polygons = reader.read_polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].id, PolygonId(0));
        assert_eq!(polygons[1].id, PolygonId(1));
        assert_eq!(polygons[1].layer, "B");
        assert_eq!(polygons[1].points[0], Point::new(5.0, 0.0));
        assert!(reader.notifications().is_empty());
    }

    #[test]
    fn test_restart_discards_incomplete_polygon() {
        let mut section = lines(&["  0", "LWPOLYLINE", "  8", "A", " 90", "3", " 10", "0", " 20", "0"]);
        section.extend(square_lines("B", 0.0));
        let mut reader = EntityReader::new(&section);
        let polygons = reader.read_polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].layer, "B");
        assert_eq!(polygons[0].id, PolygonId(0));
        assert!(reader.notifications().has_type(NotificationType::Warning));
    }

    #[test]
    fn test_truncated_section_discards_entity() {
        // the Y value of the last vertex is missing
        let section = lines(&["LWPOLYLINE", "  8", "A", " 90", "1", " 10", "0.0", " 20"]);
        let mut reader = EntityReader::new(&section);
        assert!(reader.read_polygons().is_empty());
        assert!(reader.notifications().has_type(NotificationType::Error));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut section = lines(&[
            "  0", "CIRCLE", "  8", "COL", " 10", "1.0", " 20", "1.0", " 30", "0.0", " 40", "0.5",
            "  0", "TEXT", "  8", "LBL", " 10", "0.5", " 20", "0.5", " 40", "2.5", "  1", "Hall",
        ]);
        section.extend(square_lines("ROOMS", 0.0));

        let mut reader = EntityReader::new(&section);
        assert_eq!(reader.read_polygons().len(), 1);
        let circles = reader.read_circles();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].radius, 0.5);
        let texts = reader.read_texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "Hall");
        assert_eq!(texts[0].anchor, Point::new(0.5, 0.5));
        assert!(reader.into_notifications().is_empty());
    }

    #[test]
    fn test_codes_outside_entities_are_ignored() {
        let section = lines(&["  8", "A", " 10", "1", " 20", "2", "LINE", "  8", "B"]);
        let mut reader = EntityReader::new(&section);
        assert!(reader.read_polygons().is_empty());
        assert!(reader.read_texts().is_empty());
        assert!(reader.notifications().is_empty());
    }

    #[test]
    fn test_mtext_counts_as_text() {
        let section = lines(&[
            "MTEXT", "  8", "L", " 10", "2", " 20", "3", "  1", "{\\fArial|b0;Office}",
        ]);
        let texts = EntityReader::new(&section).read_texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "Office");
    }
}

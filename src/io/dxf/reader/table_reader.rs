//! TABLES section readers and the layer scan over ENTITIES

use crate::entities::EntityKinds;
use crate::error::Result;
use crate::io::dxf::{DxfCode, LineCursor};
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, LayerFlags, Table, ViewportParameters};
use indexmap::IndexSet;
use tracing::debug;

/// Subclass marker preceding a layer record's fields
const LAYER_RECORD: &str = "AcDbLayerTableRecord";

/// Subclass marker preceding a viewport record's fields
const VIEWPORT_RECORD: &str = "AcDbViewportTableRecord";

/// Entity-start lines are announced by this code
const START: &str = "  0";

/// Reader over the lines of a TABLES section
pub struct TableReader<'a> {
    lines: &'a [String],
    notifications: NotificationCollection,
}

impl<'a> TableReader<'a> {
    /// Create a reader over the lines of a TABLES section
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            notifications: NotificationCollection::new(),
        }
    }

    /// Read every layer record in file order.
    ///
    /// The name of each record is the value of the first `  2` code after its
    /// `AcDbLayerTableRecord` marker. Flags and color are taken from the rest
    /// of the record when present.
    pub fn read_layer_records(&mut self) -> Vec<Layer> {
        let lines = self.lines;
        let mut layers = Vec::new();

        for index in (0..lines.len()).filter(|&i| lines[i] == LAYER_RECORD) {
            match self.read_layer_entry(index) {
                Ok(Some(layer)) => layers.push(layer),
                Ok(None) => {}
                Err(err) => self.notifications.notify(
                    NotificationType::Error,
                    format!("Layer record at line {} skipped: {}", index + 1, err),
                ),
            }
        }

        debug!(count = layers.len(), "layer records read");
        layers
    }

    /// Read the layer table, keyed case-insensitively.
    /// Later records with an already known name are dropped.
    pub fn read_layer_table(&mut self) -> Table<Layer> {
        let mut table = Table::new();
        for layer in self.read_layer_records() {
            if let Err(message) = table.add(layer) {
                debug!(%message, "duplicate layer record");
            }
        }
        table
    }

    /// Distinct layer names in record order
    pub fn read_layer_names(&mut self) -> IndexSet<String> {
        self.read_layer_records()
            .into_iter()
            .map(|layer| layer.name)
            .collect()
    }

    fn read_layer_entry(&self, marker: usize) -> Result<Option<Layer>> {
        let name_line = (marker + 1..self.lines.len())
            .map(|i| (i, DxfCode::from_token(&self.lines[i])))
            .take_while(|&(_, code)| code != Some(DxfCode::Start))
            .find(|&(_, code)| code == Some(DxfCode::Name));
        let Some((name_line, _)) = name_line else {
            return Ok(None);
        };

        let mut layer = Layer::new(LineCursor::new(self.lines, name_line).value(1)?);

        for index in marker + 1..self.lines.len() {
            let cursor = LineCursor::new(self.lines, index);
            match cursor.code() {
                Some(DxfCode::Start) => break,
                Some(DxfCode::Flags) => {
                    let flags = LayerFlags::from_bits(cursor.short(1)?);
                    layer.flags.frozen = flags.frozen;
                    layer.flags.locked = flags.locked;
                    layer.flags.off |= flags.off;
                }
                Some(DxfCode::ColorIndex) => {
                    let color = cursor.short(1)?;
                    let Some(color_index) = color.checked_abs() else {
                        return Err(cursor.invalid(1, cursor.value(1)?, "a color index"));
                    };
                    // a negative color marks the layer as off
                    if color < 0 {
                        layer.flags.off = true;
                    }
                    layer.color_index = Some(color_index);
                }
                _ => {}
            }
        }

        Ok(Some(layer))
    }

    /// Read the parameters of the first viewport record.
    ///
    /// Only the lines between the `AcDbViewportTableRecord` marker and the
    /// next `  0` line are considered; missing values stay zero.
    pub fn read_parameters(&mut self) -> ViewportParameters {
        let lines = self.lines;
        let mut parameters = ViewportParameters::default();

        let Some(marker) = lines.iter().position(|l| l == VIEWPORT_RECORD) else {
            debug!("no viewport record");
            return parameters;
        };

        for index in marker + 1..lines.len() {
            let cursor = LineCursor::new(lines, index);
            let result = match cursor.code() {
                Some(DxfCode::Start) => break,
                Some(DxfCode::ViewCenterX) => cursor.vector().map(|v| parameters.view_center_point = v),
                Some(DxfCode::SnapBaseX) => cursor.vector().map(|v| parameters.origin_point = v),
                Some(DxfCode::ViewTwistAngle) => cursor.real(1).map(|a| parameters.rotation_angle = a),
                _ => Ok(()),
            };
            if let Err(err) = result {
                self.notifications.notify(
                    NotificationType::Error,
                    format!("Viewport value at line {} ignored: {}", index + 1, err),
                );
            }
        }

        parameters
    }

    /// Diagnostics gathered so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Take the gathered diagnostics
    pub fn into_notifications(self) -> NotificationCollection {
        self.notifications
    }
}

/// Layers referenced by entities of the given kinds, in first-seen order.
///
/// The kind of the current entity is the line following each `  0` line;
/// every `  8` value met while that kind is selected is collected.
pub fn read_entity_layers(lines: &[String], kinds: EntityKinds) -> IndexSet<String> {
    let mut layers = IndexSet::new();
    let mut selected = false;

    for (index, line) in lines.iter().enumerate() {
        if line == START {
            selected = lines
                .get(index + 1)
                .and_then(|token| EntityKinds::from_token(token))
                .is_some_and(|kind| kinds.intersects(kind));
            continue;
        }
        if selected && DxfCode::from_token(line) == Some(DxfCode::LayerName) {
            if let Some(layer) = lines.get(index + 1) {
                layers.insert(layer.clone());
            }
        }
    }

    layers
}

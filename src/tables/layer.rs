//! Layer table entry

use super::TableEntry;

/// Layer flags (group code 70, plus a negative color for "off")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerFlags {
    /// Layer is frozen
    pub frozen: bool,
    /// Layer is locked
    pub locked: bool,
    /// Layer is off (invisible)
    pub off: bool,
}

impl LayerFlags {
    /// Decode the group code 70 bit field
    pub fn from_bits(bits: i16) -> Self {
        LayerFlags {
            frozen: bits & 1 != 0,
            off: bits & 2 != 0,
            locked: bits & 4 != 0,
        }
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// ACI color index, when the record carries one
    pub color_index: Option<i16>,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::default(),
            color_index: None,
        }
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.flags.off && !self.flags.frozen
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }
}

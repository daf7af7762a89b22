//! DXF group codes
//!
//! Group codes define the meaning of the value line that follows them.
//! In ASCII DXF they are written right-aligned in a three character field
//! (`"  8"`, `" 10"`), and the extractors only recognise that exact form.

/// Group codes recognised by the extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Entity type / table record start
    Start = 0,

    /// Primary text value (TEXT and MTEXT content)
    Text = 1,

    /// Name (layer table records)
    Name = 2,

    /// Additional MTEXT content chunk
    TextChunk = 3,

    /// Layer name of an entity
    LayerName = 8,

    /// Primary X coordinate (Y follows two lines later with code 20)
    XCoordinate = 10,

    /// X of the viewport view center
    ViewCenterX = 12,

    /// X of the viewport snap base point
    SnapBaseX = 13,

    /// Primary Y coordinate
    YCoordinate = 20,

    /// Radius (CIRCLE)
    Radius = 40,

    /// Vertex bulge (LWPOLYLINE)
    Bulge = 42,

    /// View twist angle (VPORT)
    ViewTwistAngle = 51,

    /// ACI color number
    ColorIndex = 62,

    /// Integer flags
    Flags = 70,

    /// Number of vertices (LWPOLYLINE)
    VertexCount = 90,
}

impl DxfCode {
    const ALL: [DxfCode; 15] = [
        DxfCode::Start,
        DxfCode::Text,
        DxfCode::Name,
        DxfCode::TextChunk,
        DxfCode::LayerName,
        DxfCode::XCoordinate,
        DxfCode::ViewCenterX,
        DxfCode::SnapBaseX,
        DxfCode::YCoordinate,
        DxfCode::Radius,
        DxfCode::Bulge,
        DxfCode::ViewTwistAngle,
        DxfCode::ColorIndex,
        DxfCode::Flags,
        DxfCode::VertexCount,
    ];

    /// Recognise a fixed-width code line such as `" 10"`.
    ///
    /// Unpadded or otherwise formatted lines are not group codes here.
    pub fn from_token(line: &str) -> Option<Self> {
        match line {
            "  0" => Some(DxfCode::Start),
            "  1" => Some(DxfCode::Text),
            "  2" => Some(DxfCode::Name),
            "  3" => Some(DxfCode::TextChunk),
            "  8" => Some(DxfCode::LayerName),
            " 10" => Some(DxfCode::XCoordinate),
            " 12" => Some(DxfCode::ViewCenterX),
            " 13" => Some(DxfCode::SnapBaseX),
            " 20" => Some(DxfCode::YCoordinate),
            " 40" => Some(DxfCode::Radius),
            " 42" => Some(DxfCode::Bulge),
            " 51" => Some(DxfCode::ViewTwistAngle),
            " 62" => Some(DxfCode::ColorIndex),
            " 70" => Some(DxfCode::Flags),
            " 90" => Some(DxfCode::VertexCount),
            _ => None,
        }
    }

    /// Convert a numeric code
    pub fn from_i32(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_i32() == code)
    }

    /// Numeric value of the code
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// The code as written in a DXF file
    pub fn token(self) -> String {
        format!("{:>3}", self.to_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_tokens() {
        assert_eq!(DxfCode::from_token("  8"), Some(DxfCode::LayerName));
        assert_eq!(DxfCode::from_token(" 10"), Some(DxfCode::XCoordinate));
        assert_eq!(DxfCode::from_token(" 90"), Some(DxfCode::VertexCount));
    }

    #[test]
    fn test_unpadded_tokens_are_rejected() {
        assert_eq!(DxfCode::from_token("10"), None);
        assert_eq!(DxfCode::from_token("8"), None);
        assert_eq!(DxfCode::from_token(" 10 "), None);
    }

    #[test]
    fn test_token_round_trip() {
        for code in DxfCode::ALL {
            assert_eq!(DxfCode::from_token(&code.token()), Some(code));
            assert_eq!(DxfCode::from_i32(code.to_i32()), Some(code));
        }
        assert_eq!(DxfCode::from_i32(999), None);
    }
}

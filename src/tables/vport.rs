//! Active viewport parameters

use crate::types::Vector2;

/// View parameters of the first viewport table record.
///
/// Every field defaults to zero when the drawing does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportParameters {
    /// View twist angle in degrees (group code 51)
    pub rotation_angle: f64,
    /// Snap base point (group code 13)
    pub origin_point: Vector2,
    /// View center point (group code 12)
    pub view_center_point: Vector2,
}

impl ViewportParameters {
    /// View twist angle in radians
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_angle.to_radians()
    }
}

//! Basic geometric value types

mod bounds;
mod point;
mod vector;

pub use bounds::BoundingBox2D;
pub use point::Point;
pub use vector::Vector2;

//! Resolved stamp placement.

use super::Point;

/// Where, how big and at what angle a single stamp is drawn.
///
/// Computed fresh for every preview or commit; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampTransform {
    /// Stamp centre in logical pixels.
    pub position: Point,
    pub rotation: f32,
    /// Edge length of the square the image is fitted into, in logical pixels.
    pub render_size: f32,
}

impl StampTransform {
    pub fn new(position: Point, rotation: f32, render_size: f32) -> Self {
        Self {
            position,
            rotation,
            render_size,
        }
    }
}

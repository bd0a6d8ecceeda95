//! Points that take part in a proximity network.

use crate::color::Rgba;
use crate::surface::Surface;

/// A point of the triangle or wave network.
///
/// The position it was created at is remembered so oscillation can always be
/// computed relative to it instead of accumulating frame over frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkPoint {
    /// Current render position.
    pub x: f64,
    pub y: f64,
    original_x: f64,
    original_y: f64,
}

impl NetworkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            original_x: x,
            original_y: y,
        }
    }

    /// Position at creation time.
    pub fn original(&self) -> (f64, f64) {
        (self.original_x, self.original_y)
    }

    /// Move the render position. The original position is untouched.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Squared distance between the current positions of two points.
    pub fn distance_sq(&self, other: &NetworkPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Paint a filled circle at the current position.
    pub fn draw(&self, surface: &mut dyn Surface, radius: f64, color: Rgba) {
        surface.set_fill(color);
        surface.fill_circle(self.x, self.y, radius);
    }
}

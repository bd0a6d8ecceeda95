//! Decorative background stars.

use crate::color::Rgba;
use crate::surface::Surface;

/// A fixed background star. Never moves after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    x: f64,
    y: f64,
    radius: f64,
}

impl Star {
    pub const RADIUS: f64 = 0.8;
    pub const COLOR: Rgba = Rgba::rgba(255, 255, 255, 0.8);

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: Self::RADIUS,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Paint this star on its own.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(Self::COLOR);
        surface.fill_circle(self.x, self.y, self.radius);
    }

    /// Paint a whole starfield with one batched fill.
    pub fn draw_all(stars: &[Star], surface: &mut dyn Surface) {
        if stars.is_empty() {
            return;
        }
        surface.set_fill(Self::COLOR);
        surface.fill_dots(&mut stars.iter().map(|s| (s.x, s.y)), Self::RADIUS);
    }
}

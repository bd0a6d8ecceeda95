//! Colour type shared by the drawing layers.

use std::fmt;

/// A straight (non premultiplied) colour with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgba(0, 0, 0, 1.0);

    /// Build a colour from its channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with every channel scaled by alpha, i.e. composited over
    /// black. The result is opaque.
    pub fn over_black(self) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * a).round() as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_css() {
        let c = Rgba::rgba(255, 255, 255, 0.8);
        assert_eq!(c.to_string(), "rgba(255, 255, 255, 0.8)");
    }

    #[test]
    fn over_black_scales_channels() {
        assert_eq!(Rgba::rgba(255, 255, 255, 0.8).over_black(), (204, 204, 204));
        assert_eq!(Rgba::rgba(200, 100, 0, 0.0).over_black(), (0, 0, 0));
        assert_eq!(Rgba::rgba(10, 20, 30, 1.0).over_black(), (10, 20, 30));
        // Out of range alpha is clamped.
        assert_eq!(Rgba::rgba(10, 20, 30, 3.0).over_black(), (10, 20, 30));
    }
}

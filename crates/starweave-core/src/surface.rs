//! The drawable surface contract.

use crate::color::Rgba;

/// A 2D drawing target with a y-down coordinate system whose origin is the
/// top-left corner.
///
/// Fill and stroke colours are sticky state, like a canvas context: they stay
/// in effect until set again.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn set_fill(&mut self, color: Rgba);

    fn set_stroke(&mut self, color: Rgba);

    fn set_line_width(&mut self, width: f64);

    /// Filled circle in the current fill colour.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Straight segment in the current stroke colour and line width.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Many equally sized filled circles at once.
    ///
    /// Coordinates are streamed so callers need not buffer them. Surfaces
    /// that can amortize small fills should override this.
    fn fill_dots(&mut self, coords: &mut dyn Iterator<Item = (f64, f64)>, radius: f64) {
        for (x, y) in coords {
            self.fill_circle(x, y, radius);
        }
    }
}

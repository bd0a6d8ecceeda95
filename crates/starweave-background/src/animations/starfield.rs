//! Static starfield layer.

use rand::Rng;
use starweave_core::{Star, Surface};

/// Scatter `count` stars uniformly over `[0, width) x [0, height)`.
pub fn init_stars<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<Star> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let x = rng.random::<f64>() * width;
            let y = rng.random::<f64>() * height;
            Star::new(x, y)
        })
        .collect()
}

/// Draw every star.
pub fn draw(stars: &[Star], surface: &mut dyn Surface) {
    Star::draw_all(stars, surface);
}

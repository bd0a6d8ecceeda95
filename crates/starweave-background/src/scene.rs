//! The three scene layers and how they are laid out for a surface size.

use rand::Rng;
use starweave_config::Config;
use starweave_core::{NetworkPoint, Star, Vec2};

use crate::animations::{starfield, triangle, wave};

/// Everything drawn on the surface, laid out for one surface size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub stars: Vec<Star>,
    /// Triangle vertices first, then sampled interior points.
    pub triangle: Vec<NetworkPoint>,
    /// Wave points, all inside the surface at generation time.
    pub wave: Vec<NetworkPoint>,
    pub wave_origin: Vec2,
}

impl Scene {
    /// Lay out a fresh scene for a `width` x `height` surface.
    pub fn build<R: Rng>(width: f64, height: f64, config: &Config, rng: &mut R) -> Self {
        let stars = starfield::init_stars(config.stars.count, width, height, rng);

        let vertices = triangle::vertices(&config.triangle.vertices, width, height);
        let triangle = triangle::init_points(&vertices, config.triangle.density, rng);

        let wave_origin = wave::origin(config.wave.origin, width, height);
        let rings = wave::Rings {
            count: config.wave.rings,
            points_per_ring: config.wave.points_per_ring,
            radius_increment: config.wave.radius_increment,
        };
        let wave = wave::init_points(wave_origin, rings, width, height);

        tracing::debug!(
            width,
            height,
            stars = stars.len(),
            triangle = triangle.len(),
            wave = wave.len(),
            "scene built"
        );

        Self {
            width,
            height,
            stars,
            triangle,
            wave,
            wave_origin,
        }
    }

    /// The three triangle vertices.
    pub fn vertices(&self) -> &[NetworkPoint] {
        &self.triangle[..self.triangle.len().min(3)]
    }
}

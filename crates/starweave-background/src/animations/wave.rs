//! Radial wave layer (animated).

use std::f64::consts::TAU;

use starweave_core::{NetworkPoint, Rgba, Surface, Vec2};

/// Colour of wave points and their connections.
pub const COLOR: Rgba = Rgba::rgba(255, 255, 255, 0.7);

/// Concentric ring layout of the wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rings {
    pub count: usize,
    pub points_per_ring: usize,
    pub radius_increment: f64,
}

/// Oscillation parameters of the wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Place the wave origin from fractions of the surface size.
pub fn origin(fraction: [f64; 2], width: f64, height: f64) -> Vec2 {
    Vec2::new(width * fraction[0], height * fraction[1])
}

/// Generate the ring points around `origin`.
///
/// Ring `i` has radius `(i + 1) * radius_increment` and its points are evenly
/// spaced by angle. Points outside `[0, width] x [0, height]` are dropped.
pub fn init_points(origin: Vec2, rings: Rings, width: f64, height: f64) -> Vec<NetworkPoint> {
    let mut points = Vec::new();
    if rings.points_per_ring == 0 {
        return points;
    }

    for i in 0..rings.count {
        let radius = (i + 1) as f64 * rings.radius_increment;
        for j in 0..rings.points_per_ring {
            let angle = j as f64 / rings.points_per_ring as f64 * TAU;
            let x = origin.x + radius * angle.cos();
            let y = origin.y + radius * angle.sin();
            if (0.0..=width).contains(&x) && (0.0..=height).contains(&y) {
                points.push(NetworkPoint::new(x, y));
            }
        }
    }

    points
}

/// Offset of a point at distance `dist` from the origin for the given phase.
pub fn displacement(dist: f64, phase: f64, motion: Motion) -> (f64, f64) {
    let theta = dist * motion.frequency + phase;
    (theta.sin() * motion.amplitude, theta.cos() * motion.amplitude)
}

/// Move every point to its oscillated position for `phase`.
///
/// Distances are measured from the original positions, so motion never
/// accumulates across frames.
pub fn update(points: &mut [NetworkPoint], origin: Vec2, phase: f64, motion: Motion) {
    for point in points {
        let (ox, oy) = point.original();
        let dist = Vec2::new(ox, oy).distance(origin);
        let (dx, dy) = displacement(dist, phase, motion);
        point.set_position(ox + dx, oy + dy);
    }
}

/// Draw the wave points.
pub fn draw(points: &[NetworkPoint], surface: &mut dyn Surface, radius: f64) {
    for point in points {
        point.draw(surface, radius, COLOR);
    }
}

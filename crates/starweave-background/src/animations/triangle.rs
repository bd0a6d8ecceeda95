//! Triangle network layer (static).

use rand::Rng;
use starweave_core::geometry::{bounding_box, point_in_triangle, triangle_area};
use starweave_core::{NetworkPoint, Rgba, Surface, Vec2};

/// Colour of triangle points and their connections.
pub const COLOR: Rgba = Rgba::rgba(255, 255, 255, 0.9);

/// Place the triangle vertices from fractions of the surface size.
pub fn vertices(fractions: &[[f64; 2]; 3], width: f64, height: f64) -> [Vec2; 3] {
    fractions.map(|[fx, fy]| Vec2::new(width * fx, height * fy))
}

/// Highest density honoured: one candidate per square virtual pixel.
pub const MAX_DENSITY: f64 = 1.0;

/// Number of samples tried for a triangle: `floor(area * density)`.
///
/// `density` is clamped to `[0, MAX_DENSITY]`.
pub fn candidate_count(vertices: &[Vec2; 3], density: f64) -> usize {
    let [v1, v2, v3] = *vertices;
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, MAX_DENSITY) };
    (triangle_area(v1, v2, v3) * density).floor() as usize
}

/// Build the triangle network.
///
/// The three vertices always come first. Then exactly
/// [`candidate_count`] points are sampled in the vertices' bounding box and
/// only those falling inside the triangle are kept, so the interior ends up
/// thinner than the candidate count.
pub fn init_points<R: Rng>(vertices: &[Vec2; 3], density: f64, rng: &mut R) -> Vec<NetworkPoint> {
    let [v1, v2, v3] = *vertices;
    let mut points: Vec<NetworkPoint> = vertices.iter().map(|v| NetworkPoint::new(v.x, v.y)).collect();

    let Some((min, max)) = bounding_box(vertices) else {
        return points;
    };

    let candidates = candidate_count(vertices, density);
    for _ in 0..candidates {
        let x = min.x + rng.random::<f64>() * (max.x - min.x);
        let y = min.y + rng.random::<f64>() * (max.y - min.y);
        if point_in_triangle(Vec2::new(x, y), v1, v2, v3) {
            points.push(NetworkPoint::new(x, y));
        }
    }

    points
}

/// Draw the triangle points.
pub fn draw(points: &[NetworkPoint], surface: &mut dyn Surface, radius: f64) {
    for point in points {
        point.draw(surface, radius, COLOR);
    }
}

//! Proximity connections between network points.

use starweave_core::{NetworkPoint, Rgba, Surface};

/// Stroke width of connection lines.
pub const LINE_WIDTH: f64 = 0.5;

/// Index pairs `(i, j)`, `i < j`, of points strictly closer than `max_dist`.
///
/// This is an all pairs scan, fine for the few hundred points of a network
/// layer but not meant for the starfield.
pub fn connected_pairs(
    points: &[NetworkPoint],
    max_dist: f64,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..points.len()).flat_map(move |i| {
        ((i + 1)..points.len())
            .filter(move |&j| points[i].distance_sq(&points[j]).sqrt() < max_dist)
            .map(move |j| (i, j))
    })
}

/// Draw a line between every pair of points closer than `max_dist`.
pub fn draw_connections(
    surface: &mut dyn Surface,
    points: &[NetworkPoint],
    max_dist: f64,
    color: Rgba,
) {
    surface.set_stroke(color);
    surface.set_line_width(LINE_WIDTH);
    for (i, j) in connected_pairs(points, max_dist) {
        let (a, b) = (&points[i], &points[j]);
        surface.stroke_line(a.x, a.y, b.x, b.y);
    }
}

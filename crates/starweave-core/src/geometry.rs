//! Plane geometry helpers used while laying out the scene.

/// A plain 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Area of a triangle by the shoelace formula. Always non-negative.
pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
}

/// Which side of the line through `b` and `c` the point `a` lies on.
///
/// Positive and negative values mean opposite sides, zero means collinear.
pub fn edge_sign(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Whether `p` lies inside the triangle `v1 v2 v3` or on its boundary.
///
/// The point is outside only when the three edge signs disagree, i.e. at least
/// one is strictly negative and another strictly positive. Works for either
/// winding order.
pub fn point_in_triangle(p: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    let d1 = edge_sign(p, v1, v2);
    let d2 = edge_sign(p, v2, v3);
    let d3 = edge_sign(p, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Axis aligned bounds of a set of points as `(min, max)`.
///
/// Returns `None` for an empty slice.
pub fn bounding_box(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(points[1..].iter().fold((first, first), |(min, max), p| {
        (
            Vec2::new(min.x.min(p.x), min.y.min(p.y)),
            Vec2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

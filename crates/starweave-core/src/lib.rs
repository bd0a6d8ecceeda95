//! Core types for the starweave background.
//!
//! Holds the point model shared by every layer, the [`Surface`] contract the
//! layers draw through, and the plane geometry used while laying the scene
//! out.

mod color;
pub mod geometry;
mod point;
mod star;
mod surface;

pub use color::Rgba;
pub use geometry::Vec2;
pub use point::NetworkPoint;
pub use star::Star;
pub use surface::Surface;

//! Animated background rendering for starweave.
//!
//! Three layers are drawn every frame: a static starfield, a triangle shaped
//! point network and a radial wave of oscillating points. Network points
//! close to each other are joined by lines. [`BackgroundState`] owns the
//! scene and rebuilds it whenever the surface is resized; [`Animator`]
//! advances and draws it one frame at a time.

mod animations;
mod animator;
mod canvas;
mod color;
mod connect;
mod scene;
mod state;

pub use animations::{starfield, triangle, wave};
pub use animator::{Animator, AnimatorState, FrameHandle, FrameScheduler};
pub use canvas::{CanvasSurface, DrawOp};
pub use color::to_terminal;
pub use connect::{LINE_WIDTH, connected_pairs, draw_connections};
pub use scene::Scene;
pub use state::BackgroundState;

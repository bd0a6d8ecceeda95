//! Scene layers: generation and per-layer drawing.

pub mod starfield;
pub mod triangle;
pub mod wave;

//! Fractal clock engine crate.
//!
//! Owns the platform + GPU pieces the clock is drawn through: a single-window
//! `winit` runtime, a `wgpu` surface, and a renderer for recorded line strokes.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;

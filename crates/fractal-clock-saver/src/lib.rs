//! Fractal clock screensaver.
//!
//! Glue between `fractal-clock-core` (stroke generation) and
//! `fractal-clock-engine` (window, GPU, line rendering).

mod saver;
mod strokes;

pub use saver::Saver;

//! Frame timing.
//!
//! `FrameClock` measures the render loop itself (delta time, frame index). It
//! is unrelated to the wall-clock reading the fractal clock displays.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

//! Fractal clock core.
//!
//! Turns a wall-clock reading and a view size into the strokes of a fractal
//! clock: the hour hand is the root of a binary tree whose branches are copies
//! of the minute and second hands, rotated relative to the hour hand and
//! contracted by a slowly oscillating scale factor.
//!
//! Pipeline, leaves first:
//! - [`clock`]: seconds since local midnight, optionally accelerated
//! - [`rotator`]: hand angles and rotate-and-scale transforms
//! - [`scale`]: the oscillating generation-to-generation contraction
//! - [`frame`]: root hand geometry for a frame
//! - [`branch`]: lazy expansion of the tree into [`Stroke`] records
//!
//! Nothing here knows about windows or GPUs; the host consumes strokes.

pub mod branch;
pub mod clock;
pub mod colour;
pub mod config;
pub mod error;
pub mod frame;
pub mod geom;
pub mod rotator;
pub mod scale;

pub use branch::{draw_branch, opacity_for_depth, Branches, Segment, Stroke};
pub use clock::{FixedTime, LocalClock, TimeSource, ZoneOffset};
pub use colour::{Colour, ColourRule};
pub use config::ClockSettings;
pub use error::{ClockError, ConfigError};
pub use frame::{hand_rotations_at, FractalClock, Frame, HandRotations};
pub use geom::{Bounds, Vec2};
pub use rotator::{rotation_angle, Rotator};
pub use scale::ScaleSettings;

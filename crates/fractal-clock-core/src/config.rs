use crate::branch::{DEFAULT_DEPTH, DEFAULT_STROKE_WIDTH, MAX_DEPTH};
use crate::clock::PREVIEW_ACCELERATION;
use crate::colour::{Colour, ColourRule};
use crate::error::ConfigError;
use crate::scale::ScaleSettings;

/// Tunables for a fractal clock.
///
/// Every field has a working default; hosts override what they need and the
/// whole struct is checked once by [`validate`](Self::validate).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockSettings {
    pub scale: ScaleSettings,
    pub colour: ColourRule,
    /// Colour of the hour hand; descendants derive from it.
    pub root_colour: Colour,
    /// Recursion budget below the hour hand, at most [`MAX_DEPTH`].
    pub depth: u32,
    /// Clock speed-up in preview mode.
    pub acceleration: f64,
    /// Stroke width in logical pixels.
    pub stroke_width: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            scale: ScaleSettings::default(),
            colour: ColourRule::default(),
            root_colour: Colour::WHITE,
            depth: DEFAULT_DEPTH,
            acceleration: PREVIEW_ACCELERATION,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ClockSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale.validate()?;
        self.colour.validate()?;

        if !self.root_colour.is_normalized() {
            return Err(ConfigError::ColourRule(format!(
                "root colour {:?} has channels outside [0, 1]",
                self.root_colour.0
            )));
        }
        if !(self.acceleration.is_finite() && self.acceleration > 0.0) {
            return Err(ConfigError::Acceleration(self.acceleration));
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Depth { depth: self.depth, max: MAX_DEPTH });
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::StrokeWidth(self.stroke_width));
        }

        Ok(())
    }
}

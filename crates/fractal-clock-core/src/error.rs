use std::fmt;

/// The clock could not produce a usable reading.
///
/// Fatal for the frame: there is no valid "now" to draw, and substituting a
/// default time would show the wrong time without any sign of failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// A time source produced a value outside `[0, 86400)` or a non-finite value.
    InvalidReading(f64),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::InvalidReading(v) => {
                write!(f, "clock reading {v} is not a time of day in seconds")
            }
        }
    }
}

impl std::error::Error for ClockError {}

/// Rejected clock settings.
///
/// Settings are validated once, when a [`FractalClock`](crate::FractalClock) is
/// built; per-frame math assumes they hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A scale-cycle phase duration is zero, negative, or not finite.
    PhaseDuration { phase: usize, seconds: f64 },
    /// Scale bounds are not finite, not positive, or `min > max`.
    ScaleRange { min: f64, max: f64 },
    /// Colour constants would push channels outside `[0, 1]`.
    ColourRule(String),
    /// Preview acceleration is zero, negative, or not finite.
    Acceleration(f64),
    /// Stroke width is zero, negative, or not finite.
    StrokeWidth(f64),
    /// Recursion budget above [`MAX_DEPTH`](crate::branch::MAX_DEPTH).
    Depth { depth: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PhaseDuration { phase, seconds } => write!(
                f,
                "scale cycle phase {phase} must last a positive number of seconds, got {seconds}"
            ),
            ConfigError::ScaleRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max}]")
            }
            ConfigError::ColourRule(msg) => write!(f, "invalid colour rule: {msg}"),
            ConfigError::Acceleration(v) => {
                write!(f, "preview acceleration must be positive, got {v}")
            }
            ConfigError::StrokeWidth(v) => write!(f, "stroke width must be positive, got {v}"),
            ConfigError::Depth { depth, max } => {
                write!(f, "recursion depth {depth} exceeds the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

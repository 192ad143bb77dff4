use std::f64::consts::PI;

use crate::error::ConfigError;

/// Scale at the low point of the cycle.
///
/// `0.5^(1/3)`: three generations halve a branch's length.
pub const DEFAULT_SCALE_MIN: f64 = 0.793_700_525_984_099_7;

/// Scale at the high point of the cycle: children keep their parent's length.
pub const DEFAULT_SCALE_MAX: f64 = 1.0;

/// Seconds spent in each phase: hold min, ease up, hold max, ease down.
pub const DEFAULT_PATTERN: [f64; 4] = [60.0, 12.0, 60.0, 12.0];

/// Generation-to-generation scale, oscillating over a four-phase cycle.
///
/// Phases cover `[0, d0]`, `(d0, d0+d1]`, `(d0+d1, d0+d1+d2]` and the rest of
/// the period. A sample exactly on a boundary belongs to the earlier phase.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleSettings {
    pub min: f64,
    pub max: f64,
    pub pattern: [f64; 4],
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_SCALE_MIN,
            max: DEFAULT_SCALE_MAX,
            pattern: DEFAULT_PATTERN,
        }
    }
}

impl ScaleSettings {
    /// Checks that every phase has a positive duration and the range is sane.
    ///
    /// The easing phases divide by their duration, so a zero here is rejected
    /// up front instead of producing NaN scales at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (phase, &seconds) in self.pattern.iter().enumerate() {
            if !(seconds.is_finite() && seconds > 0.0) {
                return Err(ConfigError::PhaseDuration { phase, seconds });
            }
        }

        let ok = self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max;
        if !ok {
            return Err(ConfigError::ScaleRange { min: self.min, max: self.max });
        }

        Ok(())
    }

    /// Length of one full cycle in seconds.
    #[inline]
    pub fn period(&self) -> f64 {
        self.pattern.iter().sum()
    }

    /// Scale for the given time, always within `[min, max]`.
    pub fn variable_scale(&self, now: f64) -> f64 {
        let [d0, d1, d2, d3] = self.pattern;
        let t = now % self.period();

        let rise_start = d0;
        let high_start = rise_start + d1;
        let fall_start = high_start + d2;

        let s = if t <= rise_start {
            self.min
        } else if t <= high_start {
            let u = (t - rise_start) / d1;
            self.max + (self.min - self.max) * raised_cosine(u)
        } else if t <= fall_start {
            self.max
        } else {
            let u = (t - fall_start) / d3;
            self.min + (self.max - self.min) * raised_cosine(u)
        };

        s.clamp(self.min, self.max)
    }
}

/// 1 at `u = 0`, 0 at `u = 1`, flat at both ends.
#[inline]
fn raised_cosine(u: f64) -> f64 {
    ((PI * u).cos() + 1.0) * 0.5
}

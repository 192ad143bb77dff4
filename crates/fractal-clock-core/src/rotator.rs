use std::f64::consts::TAU;

use crate::geom::Vec2;

/// Angle of a hand that completes one turn every `period` seconds.
///
/// Result lies in `(-2π, 0]`: the negative sign makes the angle advance
/// clockwise in the +Y-up view space. `%` is a true floating remainder, and `now`
/// is never negative here.
#[inline]
pub fn rotation_angle(now: f64, period: f64) -> f64 {
    -TAU * (now % period) / period
}

/// Rotate-by-angle and uniform-scale in one step.
///
/// Stored as `(cos θ · s, sin θ · s)`, so applying it is a complex
/// multiplication. A negative scale additionally flips the vector (a half turn).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotator {
    pub a: f64,
    pub b: f64,
}

impl Rotator {
    #[inline]
    pub fn new(angle: f64, scale: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { a: cos * scale, b: sin * scale }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0 }
    }

    /// `(w·a − h·b, w·b + h·a)`.
    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.a - v.y * self.b, v.x * self.b + v.y * self.a)
    }

    /// Magnitude of the scale factor.
    #[inline]
    pub fn scale(self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl Default for Rotator {
    fn default() -> Self {
        Self::identity()
    }
}

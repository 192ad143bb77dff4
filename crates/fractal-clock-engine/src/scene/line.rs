use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, DrawList};

/// Straight stroke between two points, butt-capped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }

    /// True when the stroke would cover no pixels.
    ///
    /// Zero-length and zero-width lines are legal to record; renderers skip them.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.from.is_finite() && self.to.is_finite() && self.width.is_finite())
            || self.width <= 0.0
            || self.from.distance(self.to) <= f32::EPSILON
            || self.color.a <= 0.0
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(from: Vec2, to: Vec2, width: f32, alpha: f32) -> LineCmd {
        LineCmd::new(from, to, width, Color::from_straight(1.0, 1.0, 1.0, alpha))
    }

    #[test]
    fn regular_line_is_drawable() {
        let l = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, 1.0);
        assert!(!l.is_degenerate());
    }

    #[test]
    fn zero_length_is_degenerate() {
        let p = Vec2::new(5.0, 5.0);
        assert!(line(p, p, 2.0, 1.0).is_degenerate());
    }

    #[test]
    fn zero_width_or_alpha_is_degenerate() {
        let (a, b) = (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(line(a, b, 0.0, 1.0).is_degenerate());
        assert!(line(a, b, 2.0, 0.0).is_degenerate());
    }

    #[test]
    fn non_finite_is_degenerate() {
        let l = line(Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0), 2.0, 1.0);
        assert!(l.is_degenerate());
    }
}

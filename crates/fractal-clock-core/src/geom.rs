use core::ops::{Add, Mul, Sub};

/// 2D vector in logical pixels, +Y up (origin bottom-left).
///
/// With `+Y` up, a negative rotation angle turns clockwise on screen. Hosts with
/// a top-left origin flip `y` when recording strokes.
///
/// Geometry stays in `f64` until it reaches the renderer: seconds since midnight
/// need the extra precision for the second hand's sub-frame motion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// View size in logical pixels.
///
/// Zero or negative sizes are accepted: they produce degenerate strokes, not errors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric centre of the view.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn shortest_side(self) -> f64 {
        self.width.min(self.height)
    }
}

use crate::branch::{Branches, Segment, Stroke};
use crate::clock::{self, LocalClock, TimeSource};
use crate::config::ClockSettings;
use crate::error::{ClockError, ConfigError};
use crate::geom::{Bounds, Vec2};
use crate::rotator::{rotation_angle, Rotator};
use crate::scale::ScaleSettings;

pub const HOUR_PERIOD: f64 = 12.0 * 3600.0;
pub const MINUTE_PERIOD: f64 = 3600.0;
pub const SECOND_PERIOD: f64 = 60.0;

/// Root hand and the two per-frame rotators.
///
/// `minute` and `second` rotate relative to the hour hand and carry the
/// negated scale, so every generation flips orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandRotations {
    pub root: Segment,
    pub minute: Rotator,
    pub second: Rotator,
    /// Contraction used for this frame.
    pub scale: f64,
}

/// Root geometry for `now` seconds since midnight.
///
/// The root displacement is `(0, -len)` turned by the hour angle, with
/// `len = min(width, height) / 6`. Its far end lands on the view centre, so the
/// children fan out from the centre and the root stroke (drawn from its
/// midpoint) reads as the hour hand.
pub fn hand_rotations_at(now: f64, bounds: Bounds, scale: &ScaleSettings) -> HandRotations {
    let hour_angle = rotation_angle(now, HOUR_PERIOD);
    let minute_angle = rotation_angle(now, MINUTE_PERIOD);
    let second_angle = rotation_angle(now, SECOND_PERIOD);

    let s = scale.variable_scale(now);

    let hour = Rotator::new(hour_angle, 1.0);
    let minute = Rotator::new(minute_angle - hour_angle, -s);
    let second = Rotator::new(second_angle - hour_angle, -s);

    let length = bounds.shortest_side() / 6.0;
    let displacement = hour.apply(Vec2::new(0.0, -length));
    let origin = bounds.center() - displacement;

    HandRotations {
        root: Segment::new(origin, displacement),
        minute,
        second,
        scale: s,
    }
}

/// A fractal clock bound to a time source.
///
/// Holds no per-frame state: each call reads the clock once and derives the
/// whole frame from that reading and the bounds passed in.
#[derive(Debug, Clone)]
pub struct FractalClock<S = LocalClock> {
    settings: ClockSettings,
    source: S,
    preview: bool,
}

impl<S: TimeSource> FractalClock<S> {
    /// Validates `settings`; a clock is never built from settings that fail.
    pub fn new(settings: ClockSettings, source: S, preview: bool) -> Result<Self, ConfigError> {
        settings.validate()?;
        log::debug!(
            "fractal clock configured: depth={}, preview={}, pattern={:?}",
            settings.depth,
            preview,
            settings.scale.pattern
        );
        Ok(Self { settings, source, preview })
    }

    #[inline]
    pub fn settings(&self) -> &ClockSettings {
        &self.settings
    }

    #[inline]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Seconds since midnight as displayed (accelerated in preview).
    pub fn now(&self) -> Result<f64, ClockError> {
        clock::now(&self.source, self.preview, self.settings.acceleration)
    }

    pub fn hand_rotations(&self, bounds: Bounds) -> Result<HandRotations, ClockError> {
        Ok(hand_rotations_at(self.now()?, bounds, &self.settings.scale))
    }

    /// Everything needed to draw one frame.
    pub fn frame(&self, bounds: Bounds) -> Result<Frame, ClockError> {
        let now = self.now()?;
        let hands = hand_rotations_at(now, bounds, &self.settings.scale);
        log::trace!("frame at {now:.3}s: scale={:.4}", hands.scale);
        Ok(Frame { now, hands, settings: self.settings })
    }
}

/// One frame's time reading and root geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub now: f64,
    pub hands: HandRotations,
    settings: ClockSettings,
}

impl Frame {
    /// Fresh back-to-front stroke sequence for this frame.
    pub fn strokes(&self) -> Branches {
        Branches::new(
            self.hands.root,
            self.hands.second,
            self.hands.minute,
            self.settings.depth,
            self.settings.root_colour,
        )
        .with_colour_rule(self.settings.colour)
        .with_stroke_width(self.settings.stroke_width)
    }
}

impl IntoIterator for Frame {
    type Item = Stroke;
    type IntoIter = Branches;

    fn into_iter(self) -> Branches {
        self.strokes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedTime;
    use crate::scale::DEFAULT_SCALE_MIN;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    fn close_vec(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn clock_at(seconds: f64, preview: bool) -> FractalClock<FixedTime> {
        FractalClock::new(ClockSettings::default(), FixedTime(seconds), preview).unwrap()
    }

    // ── hand_rotations_at ─────────────────────────────────────────────────

    #[test]
    fn midnight_on_square_view() {
        let h = hand_rotations_at(0.0, Bounds::new(600.0, 600.0), &ScaleSettings::default());

        assert_eq!(h.scale, DEFAULT_SCALE_MIN);
        assert!(close_vec(h.root.displacement, Vec2::new(0.0, -100.0)));
        assert!(close_vec(h.root.origin, Vec2::new(300.0, 400.0)));
        assert!(close_vec(h.root.end(), Vec2::new(300.0, 300.0)));

        // All hands coincide: the relative rotators are pure flips.
        assert!(close_vec(
            Vec2::new(h.minute.a, h.minute.b),
            Vec2::new(-DEFAULT_SCALE_MIN, 0.0)
        ));
        assert_eq!(h.minute, h.second);
    }

    #[test]
    fn root_length_uses_shortest_side() {
        let h = hand_rotations_at(0.0, Bounds::new(1200.0, 300.0), &ScaleSettings::default());
        assert!((h.root.displacement.length() - 50.0).abs() < EPS);
        assert!(close_vec(h.root.end(), Vec2::new(600.0, 150.0)));
    }

    #[test]
    fn three_oclock_points_right() {
        let h = hand_rotations_at(3.0 * 3600.0, Bounds::new(600.0, 600.0), &ScaleSettings::default());
        // Displacement runs from the tip towards the centre.
        assert!(close_vec(h.root.displacement, Vec2::new(-100.0, 0.0)));
        assert!(close_vec(h.root.origin, Vec2::new(400.0, 300.0)));

        // Minute hand at 12 is a quarter turn back from the hour hand.
        let expected = Rotator::new(FRAC_PI_2, -h.scale);
        assert!((h.minute.a - expected.a).abs() < EPS);
        assert!((h.minute.b - expected.b).abs() < EPS);
    }

    #[test]
    fn degenerate_bounds_are_tolerated() {
        let h = hand_rotations_at(1234.5, Bounds::new(0.0, 0.0), &ScaleSettings::default());
        assert_eq!(h.root.displacement.length(), 0.0);

        let h = hand_rotations_at(1234.5, Bounds::new(-60.0, 100.0), &ScaleSettings::default());
        assert!((h.root.displacement.length() - 10.0).abs() < EPS);
    }

    // ── FractalClock ──────────────────────────────────────────────────────

    #[test]
    fn preview_accelerates_time() {
        assert_eq!(clock_at(7200.0, true).now().unwrap(), 43_200.0);
        assert_eq!(clock_at(7200.0, false).now().unwrap(), 7200.0);
    }

    #[test]
    fn preview_at_two_am_draws_noon() {
        let bounds = Bounds::new(600.0, 600.0);
        let preview = clock_at(7200.0, true).hand_rotations(bounds).unwrap();
        let noon = hand_rotations_at(43_200.0, bounds, &ScaleSettings::default());
        assert_eq!(preview, noon);
        // Noon is indistinguishable from midnight on the dial.
        assert!(close_vec(preview.root.displacement, Vec2::new(0.0, -100.0)));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut settings = ClockSettings::default();
        settings.scale.pattern = [60.0, 12.0, 0.0, 12.0];
        let err = FractalClock::new(settings, FixedTime(0.0), false).unwrap_err();
        assert_eq!(err, ConfigError::PhaseDuration { phase: 2, seconds: 0.0 });
    }

    #[test]
    fn runaway_depth_is_rejected_before_any_frame() {
        let settings = ClockSettings { depth: 200, ..Default::default() };
        let err = FractalClock::new(settings, FixedTime(0.0), false).unwrap_err();
        assert!(matches!(err, ConfigError::Depth { depth: 200, .. }));
    }

    #[test]
    fn clock_failure_fails_the_frame() {
        let clock = FractalClock::new(ClockSettings::default(), FixedTime(f64::NAN), false).unwrap();
        assert!(clock.frame(Bounds::new(100.0, 100.0)).is_err());
        assert!(clock.hand_rotations(Bounds::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn frame_strokes_follow_settings() {
        let settings = ClockSettings { depth: 4, stroke_width: 1.5, ..Default::default() };
        let clock = FractalClock::new(settings, FixedTime(100.0), false).unwrap();
        let frame = clock.frame(Bounds::new(400.0, 300.0)).unwrap();

        let strokes: Vec<Stroke> = frame.strokes().collect();
        assert_eq!(strokes.len(), 31);
        assert!(strokes.iter().all(|s| s.width == 1.5));

        // Restartable from the frame, identical each time.
        assert_eq!(frame.into_iter().collect::<Vec<_>>(), strokes);
    }

    #[test]
    fn midnight_frame_second_child_points_up() {
        let frame = clock_at(0.0, false).frame(Bounds::new(600.0, 600.0)).unwrap();
        let first = frame.strokes().next().unwrap();
        assert_eq!(first.depth, 10);

        let second_child = Branches::new(
            frame.hands.root,
            frame.hands.second,
            frame.hands.minute,
            1,
            ClockSettings::default().root_colour,
        )
        .next()
        .unwrap();
        assert!(close_vec(second_child.from, Vec2::new(300.0, 300.0)));
        assert!(close_vec(second_child.to, Vec2::new(300.0, 300.0 + 100.0 * DEFAULT_SCALE_MIN)));
    }
}

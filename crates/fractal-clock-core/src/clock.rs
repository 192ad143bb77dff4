use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeZone, Timelike, Utc};

use crate::error::ClockError;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Default speed-up applied to the clock in preview mode.
pub const PREVIEW_ACCELERATION: f64 = 6.0;

/// Source of "seconds since local midnight".
///
/// One reading is taken per frame; everything else in the frame derives from it.
pub trait TimeSource {
    fn seconds_since_midnight(&self) -> Result<f64, ClockError>;
}

/// UTC offset in force at a given instant.
pub trait ZoneOffset {
    fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset;
}

/// The system time zone, consulted on every call, so DST switches and zone
/// changes show up on the next frame.
impl ZoneOffset for Local {
    fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.naive_utc())
    }
}

impl ZoneOffset for FixedOffset {
    fn offset_at(&self, _utc: &DateTime<Utc>) -> FixedOffset {
        *self
    }
}

/// Wall clock in a time zone, the system one by default.
///
/// Each reading takes the current UTC instant and asks the zone for the offset
/// at that instant; nothing is cached between frames.
#[derive(Debug, Copy, Clone)]
pub struct LocalClock<Z = Local> {
    zone: Z,
}

impl LocalClock {
    pub fn new() -> Self {
        Self { zone: Local }
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl<Z: ZoneOffset> LocalClock<Z> {
    pub fn with_zone(zone: Z) -> Self {
        Self { zone }
    }

    /// Seconds since local midnight at the UTC instant `utc`.
    pub fn seconds_at(&self, utc: DateTime<Utc>) -> f64 {
        let offset = self.zone.offset_at(&utc);
        seconds_of_day(utc.with_timezone(&offset).time())
    }
}

impl<Z: ZoneOffset> TimeSource for LocalClock<Z> {
    fn seconds_since_midnight(&self) -> Result<f64, ClockError> {
        Ok(self.seconds_at(Utc::now()))
    }
}

/// A fixed reading, for golden frames and stills.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedTime(pub f64);

impl TimeSource for FixedTime {
    fn seconds_since_midnight(&self) -> Result<f64, ClockError> {
        let s = self.0;
        if s.is_finite() && (0.0..SECONDS_PER_DAY).contains(&s) {
            Ok(s)
        } else {
            Err(ClockError::InvalidReading(s))
        }
    }
}

/// `((h * 60 + m) * 60 + s) + fraction`.
///
/// A leap second (nanoseconds past one billion) is held at the end of its
/// second so the result stays below one day.
pub fn seconds_of_day(t: NaiveTime) -> f64 {
    let whole = t.num_seconds_from_midnight();
    let nanos = t.nanosecond().min(999_999_999);
    f64::from(whole) + f64::from(nanos) / 1_000_000_000.0
}

/// Speeds a reading up by `factor`, wrapped back into one day.
#[inline]
pub fn accelerate(seconds: f64, factor: f64) -> f64 {
    (seconds * factor).rem_euclid(SECONDS_PER_DAY)
}

/// Reads `source`, applying `acceleration` when `accelerated` is set.
pub fn now<S>(source: &S, accelerated: bool, acceleration: f64) -> Result<f64, ClockError>
where
    S: TimeSource + ?Sized,
{
    let seconds = source.seconds_since_midnight()?;
    Ok(if accelerated { accelerate(seconds, acceleration) } else { seconds })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms_nano(h: u32, m: u32, s: u32, nano: u32) -> NaiveTime {
        NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap()
    }

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    // ── seconds_of_day ────────────────────────────────────────────────────

    #[test]
    fn midnight_is_zero() {
        assert_eq!(seconds_of_day(hms_nano(0, 0, 0, 0)), 0.0);
    }

    #[test]
    fn combines_fields_and_fraction() {
        let t = hms_nano(13, 45, 30, 250_000_000);
        assert_eq!(seconds_of_day(t), 13.0 * 3600.0 + 45.0 * 60.0 + 30.25);
    }

    #[test]
    fn last_instant_of_day_stays_below_a_day() {
        assert!(seconds_of_day(hms_nano(23, 59, 59, 999_999_999)) < SECONDS_PER_DAY);
        // Leap second.
        assert!(seconds_of_day(hms_nano(23, 59, 59, 1_500_000_000)) < SECONDS_PER_DAY);
    }

    // ── acceleration ──────────────────────────────────────────────────────

    #[test]
    fn preview_at_two_am_shows_noon() {
        let s = now(&FixedTime(7200.0), true, PREVIEW_ACCELERATION).unwrap();
        assert_eq!(s, 43_200.0);
    }

    #[test]
    fn acceleration_wraps_into_one_day() {
        // 18:00 * 6 = 4.5 days -> half a day.
        let s = accelerate(18.0 * 3600.0, 6.0);
        assert_eq!(s, 43_200.0);
        assert!((0.0..SECONDS_PER_DAY).contains(&accelerate(86_399.9, 6.0)));
    }

    #[test]
    fn non_preview_passes_through() {
        assert_eq!(now(&FixedTime(7200.0), false, 6.0).unwrap(), 7200.0);
    }

    // ── sources ───────────────────────────────────────────────────────────

    #[test]
    fn fixed_time_rejects_out_of_day_readings() {
        assert_eq!(
            FixedTime(86_400.0).seconds_since_midnight(),
            Err(ClockError::InvalidReading(86_400.0))
        );
        assert!(FixedTime(-1.0).seconds_since_midnight().is_err());
        assert!(FixedTime(f64::NAN).seconds_since_midnight().is_err());
    }

    #[test]
    fn errors_propagate_through_now() {
        assert!(now(&FixedTime(f64::INFINITY), true, 6.0).is_err());
    }

    #[test]
    fn clocks_read_within_one_day() {
        for s in [
            LocalClock::new().seconds_since_midnight().unwrap(),
            LocalClock::with_zone(hours(2)).seconds_since_midnight().unwrap(),
        ] {
            assert!((0.0..SECONDS_PER_DAY).contains(&s));
        }
    }

    #[test]
    fn offset_shifts_and_wraps_the_reading() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
        assert_eq!(LocalClock::with_zone(hours(0)).seconds_at(utc), 84_600.0);
        assert_eq!(LocalClock::with_zone(hours(2)).seconds_at(utc), 5_400.0);
        assert_eq!(LocalClock::with_zone(hours(-5)).seconds_at(utc), 66_600.0);
    }

    /// Zone whose offset jumps from `before` to `after` at `at`.
    struct Switching {
        at: DateTime<Utc>,
        before: FixedOffset,
        after: FixedOffset,
    }

    impl ZoneOffset for Switching {
        fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset {
            if *utc < self.at { self.before } else { self.after }
        }
    }

    #[test]
    fn dst_switch_is_followed_without_a_restart() {
        // Central European spring-forward: 02:00 CET becomes 03:00 CEST.
        let at = Utc.with_ymd_and_hms(2026, 3, 29, 1, 0, 0).unwrap();
        let clock = LocalClock::with_zone(Switching { at, before: hours(1), after: hours(2) });

        let just_before = at - chrono::TimeDelta::seconds(1);
        assert_eq!(clock.seconds_at(just_before), 7_199.0);
        assert_eq!(clock.seconds_at(at), 10_800.0);

        // And back in autumn, on the same clock value.
        let fall = Switching { at, before: hours(2), after: hours(1) };
        let clock = LocalClock::with_zone(fall);
        assert_eq!(clock.seconds_at(just_before), 10_799.0);
        assert_eq!(clock.seconds_at(at), 7_200.0);
    }
}

use chrono::{DateTime, FixedOffset};
use log::debug;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::functional::Reducible;

pub mod content;
pub mod logging;

/// Unit conversions used by the countdown breakdown.
pub mod units {
    pub const MS_PER_SECOND: u64 = 1_000;
    pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
    pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
    pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
    /// Length of the approximate "month" used by [`super::CountdownStyle::MonthsAndDays`].
    pub const DAYS_PER_MONTH: u64 = 30;
}

use units::*;

// Custom error type for countdown setup
#[derive(Debug)]
pub enum CountdownError {
    InvalidTarget {
        input: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for CountdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownError::InvalidTarget { input, source } => write!(
                f,
                "Invalid countdown target '{}': {} (expected RFC 3339, e.g. 2026-05-16T08:00:00-04:00)",
                input, source
            ),
        }
    }
}

impl std::error::Error for CountdownError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CountdownError::InvalidTarget { source, .. } => Some(source),
        }
    }
}

/// The fixed instant the countdown runs towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant(DateTime<FixedOffset>);

impl TargetInstant {
    /// Parse an RFC 3339 timestamp carrying an explicit UTC offset.
    pub fn parse(input: &str) -> Result<Self, CountdownError> {
        DateTime::parse_from_rfc3339(input.trim())
            .map(TargetInstant)
            .map_err(|source| CountdownError::InvalidTarget {
                input: input.to_string(),
                source,
            })
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// How whole days are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownStyle {
    /// `{days, hours, minutes, seconds}`; `months` stays 0.
    #[default]
    DaysOnly,
    /// Splits whole days into 30-day months plus remaining days.
    /// This is not calendar month arithmetic.
    MonthsAndDays,
}

/// Breakdown of the time left until the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Decompose a non-negative duration in milliseconds. Sub-second
    /// remainders are dropped.
    pub fn from_millis(distance: u64, style: CountdownStyle) -> Self {
        let whole_days = distance / MS_PER_DAY;
        let (months, days) = match style {
            CountdownStyle::DaysOnly => (0, whole_days),
            CountdownStyle::MonthsAndDays => {
                (whole_days / DAYS_PER_MONTH, whole_days % DAYS_PER_MONTH)
            }
        };

        TimeRemaining {
            months,
            days,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Rebuild the duration in milliseconds using the same unit conversions.
    pub fn total_millis(&self) -> u64 {
        (self.months * DAYS_PER_MONTH + self.days) * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

/// Current state of the countdown.
///
/// Once the target is reached the countdown stays at [`Countdown::Arrived`];
/// negative breakdowns are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining(TimeRemaining),
    Arrived,
}

impl Countdown {
    /// Compute the countdown for `now_ms` (milliseconds since the Unix epoch).
    ///
    /// Every field comes from the single signed difference `target - now`,
    /// so no field can be stale relative to another.
    pub fn at(target: TargetInstant, now_ms: i64, style: CountdownStyle) -> Self {
        let distance = target.timestamp_millis().saturating_sub(now_ms);
        if distance <= 0 {
            return Countdown::Arrived;
        }
        Countdown::Remaining(TimeRemaining::from_millis(distance as u64, style))
    }

    pub fn is_arrived(&self) -> bool {
        matches!(self, Countdown::Arrived)
    }

    /// The breakdown to display; all zero once arrived.
    pub fn remaining(&self) -> TimeRemaining {
        match self {
            Countdown::Remaining(remaining) => *remaining,
            Countdown::Arrived => TimeRemaining::default(),
        }
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Cyclic pointer into a fixed, non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: NonZeroUsize,
}

impl Rotation {
    /// Start at index 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Rotation { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Step to `(index + 1) mod len`.
    pub fn advance(self) -> Self {
        Rotation {
            index: (self.index + 1) % self.len.get(),
            len: self.len,
        }
    }

    /// Step `ticks` times at once.
    pub fn advance_by(self, ticks: u64) -> Self {
        let len = self.len.get() as u64;
        let index = (self.index as u64 + ticks % len) % len;
        Rotation {
            index: index as usize,
            len: self.len,
        }
    }
}

/// Index reached after `ticks` advances starting from 0.
pub fn rotation_index_after(ticks: u64, len: NonZeroUsize) -> usize {
    (ticks % len.get() as u64) as usize
}

/// Action dispatched by the rotation timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTick;

impl Reducible for Rotation {
    type Action = RotationTick;

    fn reduce(self: Rc<Self>, _tick: Self::Action) -> Rc<Self> {
        let next = (*self).advance();
        debug!("Rotation advanced to {}/{}", next.index, next.len);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "2026-05-16T08:00:00-04:00";

    fn target() -> TargetInstant {
        TargetInstant::parse(TARGET).expect("target parses")
    }

    fn millis(rfc3339: &str) -> i64 {
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("timestamp parses")
            .timestamp_millis()
    }

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero length")
    }

    #[test]
    fn one_day_before_target() {
        let now = millis("2026-05-15T08:00:00-04:00");
        let expected = TimeRemaining {
            days: 1,
            ..TimeRemaining::default()
        };
        assert_eq!(
            Countdown::at(target(), now, CountdownStyle::DaysOnly),
            Countdown::Remaining(expected)
        );
        assert_eq!(
            Countdown::at(target(), now, CountdownStyle::MonthsAndDays),
            Countdown::Remaining(expected)
        );
    }

    #[test]
    fn offset_is_respected_when_comparing_instants() {
        // 12:00Z is 08:00 at -04:00.
        let now = millis("2026-05-16T11:59:30Z");
        let countdown = Countdown::at(target(), now, CountdownStyle::DaysOnly);
        assert_eq!(
            countdown.remaining(),
            TimeRemaining {
                seconds: 30,
                ..TimeRemaining::default()
            }
        );
    }

    #[test]
    fn mixed_breakdown() {
        let now = millis("2026-05-13T05:48:27-04:00");
        let remaining = Countdown::at(target(), now, CountdownStyle::DaysOnly).remaining();
        assert_eq!(
            remaining,
            TimeRemaining {
                months: 0,
                days: 3,
                hours: 2,
                minutes: 11,
                seconds: 33,
            }
        );
    }

    #[test]
    fn month_style_uses_thirty_day_months() {
        // 75 days and 6 hours out.
        let now = target().timestamp_millis() - (75 * MS_PER_DAY + 6 * MS_PER_HOUR) as i64;
        let months = Countdown::at(target(), now, CountdownStyle::MonthsAndDays).remaining();
        assert_eq!((months.months, months.days, months.hours), (2, 15, 6));

        let days = Countdown::at(target(), now, CountdownStyle::DaysOnly).remaining();
        assert_eq!((days.months, days.days, days.hours), (0, 75, 6));
    }

    #[test]
    fn reconstruction_is_within_one_second() {
        let target_ms = target().timestamp_millis();
        let offsets: [i64; 6] = [1, 999, 1_001, 59_999, 86_400_123, 190 * 86_400_000 + 12_345_678];
        for style in [CountdownStyle::DaysOnly, CountdownStyle::MonthsAndDays] {
            for offset in offsets {
                let remaining = Countdown::at(target(), target_ms - offset, style).remaining();
                assert!(remaining.hours < 24 && remaining.minutes < 60 && remaining.seconds < 60);
                let rebuilt = remaining.total_millis() as i64;
                assert!(rebuilt <= offset, "{:?} rebuilt {} > {}", style, rebuilt, offset);
                assert!(offset - rebuilt < MS_PER_SECOND as i64, "{:?} off by a second or more", style);
            }
        }
    }

    #[test]
    fn computation_is_pure() {
        let now = millis("2026-01-02T03:04:05Z");
        let first = Countdown::at(target(), now, CountdownStyle::MonthsAndDays);
        let second = Countdown::at(target(), now, CountdownStyle::MonthsAndDays);
        assert_eq!(first, second);
    }

    #[test]
    fn after_target_clamps_to_arrived() {
        let now = target().timestamp_millis() + MS_PER_HOUR as i64;
        let countdown = Countdown::at(target(), now, CountdownStyle::DaysOnly);
        assert!(countdown.is_arrived());
        assert_eq!(countdown.remaining(), TimeRemaining::default());
    }

    #[test]
    fn exactly_at_target_is_arrived() {
        let countdown = Countdown::at(target(), target().timestamp_millis(), CountdownStyle::DaysOnly);
        assert_eq!(countdown, Countdown::Arrived);
    }

    #[test]
    fn sub_second_remainder_is_still_running() {
        let now = target().timestamp_millis() - 500;
        let countdown = Countdown::at(target(), now, CountdownStyle::DaysOnly);
        assert_eq!(countdown, Countdown::Remaining(TimeRemaining::default()));
    }

    #[test]
    fn invalid_target_is_reported() {
        let err = TargetInstant::parse("May 16th, early").unwrap_err();
        assert!(err.to_string().contains("May 16th, early"));
        // Offset is mandatory.
        assert!(TargetInstant::parse("2026-05-16T08:00:00").is_err());
    }

    #[test]
    fn target_display_keeps_offset() {
        assert_eq!(target().to_string(), "2026-05-16T08:00:00-04:00");
    }

    #[test]
    fn rotation_wraps_after_five_advances_of_three() {
        let mut rotation = Rotation::new(len(3));
        for _ in 0..5 {
            rotation = rotation.advance();
        }
        assert_eq!(rotation.index(), 2);
        assert_eq!(rotation_index_after(5, len(3)), 2);
    }

    #[test]
    fn rotation_index_matches_tick_count() {
        for n in 1..=7 {
            let mut rotation = Rotation::new(len(n));
            for ticks in 0..50u64 {
                assert_eq!(rotation.index(), rotation_index_after(ticks, len(n)));
                assert!(rotation.index() < n);
                rotation = rotation.advance();
            }
        }
    }

    #[test]
    fn advance_by_agrees_with_single_steps() {
        let start = Rotation::new(len(4)).advance();
        let mut stepped = start;
        for _ in 0..11 {
            stepped = stepped.advance();
        }
        assert_eq!(start.advance_by(11), stepped);
        assert_eq!(start.advance_by(u64::MAX).len(), len(4));
    }

    #[test]
    fn single_item_rotation_stays_put() {
        let rotation = Rotation::new(len(1)).advance().advance_by(9);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn reducer_advances_rotation() {
        let rotation = Rc::new(Rotation::new(len(2)));
        let next = rotation.reduce(RotationTick);
        assert_eq!(next.index(), 1);
        assert_eq!(next.reduce(RotationTick).index(), 0);
    }
}

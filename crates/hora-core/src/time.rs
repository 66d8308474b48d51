//! Time-of-day values on a shared 24-hour cycle.
//!
//! A [`TimeOfDay`] is a millisecond offset from midnight. Dates and time
//! zones play no part: sunrise and sunset are only ever compared on the
//! same cycle, and the distance from one to the other wraps across
//! midnight.
//!
//! Parsing accepts the formats people type into a sunrise/sunset field:
//! `6:07 am`, `8:10PM`, `20:10` and `20:10:30`.

use std::f64::consts::TAU;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: u32 = 86_400_000;

/// Accepted input formats, tried in order. 24-hour forms come first so
/// that `12:30` is never read as half past midnight.
const PARSE_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// Errors raised while building a [`TimeOfDay`] from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The text matched none of the accepted formats.
    #[error("unparseable time of day: {input:?} (expected h:mm am/pm or HH:mm)")]
    Unparseable {
        /// The rejected input, as given.
        input: String,
    },

    /// A millisecond offset outside `[0, 86_400_000)`.
    #[error("time of day out of range: {millis} ms since midnight")]
    OutOfRange {
        /// The rejected offset.
        millis: u64,
    },
}

/// An instant within a day, in milliseconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    millis: u32,
}

impl TimeOfDay {
    /// Midnight, the origin of the dial.
    pub const MIDNIGHT: Self = Self { millis: 0 };

    /// Noon.
    pub const NOON: Self = Self {
        millis: MILLIS_PER_DAY / 2,
    };

    /// Build from a millisecond offset since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] unless `millis < 86_400_000`.
    pub const fn from_millis(millis: u32) -> Result<Self, TimeError> {
        if millis < MILLIS_PER_DAY {
            Ok(Self { millis })
        } else {
            Err(TimeError::OutOfRange {
                millis: millis as u64,
            })
        }
    }

    /// Build from hours (0-23), minutes and seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self::from_naive)
            .ok_or_else(|| TimeError::OutOfRange {
                millis: u64::from(hour)
                    .saturating_mul(3_600_000)
                    .saturating_add(u64::from(minute).saturating_mul(60_000))
                    .saturating_add(u64::from(second).saturating_mul(1_000)),
            })
    }

    /// Convert a [`NaiveTime`], truncating to whole milliseconds.
    ///
    /// A leap-second representation is clamped to the last millisecond of
    /// its second.
    pub fn from_naive(time: NaiveTime) -> Self {
        let sub_millis = (time.nanosecond() / 1_000_000).min(999);
        let millis = time
            .num_seconds_from_midnight()
            .saturating_mul(1_000)
            .saturating_add(sub_millis)
            .min(MILLIS_PER_DAY.saturating_sub(1));
        Self { millis }
    }

    /// Parse a time typed by a person.
    ///
    /// Surrounding whitespace is ignored and the `am`/`pm` suffix is case
    /// insensitive, with or without a space before it.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Unparseable`] if no accepted format matches.
    pub fn parse(input: &str) -> Result<Self, TimeError> {
        let trimmed = input.trim();
        PARSE_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .map(Self::from_naive)
            .ok_or_else(|| TimeError::Unparseable {
                input: input.to_owned(),
            })
    }

    /// Milliseconds since midnight.
    pub const fn as_millis(self) -> u32 {
        self.millis
    }

    /// Position within the day as a fraction in `[0, 1)`.
    pub fn fraction_of_day(self) -> f64 {
        f64::from(self.millis) / f64::from(MILLIS_PER_DAY)
    }

    /// Position on the dial in radians, clockwise from midnight.
    pub fn angle(self) -> f64 {
        TAU * self.fraction_of_day()
    }

    /// Milliseconds from `self` forward to the next occurrence of `later`.
    ///
    /// Wraps across midnight, so the result is always in
    /// `[0, 86_400_000)`; equal times are zero apart.
    pub const fn millis_until(self, later: Self) -> u32 {
        if later.millis >= self.millis {
            later.millis.saturating_sub(self.millis)
        } else {
            MILLIS_PER_DAY.saturating_sub(self.millis.saturating_sub(later.millis))
        }
    }

    /// The equivalent [`NaiveTime`].
    pub fn to_naive(self) -> NaiveTime {
        let seconds = self.millis / 1_000;
        let nanos = (self.millis % 1_000).saturating_mul(1_000_000);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.to_naive();
        if self.millis % 1_000 != 0 {
            write!(f, "{}", time.format("%H:%M:%S%.3f"))
        } else if time.second() != 0 {
            write!(f, "{}", time.format("%H:%M:%S"))
        } else {
            write!(f, "{}", time.format("%H:%M"))
        }
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive(time)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::from_hms(hour, minute, 0).unwrap()
    }

    #[test]
    fn parses_twelve_hour_forms() {
        assert_eq!(TimeOfDay::parse("6:07 am").unwrap(), hm(6, 7));
        assert_eq!(TimeOfDay::parse("8:10 pm").unwrap(), hm(20, 10));
        assert_eq!(TimeOfDay::parse("8:10PM").unwrap(), hm(20, 10));
        assert_eq!(TimeOfDay::parse("12:30 am").unwrap(), hm(0, 30));
        assert_eq!(TimeOfDay::parse("12:30 pm").unwrap(), hm(12, 30));
    }

    #[test]
    fn parses_twenty_four_hour_forms() {
        assert_eq!(TimeOfDay::parse("20:10").unwrap(), hm(20, 10));
        assert_eq!(TimeOfDay::parse("06:07").unwrap(), hm(6, 7));
        assert_eq!(TimeOfDay::parse("  12:30 ").unwrap(), hm(12, 30));
        assert_eq!(
            TimeOfDay::parse("20:10:30").unwrap(),
            TimeOfDay::from_hms(20, 10, 30).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "noon", "25:00", "6:61 am", "13:00 pm", "6"] {
            let err = TimeOfDay::parse(input).unwrap_err();
            assert!(matches!(err, TimeError::Unparseable { .. }), "{input}");
        }
    }

    #[test]
    fn millis_range_is_checked() {
        assert!(TimeOfDay::from_millis(0).is_ok());
        assert!(TimeOfDay::from_millis(MILLIS_PER_DAY - 1).is_ok());
        assert_eq!(
            TimeOfDay::from_millis(MILLIS_PER_DAY),
            Err(TimeError::OutOfRange {
                millis: u64::from(MILLIS_PER_DAY)
            })
        );
        assert!(TimeOfDay::from_hms(24, 0, 0).is_err());
    }

    #[test]
    fn fraction_and_angle() {
        assert!(TimeOfDay::MIDNIGHT.fraction_of_day().abs() < 1e-15);
        assert!((TimeOfDay::NOON.fraction_of_day() - 0.5).abs() < 1e-15);
        assert!((hm(6, 0).angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn millis_until_wraps_midnight() {
        let sunrise = hm(6, 7);
        let sunset = hm(20, 10);
        assert_eq!(sunrise.millis_until(sunset), (14 * 60 + 3) * 60_000);
        assert_eq!(sunset.millis_until(sunrise), (9 * 60 + 57) * 60_000);
        assert_eq!(sunrise.millis_until(sunrise), 0);
    }

    #[test]
    fn display_uses_shortest_form() {
        assert_eq!(hm(6, 7).to_string(), "06:07");
        assert_eq!(TimeOfDay::from_hms(6, 7, 9).unwrap().to_string(), "06:07:09");
        assert_eq!(TimeOfDay::from_millis(1).unwrap().to_string(), "00:00:00.001");
    }

    #[test]
    fn naive_round_trip() {
        let naive = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        let time = TimeOfDay::from(naive);
        assert_eq!(time.as_millis(), MILLIS_PER_DAY - 1);
        assert_eq!(time.to_naive(), naive);
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&hm(20, 10)).unwrap();
        assert_eq!(json, "\"20:10\"");
        let back: TimeOfDay = serde_json::from_str("\"8:10 pm\"").unwrap();
        assert_eq!(back, hm(20, 10));
        assert!(serde_json::from_str::<TimeOfDay>("\"later\"").is_err());
    }
}

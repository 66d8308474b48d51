//! Arc segments and the complete time partition of a day.
//!
//! Angles are in radians, measured clockwise from midnight at the top of the
//! dial. One full turn is one day. Segments that cross midnight keep
//! increasing past `2π` instead of wrapping, so every segment satisfies
//! `start_angle <= end_angle`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// ArcSegment
// ---------------------------------------------------------------------------

/// A single labelled arc on one ring of the clock face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArcSegment {
    /// Start of the arc in radians (never negative).
    pub start_angle: f64,
    /// End of the arc in radians (never less than `start_angle`).
    pub end_angle: f64,
    /// Display label, e.g. `IV` or `VIGILIA II`.
    pub label: String,
    /// 1-based position of the segment within its group (hour 1..12 of the
    /// day or of the night, vigil 1..4, quarter 1..4).
    pub ordinal: u8,
    /// Day/night classification. `None` for segments that carry no flag
    /// (vigils and the first two quarters).
    pub is_daytime: Option<bool>,
}

impl ArcSegment {
    /// Angular width of the segment in radians.
    pub fn width(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway between start and end.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Fraction of a full day the segment covers.
    pub fn day_fraction(&self) -> f64 {
        self.width() / TAU
    }

    /// Whether the segment has collapsed to zero width.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= f64::EPSILON
    }
}

// ---------------------------------------------------------------------------
// TimePartition
// ---------------------------------------------------------------------------

/// The three rings computed from a single sunrise/sunset pair.
///
/// A partition is a value: it is rebuilt from scratch whenever the inputs
/// change and never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimePartition {
    /// 24 hours: indices 0..12 are the day hours from sunrise, 12..24 the
    /// night hours from sunset.
    pub hours: Vec<ArcSegment>,
    /// Four night watches, each spanning three night hours.
    pub vigils: Vec<ArcSegment>,
    /// Four half-circle quarters centered on hours 0, 6, 12 and 18.
    pub quarters: Vec<ArcSegment>,
}

impl TimePartition {
    /// Number of hours in each of the day and night halves.
    pub const HOURS_PER_HALF: usize = 12;

    /// The 12 daylight hours, starting at sunrise.
    pub fn day_hours(&self) -> &[ArcSegment] {
        self.hours.get(..Self::HOURS_PER_HALF).unwrap_or(&[])
    }

    /// The 12 night hours, starting at sunset.
    pub fn night_hours(&self) -> &[ArcSegment] {
        self.hours.get(Self::HOURS_PER_HALF..).unwrap_or(&[])
    }

    /// Angular range `(start, end)` covered by the day hours.
    pub fn day_span(&self) -> Option<(f64, f64)> {
        span_of(self.day_hours())
    }

    /// Angular range `(start, end)` covered by the night hours.
    pub fn night_span(&self) -> Option<(f64, f64)> {
        span_of(self.night_hours())
    }

    /// Angle of sunrise (start of the first day hour).
    pub fn sunrise_angle(&self) -> Option<f64> {
        self.hours.first().map(|h| h.start_angle)
    }

    /// Angle of sunset (start of the first night hour).
    pub fn sunset_angle(&self) -> Option<f64> {
        self.hours.get(Self::HOURS_PER_HALF).map(|h| h.start_angle)
    }
}

/// First start and last end of a run of contiguous segments.
fn span_of(segments: &[ArcSegment]) -> Option<(f64, f64)> {
    let first = segments.first()?;
    let last = segments.last()?;
    Some((first.start_angle, last.end_angle))
}

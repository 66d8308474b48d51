//! The time-partition computer.
//!
//! Turns a sunrise/sunset pair into the three rings of the clock face:
//!
//! - **Hours** -- daylight and night are each cut into 12 equal parts, so
//!   a day hour and a night hour differ in length except at the equinox.
//!   Indices 0..12 run from sunrise, 12..24 from sunset.
//! - **Vigils** -- the night grouped into four watches of three hours.
//! - **Quarters** -- half-circle overlays centered on hours 0, 6, 12 and 18.
//!
//! Vigils and quarters are read off the hour boundaries rather than
//! recomputed from the inputs, so every ring lines up exactly.
//!
//! The computation is pure and never fails. Equal sunrise and sunset give a
//! zero-length day: the 12 day hours collapse onto the sunrise angle and the
//! night takes the whole circle.

use std::f64::consts::{FRAC_PI_2, TAU};

use hora_types::{ArcSegment, TimePartition};
use tracing::debug;

use crate::labels::LabelSet;
use crate::time::{MILLIS_PER_DAY, TimeOfDay};

/// Unequal hours in each of the day and the night.
pub const HOURS_PER_HALF: u8 = 12;

/// Night hours per vigil.
const HOURS_PER_VIGIL: usize = 3;

/// Hour indices on which the four quarters are centered.
const QUARTER_CENTERS: [usize; 4] = [0, 6, 12, 18];

/// Day/night flags of the four quarters, in index order.
const QUARTER_DAYTIME: [Option<bool>; 4] = [None, None, Some(true), Some(false)];

/// Lengths of daylight and night for one sunrise/sunset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySplit {
    /// Milliseconds from sunrise forward to sunset.
    pub day_ms: u32,
    /// Milliseconds from sunset forward to the next sunrise.
    pub night_ms: u32,
}

impl DaySplit {
    /// Length of one day hour in milliseconds.
    pub fn day_hour_ms(&self) -> f64 {
        f64::from(self.day_ms) / f64::from(HOURS_PER_HALF)
    }

    /// Length of one night hour in milliseconds.
    pub fn night_hour_ms(&self) -> f64 {
        f64::from(self.night_ms) / f64::from(HOURS_PER_HALF)
    }

    /// Angle swept by daylight, in radians.
    pub fn day_angle(&self) -> f64 {
        TAU * f64::from(self.day_ms) / f64::from(MILLIS_PER_DAY)
    }

    /// Angle swept by the night, in radians.
    pub fn night_angle(&self) -> f64 {
        TAU * f64::from(self.night_ms) / f64::from(MILLIS_PER_DAY)
    }
}

/// Split the day at sunrise and sunset.
///
/// The day runs from sunrise forward to the next sunset, wrapping across
/// midnight if needed; the night is the rest of the 24 hours.
pub const fn split_day(sunrise: TimeOfDay, sunset: TimeOfDay) -> DaySplit {
    let day_ms = sunrise.millis_until(sunset);
    DaySplit {
        day_ms,
        night_ms: MILLIS_PER_DAY.saturating_sub(day_ms),
    }
}

/// Compute the partition with Roman-numeral labels.
pub fn compute_partition(sunrise: TimeOfDay, sunset: TimeOfDay) -> TimePartition {
    compute_partition_with(sunrise, sunset, &LabelSet::default())
}

/// Compute the partition using the given label vocabulary.
pub fn compute_partition_with(
    sunrise: TimeOfDay,
    sunset: TimeOfDay,
    labels: &LabelSet,
) -> TimePartition {
    let split = split_day(sunrise, sunset);

    let sunrise_angle = sunrise.angle();
    let sunset_angle = sunrise_angle + split.day_angle();
    let next_sunrise_angle = sunrise_angle + TAU;

    let day_bounds = hour_boundaries(sunrise_angle, sunset_angle);
    let night_bounds = hour_boundaries(sunset_angle, next_sunrise_angle);

    let mut hours = hour_segments(&day_bounds, true, labels);
    hours.extend(hour_segments(&night_bounds, false, labels));

    let vigils = vigil_segments(&hours, labels);
    let quarters = quarter_segments(&hours, labels);

    debug!(
        %sunrise,
        %sunset,
        day_ms = split.day_ms,
        night_ms = split.night_ms,
        day_hour_ms = split.day_hour_ms(),
        night_hour_ms = split.night_hour_ms(),
        "Computed time partition"
    );

    TimePartition {
        hours,
        vigils,
        quarters,
    }
}

/// The 13 boundary angles of 12 equal hours from `start` to `end`.
///
/// The first boundary is exactly `start` and the last exactly `end`, so
/// consecutive halves of the day share their boundary bit for bit.
fn hour_boundaries(start: f64, end: f64) -> Vec<f64> {
    let span = end - start;
    let steps = f64::from(HOURS_PER_HALF);
    let mut bounds: Vec<f64> = (0..HOURS_PER_HALF)
        .map(|i| start + span * (f64::from(i) / steps))
        .collect();
    bounds.push(end);
    bounds
}

/// One segment per pair of adjacent boundaries.
fn hour_segments(bounds: &[f64], is_daytime: bool, labels: &LabelSet) -> Vec<ArcSegment> {
    bounds
        .windows(2)
        .zip(1..=HOURS_PER_HALF)
        .filter_map(|(pair, ordinal)| match *pair {
            [start, end] => Some(ArcSegment {
                start_angle: start,
                end_angle: end,
                label: labels.hour(ordinal),
                ordinal,
                is_daytime: Some(is_daytime),
            }),
            _ => None,
        })
        .collect()
}

/// Four watches over the night hours, closing at the next sunrise.
fn vigil_segments(hours: &[ArcSegment], labels: &LabelSet) -> Vec<ArcSegment> {
    let night_start = usize::from(HOURS_PER_HALF);
    let mut anchors: Vec<f64> = hours
        .iter()
        .skip(night_start)
        .step_by(HOURS_PER_VIGIL)
        .map(|h| h.start_angle)
        .collect();
    if let Some(sunrise) = hours.first() {
        anchors.push(sunrise.start_angle + TAU);
    }

    anchors
        .windows(2)
        .zip(1_u8..)
        .filter_map(|(pair, ordinal)| match *pair {
            [start, end] => Some(ArcSegment {
                start_angle: start,
                end_angle: end,
                label: labels.vigil(ordinal),
                ordinal,
                is_daytime: None,
            }),
            _ => None,
        })
        .collect()
}

/// Half-circle quarters centered on the starts of hours 0, 6, 12 and 18.
fn quarter_segments(hours: &[ArcSegment], labels: &LabelSet) -> Vec<ArcSegment> {
    QUARTER_CENTERS
        .iter()
        .zip(QUARTER_DAYTIME)
        .zip(1_u8..)
        .filter_map(|((&center_idx, is_daytime), ordinal)| {
            let center = hours.get(center_idx)?.start_angle;
            let (start_angle, end_angle) = quarter_bounds(center);
            Some(ArcSegment {
                start_angle,
                end_angle,
                label: labels.quarter(ordinal),
                ordinal,
                is_daytime,
            })
        })
        .collect()
}

/// `center ± π/2`, moved up one turn when the start would be negative.
fn quarter_bounds(center: f64) -> (f64, f64) {
    let start = center - FRAC_PI_2;
    let end = center + FRAC_PI_2;
    if start < 0.0 {
        (start + TAU, end + TAU)
    } else {
        (start, end)
    }
}

//! SVG path construction for ring sectors and label baselines.
//!
//! Angles follow the partition convention: radians clockwise from the top
//! of the dial. A point at radius `r` and angle `a` sits at
//! `(r sin a, -r cos a)` relative to the center, matching SVG's downward
//! y axis.
//!
//! Paths are built directly in the winding they are drawn in. Label
//! baselines on the lower half of the dial are emitted counter-clockwise so
//! the text reads upright.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

/// Arcs narrower than this are treated as empty.
const MIN_SWEEP: f64 = 1e-9;

/// A point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset, rightwards.
    pub x: f64,
    /// Vertical offset, downwards.
    pub y: f64,
}

impl Point {
    /// A point at the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` and `angle` around `self`.
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.sin(),
            y: self.y - radius * angle.cos(),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", fmt_num(self.x), fmt_num(self.y))
    }
}

/// Direction in which a label baseline is traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// From the start angle to the end angle (SVG sweep flag 1).
    Clockwise,
    /// From the end angle back to the start angle (SVG sweep flag 0).
    CounterClockwise,
}

impl Winding {
    /// The winding that keeps text upright for an arc centered on
    /// `mid_angle`: counter-clockwise on the lower half of the dial.
    pub fn upright_for(mid_angle: f64) -> Self {
        let normalized = mid_angle.rem_euclid(TAU);
        if normalized > FRAC_PI_2 && normalized < PI + FRAC_PI_2 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    const fn sweep_flag(self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 0,
        }
    }
}

/// Closed path of the ring sector between `inner` and `outer` radii from
/// `start` to `end`.
///
/// `pad_angle` leaves a gap of constant width between neighbours, measured
/// on the radius `sqrt(inner² + outer²)`. A sector too narrow for its
/// padding collapses onto its middle. A sweep of a full turn or more is
/// drawn as a complete annulus.
pub fn annular_sector(
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
    pad_angle: f64,
) -> String {
    let sweep = end - start;
    if sweep >= TAU - MIN_SWEEP {
        return full_annulus(center, inner, outer);
    }

    let pad_radius = inner.hypot(outer);
    let (outer_start, outer_end) = padded(start, end, outer, pad_radius, pad_angle);
    let (inner_start, inner_end) = padded(start, end, inner, pad_radius, pad_angle);

    let mut path = String::new();
    let _ = write!(path, "M{}", center.polar(outer, outer_start));
    push_arc(
        &mut path,
        center,
        outer,
        outer_start,
        outer_end,
        Winding::Clockwise,
    );

    if inner > 0.0 {
        let _ = write!(path, "L{}", center.polar(inner, inner_end));
        push_arc(
            &mut path,
            center,
            inner,
            inner_start,
            inner_end,
            Winding::CounterClockwise,
        );
    } else {
        let _ = write!(path, "L{center}");
    }
    path.push('Z');
    path
}

/// Open arc path at `radius` from `start` to `end`, traced in `winding`.
///
/// Used as the baseline of curved text: a `textPath` follows it from its
/// first point to its last.
pub fn label_path(center: Point, radius: f64, start: f64, end: f64, winding: Winding) -> String {
    let (from, _) = endpoints(start, end, winding);
    let mut path = String::new();
    let _ = write!(path, "M{}", center.polar(radius, from));
    push_arc(&mut path, center, radius, start, end, winding);
    path
}

/// Append an `A` command for the arc from `start` to `end` (or back, for a
/// counter-clockwise winding). The current point must already be at the
/// arc's first endpoint.
fn push_arc(path: &mut String, center: Point, radius: f64, start: f64, end: f64, winding: Winding) {
    let large_arc = u8::from(end - start > PI);
    let (_, to) = endpoints(start, end, winding);
    let r = fmt_num(radius);
    let _ = write!(
        path,
        "A{r},{r},0,{large_arc},{},{}",
        winding.sweep_flag(),
        center.polar(radius, to)
    );
}

/// First and last angle visited when tracing in `winding`.
const fn endpoints(start: f64, end: f64, winding: Winding) -> (f64, f64) {
    match winding {
        Winding::Clockwise => (start, end),
        Winding::CounterClockwise => (end, start),
    }
}

/// Shrink `[start, end]` at `radius` so the linear gap is the same on every
/// ring.
fn padded(start: f64, end: f64, radius: f64, pad_radius: f64, pad_angle: f64) -> (f64, f64) {
    if pad_angle <= 0.0 || radius <= 0.0 {
        return (start, end);
    }
    let ratio = (pad_radius / radius * (pad_angle / 2.0).sin()).min(1.0);
    let half_pad = ratio.asin();
    if end - start > 2.0 * half_pad + MIN_SWEEP {
        (start + half_pad, end - half_pad)
    } else {
        let mid = (start + end) / 2.0;
        (mid, mid)
    }
}

/// A full ring as two half circles outside and two inside.
fn full_annulus(center: Point, inner: f64, outer: f64) -> String {
    let mut path = String::new();
    let top = center.polar(outer, 0.0);
    let bottom = center.polar(outer, PI);
    let r = fmt_num(outer);
    let _ = write!(path, "M{top}A{r},{r},0,1,1,{bottom}A{r},{r},0,1,1,{top}");
    if inner > 0.0 {
        let top = center.polar(inner, 0.0);
        let bottom = center.polar(inner, PI);
        let r = fmt_num(inner);
        let _ = write!(path, "M{top}A{r},{r},0,1,0,{bottom}A{r},{r},0,1,0,{top}");
    }
    path.push('Z');
    path
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(0.0, 0.0);

    #[test]
    fn polar_matches_dial_convention() {
        let top = ORIGIN.polar(10.0, 0.0);
        assert!(top.x.abs() < 1e-9 && (top.y + 10.0).abs() < 1e-9);
        let right = ORIGIN.polar(10.0, FRAC_PI_2);
        assert!((right.x - 10.0).abs() < 1e-9 && right.y.abs() < 1e-9);
        let bottom = Point::new(5.0, 5.0).polar(10.0, PI);
        assert!((bottom.x - 5.0).abs() < 1e-9 && (bottom.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(1.23456), "1.235");
        assert_eq!(fmt_num(-12.5), "-12.5");
    }

    #[test]
    fn upright_winding_flips_on_lower_half() {
        assert_eq!(Winding::upright_for(0.1), Winding::Clockwise);
        assert_eq!(Winding::upright_for(PI), Winding::CounterClockwise);
        assert_eq!(Winding::upright_for(1.6), Winding::CounterClockwise);
        assert_eq!(Winding::upright_for(5.0), Winding::Clockwise);
        // Angles past a full turn wrap first.
        assert_eq!(Winding::upright_for(TAU + PI), Winding::CounterClockwise);
    }

    #[test]
    fn quarter_circle_sector() {
        let path = annular_sector(ORIGIN, 5.0, 10.0, 0.0, FRAC_PI_2, 0.0);
        assert_eq!(path, "M0,-10A10,10,0,0,1,10,0L5,0A5,5,0,0,0,0,-5Z");
    }

    #[test]
    fn wide_sector_sets_large_arc_flag() {
        let path = annular_sector(ORIGIN, 5.0, 10.0, 0.0, 1.5 * PI, 0.0);
        assert!(path.contains("A10,10,0,1,1,"));
        assert!(path.contains("A5,5,0,1,0,"));
    }

    #[test]
    fn full_turn_is_a_closed_annulus() {
        let path = annular_sector(ORIGIN, 5.0, 10.0, 1.0, 1.0 + TAU, 0.01);
        assert_eq!(
            path,
            "M0,-10A10,10,0,1,1,0,10A10,10,0,1,1,0,-10M0,-5A5,5,0,1,0,0,5A5,5,0,1,0,0,-5Z"
        );
    }

    #[test]
    fn padding_shrinks_and_collapses() {
        let (s, e) = padded(0.0, 1.0, 10.0, 10.0, 0.1);
        assert!(s > 0.0 && e < 1.0);
        assert!((s - 0.05).abs() < 1e-9);
        let (s, e) = padded(0.0, 0.01, 10.0, 10.0, 0.1);
        assert!((s - 0.005).abs() < 1e-12 && (e - 0.005).abs() < 1e-12);
        // Inner radii lose more angle to the same linear gap.
        let (inner_start, _) = padded(0.0, 1.0, 5.0, 10.0, 0.1);
        assert!(inner_start > 0.05);
    }

    #[test]
    fn label_path_reverses_for_counter_clockwise() {
        let forward = label_path(ORIGIN, 10.0, 0.0, FRAC_PI_2, Winding::Clockwise);
        assert_eq!(forward, "M0,-10A10,10,0,0,1,10,0");
        let backward = label_path(ORIGIN, 10.0, 0.0, FRAC_PI_2, Winding::CounterClockwise);
        assert_eq!(backward, "M10,0A10,10,0,0,0,0,-10");
    }

    #[test]
    fn sector_without_hole_closes_on_center() {
        let path = annular_sector(ORIGIN, 0.0, 10.0, 0.0, FRAC_PI_2, 0.0);
        assert_eq!(path, "M0,-10A10,10,0,0,1,10,0L0,0Z");
    }
}

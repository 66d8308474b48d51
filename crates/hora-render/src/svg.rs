//! SVG document writer for a [`TimePartition`].
//!
//! The writer is handed its output target and layout explicitly; it keeps
//! no state between charts. Each ring becomes a group of sector paths, an
//! invisible baseline per sector for the curved label, and a `textPath`
//! label centered on that baseline. Quarter sectors overlap their neighbours,
//! so they are left unfilled and only their labels show.

use std::fmt::Write;

use hora_core::LabelSet;
use hora_types::{ArcSegment, Ring, TimePartition};
use tracing::debug;

use crate::error::RenderError;
use crate::geometry::{Point, Winding, annular_sector, fmt_num, label_path};
use crate::layout::{ChartLayout, RingRadii};

/// Hour ticks around the dial, one per clock hour.
const TICK_COUNT: u32 = 24;

/// Degrees between adjacent ticks.
const TICK_STEP_DEGREES: f64 = 15.0;

/// Vertical nudge that centers tick labels on their radius.
const TICK_LABEL_BASELINE: f64 = 4.0;

/// Stylesheet embedded in every chart.
const DEFAULT_STYLE: &str = "\
.hour-day{fill:#f2c14e;stroke:none}\
.hour-night{fill:#1d3557;stroke:none}\
.quarter-arc{fill:none;stroke:none}\
.hour-tick{stroke:#555;stroke-width:1}\
.hour-tick-label{font:11px sans-serif;fill:#555}\
.hour-label,.vigil-label,.quarter-label{font-family:Georgia,serif;letter-spacing:1px}\
.hour-label{font-size:14px}\
.hour-label.night,.vigil-label{fill:#f1faee}\
.vigil-label{font-size:11px}\
.quarter-label{font-size:13px;fill:#333}";

/// Write the complete SVG document for `partition` into `out`.
///
/// # Errors
///
/// Returns [`RenderError::MalformedPartition`] if a ring does not have its
/// fixed number of segments, and [`RenderError::Format`] if the target
/// rejects a write.
pub fn render_svg<W: Write>(
    partition: &TimePartition,
    layout: &ChartLayout,
    labels: &LabelSet,
    out: &mut W,
) -> Result<(), RenderError> {
    check_ring(Ring::Hours, &partition.hours)?;
    check_ring(Ring::Vigils, &partition.vigils)?;
    check_ring(Ring::Quarters, &partition.quarters)?;

    let size = fmt_num(layout.size);
    let (cx, cy) = layout.center();

    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" class="hora-chart" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    )?;
    write!(out, "<style>{DEFAULT_STYLE}</style>")?;
    write!(
        out,
        r#"<g transform="translate({},{})">"#,
        fmt_num(cx),
        fmt_num(cy)
    )?;

    let painter = RingPainter { layout, labels };
    painter.sectors(out, Ring::Hours, &partition.hours)?;
    write_ticks(out, layout)?;
    painter.sectors(out, Ring::Vigils, &partition.vigils)?;
    painter.sectors(out, Ring::Quarters, &partition.quarters)?;

    for (ring, segments) in rings(partition) {
        painter.baselines(out, ring, segments)?;
    }
    for (ring, segments) in rings(partition) {
        painter.labels(out, ring, segments)?;
    }

    out.write_str("</g></svg>")?;

    debug!(
        size = layout.size,
        hours = partition.hours.len(),
        vigils = partition.vigils.len(),
        quarters = partition.quarters.len(),
        "Rendered chart"
    );
    Ok(())
}

/// Render `partition` into a fresh string.
///
/// # Errors
///
/// Returns [`RenderError::MalformedPartition`] if a ring is the wrong size.
pub fn render_to_string(
    partition: &TimePartition,
    layout: &ChartLayout,
    labels: &LabelSet,
) -> Result<String, RenderError> {
    let mut svg = String::new();
    render_svg(partition, layout, labels, &mut svg)?;
    Ok(svg)
}

/// The three rings in drawing order.
fn rings(partition: &TimePartition) -> [(Ring, &[ArcSegment]); 3] {
    [
        (Ring::Hours, partition.hours.as_slice()),
        (Ring::Vigils, partition.vigils.as_slice()),
        (Ring::Quarters, partition.quarters.as_slice()),
    ]
}

fn check_ring(ring: Ring, segments: &[ArcSegment]) -> Result<(), RenderError> {
    let expected = ring.segment_count();
    if segments.len() == expected {
        Ok(())
    } else {
        Err(RenderError::MalformedPartition {
            ring: ring.css_name(),
            found: segments.len(),
            expected,
        })
    }
}

/// Draws one ring at a time against a fixed layout and vocabulary.
struct RingPainter<'a> {
    layout: &'a ChartLayout,
    labels: &'a LabelSet,
}

impl RingPainter<'_> {
    const ORIGIN: Point = Point::new(0.0, 0.0);

    fn radii(&self, ring: Ring) -> RingRadii {
        self.layout.ring(ring)
    }

    fn title(&self, ring: Ring, segment: &ArcSegment) -> String {
        escape(&self.labels.title(ring, segment.ordinal, segment.is_daytime))
    }

    /// Filled sectors, each with its tooltip.
    fn sectors<W: Write>(
        &self,
        out: &mut W,
        ring: Ring,
        segments: &[ArcSegment],
    ) -> Result<(), RenderError> {
        let radii = self.radii(ring);
        let name = ring.css_name();
        write!(out, r#"<g class="{name}s">"#)?;
        for (i, segment) in segments.iter().enumerate() {
            let d = annular_sector(
                Self::ORIGIN,
                radii.inner,
                radii.outer,
                segment.start_angle,
                segment.end_angle,
                self.layout.pad_angle,
            );
            write!(
                out,
                r#"<path class="{}" id="{name}-arc{i}" d="{d}"><title>{}</title></path>"#,
                sector_class(ring, segment),
                self.title(ring, segment)
            )?;
        }
        out.write_str("</g>")?;
        Ok(())
    }

    /// Invisible mid-ring baselines the labels flow along.
    fn baselines<W: Write>(
        &self,
        out: &mut W,
        ring: Ring,
        segments: &[ArcSegment],
    ) -> Result<(), RenderError> {
        let radius = self.radii(ring).mid();
        let name = ring.css_name();
        out.write_str("<defs>")?;
        for (i, segment) in segments.iter().enumerate() {
            let d = label_path(
                Self::ORIGIN,
                radius,
                segment.start_angle,
                segment.end_angle,
                Winding::upright_for(segment.mid_angle()),
            );
            write!(
                out,
                r#"<path class="hidden-{name}-arc" id="hidden-{name}-arc{i}" d="{d}" fill="none"/>"#
            )?;
        }
        out.write_str("</defs>")?;
        Ok(())
    }

    /// Curved labels centered on each baseline.
    fn labels<W: Write>(
        &self,
        out: &mut W,
        ring: Ring,
        segments: &[ArcSegment],
    ) -> Result<(), RenderError> {
        let name = ring.css_name();
        for (i, segment) in segments.iter().enumerate() {
            let night = if segment.is_daytime == Some(false) && ring == Ring::Hours {
                " night"
            } else {
                ""
            };
            write!(
                out,
                r##"<text class="{name}-label{night}" dominant-baseline="central"><textPath href="#hidden-{name}-arc{i}" xlink:href="#hidden-{name}-arc{i}" startOffset="50%" text-anchor="middle">{}</textPath><title>{}</title></text>"##,
                escape(&segment.label),
                self.title(ring, segment)
            )?;
        }
        Ok(())
    }
}

/// CSS class of a filled sector.
fn sector_class(ring: Ring, segment: &ArcSegment) -> &'static str {
    match (ring, segment.is_daytime) {
        (Ring::Quarters, _) => "quarter-arc",
        (Ring::Hours, Some(true)) => "hour-day",
        _ => "hour-night",
    }
}

/// 24 ticks just inside the hour ring, labelled `24, 1, .., 23`.
fn write_ticks<W: Write>(out: &mut W, layout: &ChartLayout) -> Result<(), RenderError> {
    let y1 = fmt_num(-layout.hours.inner * 0.90);
    let y2 = fmt_num(-layout.hours.inner * 0.95);
    out.write_str(r#"<g class="hour-ticks">"#)?;
    for hour in 0..TICK_COUNT {
        let degrees = f64::from(hour) * TICK_STEP_DEGREES;
        write!(
            out,
            r#"<line class="hour-tick" x1="0" x2="0" y1="{y1}" y2="{y2}" transform="rotate({})"/>"#,
            fmt_num(degrees)
        )?;
    }
    for hour in 0..TICK_COUNT {
        let radians = (f64::from(hour) * TICK_STEP_DEGREES).to_radians();
        let anchor = Point::new(0.0, 0.0).polar(layout.hour_label_radius, radians);
        let text = if hour == 0 { TICK_COUNT } else { hour };
        write!(
            out,
            r#"<text class="hour-tick-label" text-anchor="middle" x="{}" y="{}">{text}</text>"#,
            fmt_num(anchor.x),
            fmt_num(anchor.y + TICK_LABEL_BASELINE)
        )?;
    }
    out.write_str("</g>")?;
    Ok(())
}

/// Escape text for use in element content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

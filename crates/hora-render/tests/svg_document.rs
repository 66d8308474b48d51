//! End-to-end checks on rendered chart documents.

#![allow(clippy::unwrap_used)]

use hora_core::{LabelSet, TimeOfDay, compute_partition, compute_partition_with};
use hora_render::{ChartLayout, render_to_string};
use hora_types::LabelStyle;

fn chart(sunrise: &str, sunset: &str) -> String {
    let partition = compute_partition(
        TimeOfDay::parse(sunrise).unwrap(),
        TimeOfDay::parse(sunset).unwrap(),
    );
    render_to_string(&partition, &ChartLayout::default(), &LabelSet::default()).unwrap()
}

#[test]
fn document_is_a_sized_svg() {
    let svg = chart("6:07 am", "8:10 pm");
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"width="600" height="600" viewBox="0 0 600 600""#));
    assert!(svg.contains(r#"<g transform="translate(300,300)">"#));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn every_segment_has_a_sector_baseline_and_label() {
    let svg = chart("6:07 am", "8:10 pm");
    for i in 0..24 {
        assert!(svg.contains(&format!(r#"id="hour-arc{i}""#)), "hour {i}");
        assert!(svg.contains(&format!(r#"id="hidden-hour-arc{i}""#)));
        assert!(svg.contains(&format!(r##"href="#hidden-hour-arc{i}""##)));
    }
    for i in 0..4 {
        assert!(svg.contains(&format!(r#"id="vigil-arc{i}""#)));
        assert!(svg.contains(&format!(r#"id="quarter-arc{i}""#)));
        assert!(svg.contains(&format!(r#"id="hidden-quarter-arc{i}""#)));
    }
    assert_eq!(svg.matches(r#"class="hour-day""#).count(), 12);
    // Twelve night hours plus four vigils.
    assert_eq!(svg.matches(r#"class="hour-night""#).count(), 16);
    assert_eq!(svg.matches(r#"class="quarter-arc""#).count(), 4);
    assert_eq!(svg.matches(r#"class="hour-tick""#).count(), 24);
}

#[test]
fn labels_and_titles_use_the_latin_vocabulary() {
    let svg = chart("6:07 am", "8:10 pm");
    assert!(svg.contains(">XII</textPath>"));
    assert!(svg.contains(">VIGILIA IV</textPath>"));
    assert!(svg.contains(">VESPER</textPath>"));
    assert!(svg.contains("<title>diēī hōra prīma</title>"));
    assert!(svg.contains("<title>noctis hōra duodecima</title>"));
    assert!(svg.contains("<title>vigilia tertia</title>"));
    assert!(svg.contains("<title>nox</title>"));
}

#[test]
fn label_style_changes_ring_text() {
    let sunrise = TimeOfDay::parse("07:00").unwrap();
    let sunset = TimeOfDay::parse("17:00").unwrap();
    let labels = LabelSet::new(LabelStyle::Arabic);
    let partition = compute_partition_with(sunrise, sunset, &labels);
    let svg = render_to_string(&partition, &ChartLayout::for_size(400.0), &labels).unwrap();
    assert!(svg.contains(">12</textPath>"));
    assert!(!svg.contains(">XII</textPath>"));
    assert!(svg.contains(r#"viewBox="0 0 400 400""#));
}

#[test]
fn midnight_crossing_day_still_renders() {
    let svg = chart("22:00", "05:00");
    assert_eq!(svg.matches("<path class=\"hour-").count(), 28);
    assert!(!svg.contains("NaN"));
}

#[test]
fn collapsed_day_renders_without_nan() {
    let svg = chart("09:15", "09:15");
    assert!(!svg.contains("NaN"));
}

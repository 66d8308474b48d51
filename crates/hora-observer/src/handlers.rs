//! Endpoint handlers for the observer server.
//!
//! Every handler recomputes the partition from its query parameters,
//! falling back to the configured sunrise and sunset when a parameter is
//! missing or empty.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML form with the inline chart |
//! | `GET` | `/chart.svg` | Standalone SVG chart |
//! | `GET` | `/api/partition` | Partition as JSON |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use hora_core::{DaySplit, TimeOfDay, compute_partition_with, split_day};
use hora_render::render_to_string;
use hora_types::TimePartition;
use tracing::debug;

use crate::error::ObserverError;
use crate::state::{AppState, INDEX_TEMPLATE};

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters shared by all endpoints.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ClockQuery {
    /// Sunrise time of day, e.g. `06:07` or `6:07 am`.
    pub sunrise: Option<String>,
    /// Sunset time of day.
    pub sunset: Option<String>,
}

impl ClockQuery {
    /// Resolve both times, using the state's defaults for absent values.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::InvalidTime`] naming the first parameter
    /// that does not parse.
    pub fn resolve(&self, state: &AppState) -> Result<(TimeOfDay, TimeOfDay), ObserverError> {
        let sunrise = parse_param("sunrise", self.sunrise.as_deref(), state.default_sunrise)?;
        let sunset = parse_param("sunset", self.sunset.as_deref(), state.default_sunset)?;
        Ok((sunrise, sunset))
    }
}

fn parse_param(
    param: &'static str,
    value: Option<&str>,
    default: TimeOfDay,
) -> Result<TimeOfDay, ObserverError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => {
            TimeOfDay::parse(text).map_err(|source| ObserverError::InvalidTime { param, source })
        }
    }
}

/// Body of `GET /api/partition`.
#[derive(Debug, serde::Serialize)]
pub struct PartitionResponse {
    /// Sunrise the partition was computed for.
    pub sunrise: TimeOfDay,
    /// Sunset the partition was computed for.
    pub sunset: TimeOfDay,
    /// Milliseconds from sunrise to sunset.
    pub day_ms: u32,
    /// Milliseconds from sunset to the next sunrise.
    pub night_ms: u32,
    /// The computed rings.
    pub partition: TimePartition,
}

// ---------------------------------------------------------------------------
// GET / -- form and inline chart
// ---------------------------------------------------------------------------

/// Serve the HTML page with the sunrise/sunset form and the chart inline.
///
/// # Errors
///
/// Returns `400` for unparseable times and `500` if the page cannot be
/// rendered.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClockQuery>,
) -> Result<Html<String>, ObserverError> {
    let (sunrise, sunset) = query.resolve(&state)?;
    let split = split_day(sunrise, sunset);
    let partition = compute_partition_with(sunrise, sunset, &state.labels);
    let svg = render_to_string(&partition, &state.layout, &state.labels)?;

    let page = state.render_page(
        INDEX_TEMPLATE,
        serde_json::json!({
            "sunrise": sunrise.to_string(),
            "sunset": sunset.to_string(),
            "day_length": format_duration(f64::from(split.day_ms)),
            "night_length": format_duration(f64::from(split.night_ms)),
            "day_hour": format_duration(split.day_hour_ms()),
            "night_hour": format_duration(split.night_hour_ms()),
            "svg": svg,
        }),
    )?;
    Ok(Html(page))
}

// ---------------------------------------------------------------------------
// GET /chart.svg -- standalone chart
// ---------------------------------------------------------------------------

/// Serve the chart as an `image/svg+xml` document.
///
/// # Errors
///
/// Returns `400` for unparseable times.
pub async fn chart_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClockQuery>,
) -> Result<impl IntoResponse, ObserverError> {
    let (sunrise, sunset) = query.resolve(&state)?;
    let partition = compute_partition_with(sunrise, sunset, &state.labels);
    let svg = render_to_string(&partition, &state.layout, &state.labels)?;
    debug!(%sunrise, %sunset, bytes = svg.len(), "Served chart");
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

// ---------------------------------------------------------------------------
// GET /api/partition -- JSON partition
// ---------------------------------------------------------------------------

/// Serve the partition and the day/night split as JSON.
///
/// # Errors
///
/// Returns `400` for unparseable times.
pub async fn get_partition(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClockQuery>,
) -> Result<Json<PartitionResponse>, ObserverError> {
    let (sunrise, sunset) = query.resolve(&state)?;
    let DaySplit { day_ms, night_ms } = split_day(sunrise, sunset);
    let partition = compute_partition_with(sunrise, sunset, &state.labels);
    Ok(Json(PartitionResponse {
        sunrise,
        sunset,
        day_ms,
        night_ms,
        partition,
    }))
}

/// Format a span of milliseconds as `14h 03m 00s`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]
fn format_duration(millis: f64) -> String {
    let total = (millis / 1_000.0).round().max(0.0) as u64;
    let (hours, rest) = (total / 3_600, total % 3_600);
    format!("{hours}h {:02}m {:02}s", rest / 60, rest % 60)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn durations_read_as_clock_spans() {
        assert_eq!(format_duration(0.0), "0h 00m 00s");
        assert_eq!(format_duration(f64::from((14 * 60 + 3) * 60 * 1000)), "14h 03m 00s");
        assert_eq!(format_duration(4_215_000.0), "1h 10m 15s");
        assert_eq!(format_duration(86_400_000.0), "24h 00m 00s");
    }

    #[test]
    fn blank_parameters_fall_back() {
        let default = TimeOfDay::NOON;
        assert_eq!(parse_param("sunrise", None, default).unwrap(), default);
        assert_eq!(parse_param("sunrise", Some("  "), default).unwrap(), default);
        assert!(matches!(
            parse_param("sunset", Some("late"), default),
            Err(ObserverError::InvalidTime { param: "sunset", .. })
        ));
    }
}

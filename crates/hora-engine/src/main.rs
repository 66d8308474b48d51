//! `hora` binary: Roman hour clock faces from the command line.
//!
//! Loads configuration, computes the unequal-hour partition for the
//! configured sunrise and sunset, optionally writes the chart to disk and
//! then serves it over HTTP.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `hora-config.yaml` (or `HORA_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Resolve sunrise, sunset, labels and chart layout
//! 4. Compute the time partition and log its summary
//! 5. Write the SVG chart if `output.svg_path` is set
//! 6. Run the observer server if `server.enabled`

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hora_core::config::HoraConfig;
use hora_core::{compute_partition_with, split_day};
use hora_observer::{AppState, ServerConfig};
use hora_render::{ChartLayout, render_to_string};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Config file read when `HORA_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "hora-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any startup step, the chart output, or the
/// observer server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so the outcome is
    //    reported once the subscriber exists.
    let config_path = config_path();
    let (config, loaded_from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("hora starting");
    if loaded_from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Resolve clock and chart settings.
    let (sunrise, sunset) = config.clock.times().map_err(EngineError::from)?;
    let labels = config.clock.label_set();
    let layout = ChartLayout::for_size(f64::from(config.chart.size))
        .with_pad_angle(config.chart.pad_angle);
    info!(
        %sunrise,
        %sunset,
        labels = %labels.style(),
        size = config.chart.size,
        pad_angle = config.chart.pad_angle,
        "Clock configured"
    );

    // 4. Compute the partition.
    let split = split_day(sunrise, sunset);
    let partition = compute_partition_with(sunrise, sunset, &labels);
    info!(
        day_ms = split.day_ms,
        night_ms = split.night_ms,
        day_hour_ms = split.day_hour_ms(),
        night_hour_ms = split.night_hour_ms(),
        hours = partition.hours.len(),
        vigils = partition.vigils.len(),
        quarters = partition.quarters.len(),
        "Time partition computed"
    );

    // 5. Write the chart.
    if let Some(path) = &config.output.svg_path {
        let svg = render_to_string(&partition, &layout, &labels).map_err(EngineError::from)?;
        write_chart(path, &svg).await?;
        info!(path = %path.display(), bytes = svg.len(), "Chart written");
    }

    // 6. Serve.
    if config.server.enabled {
        let state = AppState::new(sunrise, sunset, labels, layout).map_err(|e| {
            EngineError::Observer {
                message: format!("{e}"),
            }
        })?;
        let server_config = ServerConfig::from(&config.server);
        hora_observer::start_server(&server_config, Arc::new(state))
            .await
            .map_err(|e| EngineError::Observer {
                message: format!("{e}"),
            })?;
    } else {
        info!("Observer server disabled");
    }

    info!("hora finished");
    Ok(())
}

/// Path of the configuration file, honoring `HORA_CONFIG`.
fn config_path() -> PathBuf {
    std::env::var_os("HORA_CONFIG").map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration from `path`, or defaults with environment
/// overrides if the file does not exist. The flag reports which.
fn load_config(path: &Path) -> Result<(HoraConfig, bool), EngineError> {
    if path.exists() {
        let config = HoraConfig::from_file(path)?;
        Ok((config, true))
    } else {
        let mut config = HoraConfig::default();
        config.apply_env_overrides()?;
        config.clock.times()?;
        Ok((config, false))
    }
}

async fn write_chart(path: &Path, svg: &str) -> Result<(), EngineError> {
    tokio::fs::write(path, svg)
        .await
        .map_err(|source| EngineError::Output {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("hora-no-such-config.yaml");
        let (config, from_file) = load_config(&path).unwrap();
        assert!(!from_file);
        assert_eq!(config.chart.size, 600);
    }

    #[tokio::test]
    async fn chart_lands_on_disk() {
        let path = std::env::temp_dir().join(format!("hora-chart-{}.svg", std::process::id()));
        write_chart(&path, "<svg/>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn unwritable_path_reports_destination() {
        let path = Path::new("/nonexistent-hora-dir/chart.svg");
        let err = write_chart(path, "<svg/>").await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent-hora-dir/chart.svg"));
    }
}

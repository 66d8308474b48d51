//! Configuration loading and typed config structures for the Hora clock.
//!
//! The canonical configuration lives in `hora-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and
//! provides a loader that reads and validates the file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use hora_types::LabelStyle;
use serde::Deserialize;

use crate::labels::LabelSet;
use crate::time::{TimeError, TimeOfDay};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A sunrise or sunset value is not a valid time of day.
    #[error("invalid {field}: {source}")]
    InvalidTime {
        /// Which setting was rejected (`clock.sunrise` or `clock.sunset`).
        field: &'static str,
        /// The underlying parse error.
        source: TimeError,
    },

    /// An environment override could not be parsed.
    #[error("invalid environment variable {name}: {reason}")]
    InvalidEnv {
        /// The variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `hora-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HoraConfig {
    /// Default sunrise/sunset and label vocabulary.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Chart dimensions.
    #[serde(default)]
    pub chart: ChartConfig,

    /// One-shot file output.
    #[serde(default)]
    pub output: OutputConfig,

    /// Observer HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HoraConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `HORA_SUNRISE` overrides `clock.sunrise`
    /// - `HORA_SUNSET` overrides `clock.sunset`
    /// - `HORA_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, and
    /// [`ConfigError::InvalidTime`] / [`ConfigError::InvalidEnv`] if a value
    /// does not validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        config.clock.times()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as a unit value, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `HORA_*` environment overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `HORA_PORT` is not a port
    /// number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `HORA_PORT` is not a port
    /// number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HORA_SUNRISE") {
            self.clock.sunrise = val;
        }
        if let Some(val) = lookup("HORA_SUNSET") {
            self.clock.sunset = val;
        }
        if let Some(val) = lookup("HORA_PORT") {
            self.server.port = val.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                name: "HORA_PORT",
                reason: format!("{e}"),
            })?;
        }
        Ok(())
    }
}

/// Default clock inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Sunrise, in any format [`TimeOfDay::parse`] accepts.
    #[serde(default = "default_sunrise")]
    pub sunrise: String,

    /// Sunset, in any format [`TimeOfDay::parse`] accepts.
    #[serde(default = "default_sunset")]
    pub sunset: String,

    /// Vocabulary for hour and vigil labels.
    #[serde(default)]
    pub labels: LabelStyle,
}

impl ClockConfig {
    /// Parse the configured sunrise and sunset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTime`] naming the offending field.
    pub fn times(&self) -> Result<(TimeOfDay, TimeOfDay), ConfigError> {
        let sunrise = TimeOfDay::parse(&self.sunrise).map_err(|source| ConfigError::InvalidTime {
            field: "clock.sunrise",
            source,
        })?;
        let sunset = TimeOfDay::parse(&self.sunset).map_err(|source| ConfigError::InvalidTime {
            field: "clock.sunset",
            source,
        })?;
        Ok((sunrise, sunset))
    }

    /// Label lookup for the configured vocabulary.
    pub const fn label_set(&self) -> LabelSet {
        LabelSet::new(self.labels)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sunrise: default_sunrise(),
            sunset: default_sunset(),
            labels: LabelStyle::default(),
        }
    }
}

/// Chart geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    /// Width and height of the square chart in pixels.
    #[serde(default = "default_chart_size")]
    pub size: u32,

    /// Gap between adjacent sectors, in radians.
    #[serde(default = "default_pad_angle")]
    pub pad_angle: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: default_chart_size(),
            pad_angle: default_pad_angle(),
        }
    }
}

/// One-shot output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Write the rendered chart to this path at startup when set.
    #[serde(default)]
    pub svg_path: Option<PathBuf>,
}

/// Observer server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Whether to run the observer after startup.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn,
    /// error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_sunrise() -> String {
    "6:07 am".to_owned()
}

fn default_sunset() -> String {
    "8:10 pm".to_owned()
}

const fn default_chart_size() -> u32 {
    600
}

const fn default_pad_angle() -> f64 {
    0.01
}

const fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}

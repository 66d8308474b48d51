//! Error types for the `hora` binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, chart output and serving.

use std::path::PathBuf;

/// Top-level error for the `hora` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: hora_core::config::ConfigError,
    },

    /// Chart rendering failed.
    #[error("render error: {source}")]
    Render {
        /// The underlying render error.
        #[from]
        source: hora_render::RenderError,
    },

    /// The chart file could not be written.
    #[error("failed to write {path}: {source}")]
    Output {
        /// Destination that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Observer server failed to start or stopped with an error.
    #[error("observer error: {message}")]
    Observer {
        /// Description of the observer failure.
        message: String,
    },
}

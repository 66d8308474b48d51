//! Error types for the `hora-render` crate.

/// Errors that can occur while writing a chart.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output target rejected a write.
    #[error("failed to write SVG output: {0}")]
    Format(#[from] std::fmt::Error),

    /// The partition does not have the ring sizes every chart needs.
    #[error("malformed partition: {ring} ring has {found} segments, expected {expected}")]
    MalformedPartition {
        /// Name of the ring.
        ring: &'static str,
        /// Segments present.
        found: usize,
        /// Segments required.
        expected: usize,
    },
}

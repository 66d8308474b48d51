//! Error types for the observer HTTP layer.
//!
//! [`ObserverError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hora_core::TimeError;
use hora_render::RenderError;

/// Errors that can occur while answering a request.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// A time-of-day query parameter could not be parsed.
    #[error("invalid {param}: {source}")]
    InvalidTime {
        /// Name of the offending query parameter.
        param: &'static str,
        /// The underlying parse failure.
        source: TimeError,
    },

    /// The chart could not be drawn.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The HTML page template failed to load or render.
    #[error("template error: {0}")]
    Template(String),
}

impl ObserverError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTime { .. } => StatusCode::BAD_REQUEST,
            Self::Render(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

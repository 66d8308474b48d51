//! Axum router construction for the observer server.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the chart and JSON can be embedded from other origins.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the observer server.
///
/// The router includes:
/// - `GET /` -- HTML form and inline chart
/// - `GET /chart.svg` -- standalone SVG chart
/// - `GET /api/partition` -- partition JSON
///
/// All three accept optional `sunrise` and `sunset` query parameters.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/chart.svg", get(handlers::chart_svg))
        .route("/api/partition", get(handlers::get_partition))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP server for Roman hour clock faces.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML page** (`GET /`) with a sunrise/sunset form and the chart
//!   rendered inline
//! - **SVG endpoint** (`GET /chart.svg`) returning the standalone chart
//! - **JSON endpoint** (`GET /api/partition`) returning the computed
//!   partition with its day/night split
//!
//! # Architecture
//!
//! The server holds only immutable defaults in [`AppState`]. Each request
//! parses its own times, recomputes the partition and renders it, so
//! concurrent requests never contend on shared data.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;

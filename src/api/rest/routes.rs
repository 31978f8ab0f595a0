//! # REST Routes
//!
//! Route definitions for the conversion engine's HTTP interface.
//!
//! # Route Structure
//!
//! ```text
//! /_healthz    GET  - Liveness check
//! /supported   GET  - Supported currency codes
//! /convert     POST - Convert an amount
//! ```

use crate::api::rest::handlers::{AppState, convert, health_check, supported_currencies};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the engine router with all endpoints and middleware.
///
/// # Arguments
///
/// * `state` - Shared application state containing the conversion engine
///   and the supported currency list
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/_healthz", get(health_check))
        .route("/supported", get(supported_currencies))
        .route("/convert", post(convert))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

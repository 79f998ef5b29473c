// Library interface for the web server - exposes modules for testing

pub mod config;
pub mod domain;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Flips
        .route("/api/flip", get(handlers::flips::flip))
        .route("/api/analyze", get(handlers::flips::analyze))
        .route("/api/compare", get(handlers::flips::compare))
        // State
        .with_state(state)
        // Middleware
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

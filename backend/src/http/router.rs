//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{landing, performance, valuation};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(landing::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(performance::POST_PERFORMANCE, post(handlers::post_performance))
        .route(valuation::POST_VALUATION, post(handlers::post_valuation));

    let body_limit = state.config.uploads.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Workbooks are uploaded whole.
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

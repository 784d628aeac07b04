//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{advice, catalog, products, system, videos};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Care advice
        .route("/api/advice/analyze", post(advice::analyze))
        .route("/api/advice/selftest", get(advice::selftest))
        // Videos
        .route("/api/videos", get(videos::search))
        .route("/api/videos/diagnostics", get(videos::diagnostics))
        // Products
        .route("/api/catalog", get(catalog::list))
        .route("/api/products", get(products::care_aids))
        .route("/api/products/search", get(products::aggregate_search))
        .route("/api/retail/search", get(products::retail_search))
        // System
        .route("/api/health", get(system::health))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
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
use crate::routes::{dataset, facets, flow, graph, records, scatter, timeline, yearly};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(facets::GET_FACETS, get(handlers::get_facets))
        .route(records::POST_RECORDS, post(handlers::filter_records))
        .route(records::POST_SEARCH, post(handlers::basic_search))
        .route(scatter::POST_SCATTER_VIEW, post(handlers::scatter_view))
        .route(graph::POST_GRAPH_VIEW, post(handlers::graph_view))
        .route(flow::POST_FLOW_VIEW, post(handlers::flow_view))
        .route(timeline::POST_TIMELINE_VIEW, post(handlers::timeline_view))
        .route(yearly::POST_YEARLY_VIEW, post(handlers::yearly_view))
        .route(dataset::POST_RELOAD_DATASET, post(handlers::reload_dataset))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

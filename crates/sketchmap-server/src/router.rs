//! Router assembly for the sketchmap HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive (the
/// capture page may be served from a different origin). TraceLayer
/// provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/sessions", post(handlers::sessions::create_session))
        .route("/sessions/{id}", delete(handlers::sessions::delete_session))
        .route("/sessions/{id}/reset", post(handlers::sessions::reset_session))
        // Graph growth and queries
        .route("/sessions/{id}/batches", post(handlers::graph::process_batch))
        .route("/sessions/{id}/snapshot", get(handlers::graph::get_snapshot))
        .route(
            "/sessions/{id}/nodes/{node_id}/position",
            put(handlers::graph::set_position),
        )
        // Stateless full-batch layout (demo rendering)
        .route("/layout", post(handlers::layout::layout_batch))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Binary entrypoint for the sketchmap HTTP server.
//!
//! Reads configuration from environment variables:
//! - `SKETCHMAP_PORT`: Server listen port (default: "3000")

use sketchmap_server::router::build_router;
use sketchmap_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("SKETCHMAP_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("sketchmap server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

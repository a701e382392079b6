//! Lexiscan API Server - Backend for legal document analysis
//!
//! Provides REST endpoints for:
//! - Document scanning (classification, completeness, validity)
//! - Canned Q&A over stored analysis results
//! - Jurisdiction rule lookups and brief search

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod extract;
mod handlers;
mod log;
mod models;
mod state;

use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        // Document analysis
        .route("/api/scan", post(handlers::scan))
        .route("/api/scan/:id", get(handlers::get_scan))
        .route("/api/qa", post(handlers::qa))
        // Reference data
        .route("/api/rules", get(handlers::rules))
        .route("/api/briefs", get(handlers::briefs))
        .route("/api/stats", get(handlers::stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexiscan_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing Lexiscan API...");
    let state = AppState::new().await?;
    let state = Arc::new(state);

    let app = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3005);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Lexiscan API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use server::config;
use server::routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use puzzle_core::Catalog;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    // Load the puzzle catalog once; embedded dataset unless overridden
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading puzzle catalog from {path}");
            let raw = std::fs::read_to_string(path).expect("Failed to read puzzle catalog");
            Catalog::from_json(&raw).expect("Failed to parse puzzle catalog")
        }
        None => Catalog::embedded().expect("Failed to load embedded puzzle catalog"),
    };
    tracing::info!("Loaded {} puzzles", catalog.len());
    let catalog = Arc::new(catalog);

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Puzzles
        .route("/api/puzzles/daily", get(routes::puzzles::get_daily_puzzle))
        .route("/api/puzzles/attempt", post(routes::puzzles::submit_attempt))
        // Shared state
        .layer(Extension(catalog))
        .layer(Extension(config.clone()))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}

//! Emberline Storefront - public catalog API.
//!
//! This binary serves the storefront browse API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON to the client-rendered storefront
//! - In-memory catalog snapshot ingested from a JSON feed at startup
//! - The browse pipeline (filter, sort, load-more window) lives in
//!   `emberline-core` and is pure; this binary is the I/O shell around it
//!
//! Persistence, auth, payments and realtime events live in the hosted
//! backend the feed is exported from; this binary never talks to them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use emberline_storefront::config::StorefrontConfig;
use emberline_storefront::routes;
use emberline_storefront::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // .env is optional; real deployments set the environment directly
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "emberline_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Build application state and start loading the catalog feed.
    // The server comes up immediately; /health/ready flips once the
    // first snapshot is in.
    let state = AppState::new(config.clone());
    state.start_feed_load();
    tracing::info!(feed = %config.catalog_feed.display(), "Catalog feed load started (async)");

    // Build router
    let app = routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness (503 until the catalog is loaded)
//!
//! # Catalog
//! GET  /shop                - Browse the full catalog (filter/sort/load-more)
//! GET  /collections         - Collection listing with product counts
//! GET  /collections/{slug}  - Browse one collection
//! GET  /products/{id}       - Product detail
//! ```

pub mod collections;
pub mod products;
pub mod shop;

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;

/// Build the storefront router.
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/shop", get(shop::index))
        .route("/collections", get(collections::index))
        .route("/collections/{slug}", get(collections::show))
        .route("/products/{id}", get(products::show))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the first catalog snapshot has
/// been loaded.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

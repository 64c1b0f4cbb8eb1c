//! Collection route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use emberline_core::{CollectionSummary, collection_summaries};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::shop::{BrowseQuery, BrowseResponse, browse_response};
use crate::state::AppState;

/// Collection listing: distinct slugs with product counts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<CollectionSummary>> {
    let snapshot = state.catalog().snapshot();
    Json(collection_summaries(&snapshot))
}

/// Browse one collection: the shop pipeline with the path slug pinned
/// into the collection filter.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<BrowseResponse>> {
    let snapshot = state.catalog().snapshot();

    let known = snapshot
        .iter()
        .any(|product| product.collections.iter().any(|s| s == &slug));
    if !known {
        return Err(AppError::NotFound(format!("collection {slug}")));
    }

    Ok(Json(browse_response(
        &snapshot,
        &query,
        Some(&slug),
        state.config(),
    )))
}

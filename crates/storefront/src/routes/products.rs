//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::ProductView;

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>> {
    let snapshot = state.catalog().snapshot();
    snapshot
        .iter()
        .find(|product| product.id.as_str() == id)
        .map(|product| Json(ProductView::from_record(product, state.config())))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

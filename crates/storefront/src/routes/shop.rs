//! Shop page route: the browse pipeline over the full catalog.

use axum::{
    Json,
    extract::{Query, State},
};
use emberline_core::{
    CatalogFacets, CatalogScope, FilterState, ProductRecord, REVEAL_STEP, RevealWindow, SortKey,
    browse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use crate::config::StorefrontConfig;
use crate::state::AppState;
use crate::views::ProductView;

/// Deserialize empty strings as None for optional price bounds.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Browse query parameters.
///
/// Garbled values degrade instead of erroring: unknown sort keys fall back
/// to featured order and unknown availability buckets are ignored.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    /// Free-text search over name and description.
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort_by: String,
    /// Comma-separated category tags.
    #[serde(default)]
    pub category: Option<String>,
    /// Comma-separated collection slugs.
    #[serde(default)]
    pub collection: Option<String>,
    /// Comma-separated availability buckets.
    #[serde(default, rename = "filter.v.availability")]
    pub availability: Option<String>,
    /// Min price filter (primary currency).
    #[serde(
        default,
        rename = "filter.v.price.gte",
        deserialize_with = "empty_string_as_none"
    )]
    pub price_gte: Option<Decimal>,
    /// Max price filter (primary currency).
    #[serde(
        default,
        rename = "filter.v.price.lte",
        deserialize_with = "empty_string_as_none"
    )]
    pub price_lte: Option<Decimal>,
    /// Legacy all/new-arrivals/bestsellers scope.
    #[serde(default)]
    pub filter_by: Option<String>,
    /// Caller-held visible count ("load more" state), default 10.
    #[serde(default)]
    pub show: Option<usize>,
}

impl BrowseQuery {
    /// Build the filter state for a catalog: observed price bounds,
    /// narrowed by whatever the query sets.
    pub(crate) fn filter_state(&self, catalog: &[ProductRecord]) -> FilterState {
        let mut filters = FilterState::for_catalog(catalog);
        filters.search = self.q.clone();
        filters.categories = csv(self.category.as_deref());
        filters.collections = csv(self.collection.as_deref());
        filters.availability = csv(self.availability.as_deref())
            .iter()
            .filter_map(|s| emberline_core::Availability::parse(s))
            .collect();
        if let Some(min) = self.price_gte {
            filters.price_range.min = min;
        }
        if let Some(max) = self.price_lte {
            filters.price_range.max = max;
        }
        if let Some(scope) = &self.filter_by {
            filters.scope = CatalogScope::parse(scope);
        }
        filters
    }
}

fn csv(list: Option<&str>) -> Vec<String> {
    list.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Browse response: the windowed slice plus everything the client needs
/// to render the "N products" counter and the load-more affordance.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub items: Vec<ProductView>,
    /// Total filtered-and-sorted count, before windowing.
    pub total: usize,
    pub shown: usize,
    pub has_more: bool,
    /// The `show` value for the next load-more request; absent when the
    /// affordance should be hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_show: Option<usize>,
    pub facets: CatalogFacets,
}

/// Run the pipeline for a query, optionally pinned to one collection.
pub(crate) fn browse_response(
    catalog: &[ProductRecord],
    query: &BrowseQuery,
    forced_collection: Option<&str>,
    config: &StorefrontConfig,
) -> BrowseResponse {
    let mut filters = query.filter_state(catalog);
    if let Some(slug) = forced_collection {
        filters.collections = vec![slug.to_string()];
    }

    let sort = SortKey::parse(&query.sort_by);
    let window = RevealWindow::with_visible(query.show.unwrap_or(REVEAL_STEP));
    let page = browse(catalog, &filters, sort, window.visible());

    let mut next = window;
    next.reveal_more(page.total);
    let has_more = page.has_more();

    BrowseResponse {
        items: page
            .items
            .iter()
            .map(|record| ProductView::from_record(record, config))
            .collect(),
        total: page.total,
        shown: page.items.len(),
        has_more,
        next_show: has_more.then(|| next.visible()),
        facets: CatalogFacets::collect(catalog),
    }
}

/// Browse the full catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Json<BrowseResponse> {
    let snapshot = state.catalog().snapshot();
    Json(browse_response(&snapshot, &query, None, state.config()))
}

#[cfg(test)]
mod tests {
    use emberline_core::Availability;

    use super::*;

    fn query() -> BrowseQuery {
        BrowseQuery {
            q: String::new(),
            sort_by: String::new(),
            category: None,
            collection: None,
            availability: None,
            price_gte: None,
            price_lte: None,
            filter_by: None,
            show: None,
        }
    }

    #[test]
    fn test_csv_splits_and_trims() {
        assert_eq!(csv(Some("winter, gift-sets ,")), vec!["winter", "gift-sets"]);
        assert_eq!(csv(Some("")), Vec::<String>::new());
        assert_eq!(csv(None), Vec::<String>::new());
    }

    #[test]
    fn test_unknown_availability_buckets_are_ignored() {
        let mut q = query();
        q.availability = Some("in_stock,back_order,low_stock".to_string());
        let filters = q.filter_state(&[]);
        assert_eq!(
            filters.availability,
            vec![Availability::InStock, Availability::LowStock]
        );
    }

    #[test]
    fn test_price_bounds_override_observed_defaults() {
        let mut q = query();
        q.price_gte = Some("12".parse().unwrap());
        q.price_lte = Some("60".parse().unwrap());
        let filters = q.filter_state(&[]);
        assert_eq!(filters.price_range.min, "12".parse().unwrap());
        assert_eq!(filters.price_range.max, "60".parse().unwrap());
    }
}

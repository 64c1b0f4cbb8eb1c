//! The catalog browse pipeline.
//!
//! Data flow is strictly linear and synchronous:
//!
//! ```text
//! catalog snapshot -> filter -> sort -> reveal window -> rendered slice
//! ```
//!
//! [`browse`] is a pure function of its inputs; recomputation happens on
//! any input change and there is no hidden state. Fetching the snapshot is
//! the caller's asynchronous boundary, not this module's.

mod filter;
mod page;
mod sort;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

pub use filter::{Availability, CatalogScope, FilterState, LOW_STOCK_MAX, PriceRange};
pub use page::{REVEAL_STEP, RevealWindow};
pub use sort::{SortKey, sort_records};

use crate::types::ProductRecord;

/// The windowed result of one browse computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    /// The first `min(visible, total)` filtered and sorted records.
    pub items: Vec<&'a ProductRecord>,
    /// Total filtered-and-sorted count, before windowing. Drives the
    /// "N products" counter and the load-more affordance.
    pub total: usize,
}

impl CatalogPage<'_> {
    /// Whether more matching products exist beyond the window.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total
    }
}

/// Run the browse pipeline: filter, stable-sort, window.
///
/// Never fails; malformed selections are the caller's concern and absent
/// record fields were defaulted at ingestion.
#[must_use]
pub fn browse<'a>(
    catalog: &'a [ProductRecord],
    filters: &FilterState,
    sort: SortKey,
    visible: usize,
) -> CatalogPage<'a> {
    let mut matched: Vec<&ProductRecord> = catalog.iter().filter(|p| filters.matches(p)).collect();
    sort_records(&mut matched, sort);
    let total = matched.len();
    matched.truncate(visible);
    CatalogPage {
        items: matched,
        total,
    }
}

/// A category tag with its product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Aggregates the shop page chrome is built from: bucket counts, price
/// bounds, category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub categories: Vec<CategoryCount>,
}

impl CatalogFacets {
    /// Collect facets over a catalog in one pass.
    #[must_use]
    pub fn collect(catalog: &[ProductRecord]) -> Self {
        let mut in_stock = 0;
        let mut low_stock = 0;
        let mut out_of_stock = 0;
        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();

        for product in catalog {
            match Availability::from_stock(product.stock_quantity) {
                Availability::InStock => in_stock += 1,
                Availability::LowStock => low_stock += 1,
                Availability::OutOfStock => out_of_stock += 1,
            }
            if let Some(category) = &product.category {
                *categories.entry(category).or_insert(0) += 1;
            }
        }

        let bounds = PriceRange::observed(catalog);

        Self {
            total: catalog.len(),
            in_stock,
            low_stock,
            out_of_stock,
            min_price: bounds.min,
            max_price: bounds.max,
            categories: categories
                .into_iter()
                .map(|(name, count)| CategoryCount {
                    name: name.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// A collection slug with its product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub slug: String,
    pub count: usize,
}

/// Distinct collection slugs across a catalog, sorted by slug.
#[must_use]
pub fn collection_summaries(catalog: &[ProductRecord]) -> Vec<CollectionSummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in catalog {
        for slug in &product.collections {
            *counts.entry(slug).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(slug, count)| CollectionSummary {
            slug: slug.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn product(name: &str, price: &str, stock: u32) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(name),
            name: name.to_string(),
            description: String::new(),
            category: None,
            collections: Vec::new(),
            price: dec(price),
            price_secondary: Decimal::ZERO,
            stock_quantity: stock,
            image: None,
            created_at: None,
            sales_count: 0,
            avg_rating: 0.0,
            is_new: false,
            is_bestseller: false,
        }
    }

    fn names(page: &CatalogPage<'_>) -> Vec<String> {
        page.items.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_browse_is_a_pure_function() {
        let catalog: Vec<ProductRecord> = (0..30)
            .map(|i| product(&format!("P{i:02}"), &format!("{}.00", 10 + i), i))
            .collect();
        let filters = FilterState::for_catalog(&catalog);

        let first = browse(&catalog, &filters, SortKey::PriceAsc, 15);
        let second = browse(&catalog, &filters, SortKey::PriceAsc, 15);
        assert_eq!(first, second);
    }

    #[test]
    fn test_price_and_availability_combine_with_and() {
        // A excluded by availability despite price; C excluded by price
        // despite availability; only B survives both.
        let catalog = vec![
            product("A", "50", 0),
            product("B", "100", 5),
            product("C", "150", 20),
        ];
        let filters = FilterState {
            price_range: PriceRange::new(dec("0"), dec("120")),
            availability: vec![Availability::InStock, Availability::LowStock],
            ..FilterState::default()
        };

        let page = browse(&catalog, &filters, SortKey::PriceDesc, REVEAL_STEP);
        assert_eq!(names(&page), vec!["B"]);
        assert_eq!(page.total, 1);
        assert!(!page.has_more());
    }

    #[test]
    fn test_rendered_length_is_min_of_visible_and_total() {
        let catalog: Vec<ProductRecord> = (0..25)
            .map(|i| product(&format!("P{i:02}"), "10.00", 5))
            .collect();
        let filters = FilterState::for_catalog(&catalog);

        for visible in [0, 3, 10, 25, 40] {
            let page = browse(&catalog, &filters, SortKey::Featured, visible);
            assert_eq!(page.items.len(), visible.min(25));
            assert_eq!(page.total, 25);
            assert_eq!(page.has_more(), visible < 25);
        }
    }

    #[test]
    fn test_browse_drives_the_reveal_window() {
        let catalog: Vec<ProductRecord> = (0..25)
            .map(|i| product(&format!("P{i:02}"), "10.00", 5))
            .collect();
        let filters = FilterState::for_catalog(&catalog);
        let mut window = RevealWindow::new();

        let page = browse(&catalog, &filters, SortKey::Featured, window.visible());
        assert_eq!(page.items.len(), 10);

        window.reveal_more(page.total);
        let page = browse(&catalog, &filters, SortKey::Featured, window.visible());
        assert_eq!(page.items.len(), 20);

        window.reveal_more(page.total);
        let page = browse(&catalog, &filters, SortKey::Featured, window.visible());
        assert_eq!(page.items.len(), 25);
        assert!(!page.has_more());
    }

    #[test]
    fn test_facets_count_buckets_and_categories() {
        let mut a = product("A", "15.00", 0);
        a.category = Some("soy".to_string());
        let mut b = product("B", "45.00", 4);
        b.category = Some("soy".to_string());
        let mut c = product("C", "30.00", 12);
        c.category = Some("beeswax".to_string());
        let d = product("D", "22.00", 10);

        let facets = CatalogFacets::collect(&[a, b, c, d]);
        assert_eq!(facets.total, 4);
        assert_eq!(facets.in_stock, 1);
        assert_eq!(facets.low_stock, 2);
        assert_eq!(facets.out_of_stock, 1);
        assert_eq!(facets.min_price, dec("15.00"));
        assert_eq!(facets.max_price, dec("45.00"));
        assert_eq!(
            facets.categories,
            vec![
                CategoryCount {
                    name: "beeswax".to_string(),
                    count: 1
                },
                CategoryCount {
                    name: "soy".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_collection_summaries_are_distinct_and_sorted() {
        let mut a = product("A", "10", 1);
        a.collections = vec!["winter".to_string(), "gift-sets".to_string()];
        let mut b = product("B", "10", 1);
        b.collections = vec!["winter".to_string()];
        let c = product("C", "10", 1);

        let summaries = collection_summaries(&[a, b, c]);
        assert_eq!(
            summaries,
            vec![
                CollectionSummary {
                    slug: "gift-sets".to_string(),
                    count: 1
                },
                CollectionSummary {
                    slug: "winter".to_string(),
                    count: 2
                },
            ]
        );
    }
}

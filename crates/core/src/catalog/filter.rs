//! Catalog filter predicates.
//!
//! A [`FilterState`] is the AND of six predicate groups; within a
//! multi-select group membership is an OR. Every group is vacuously true
//! when its selection is empty, so a default state passes the whole
//! catalog through.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductRecord;

/// Highest stock quantity still classified as low stock.
pub const LOW_STOCK_MAX: u32 = 10;

/// Stock-level bucket derived from `stock_quantity`.
///
/// The buckets are mutually exclusive; 10 units is the top of
/// `LowStock`, 11 the bottom of `InStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    LowStock,
    OutOfStock,
}

impl Availability {
    /// Classify a stock quantity.
    #[must_use]
    pub const fn from_stock(quantity: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= LOW_STOCK_MAX {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_stock" => Some(Self::InStock),
            "low_stock" => Some(Self::LowStock),
            "out_of_stock" => Some(Self::OutOfStock),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

/// Legacy storefront scope filter, ANDed with the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogScope {
    #[default]
    All,
    NewArrivals,
    Bestsellers,
}

impl CatalogScope {
    /// Parse from URL parameter value; unknown values mean no restriction.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "new-arrivals" | "new" => Self::NewArrivals,
            "bestsellers" => Self::Bestsellers,
            _ => Self::All,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NewArrivals => "new-arrivals",
            Self::Bestsellers => "bestsellers",
        }
    }
}

/// Inclusive price range in the primary currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Create a range; both bounds are inclusive.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// The bounds observed across a catalog (zero..zero when empty).
    #[must_use]
    pub fn observed(catalog: &[ProductRecord]) -> Self {
        let mut bounds: Option<(Decimal, Decimal)> = None;
        for product in catalog {
            bounds = Some(match bounds {
                None => (product.price, product.price),
                Some((min, max)) => (min.min(product.price), max.max(product.price)),
            });
        }
        let (min, max) = bounds.unwrap_or((Decimal::ZERO, Decimal::ZERO));
        Self { min, max }
    }

    /// Whether a price falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The unrestricted range.
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::MAX,
        }
    }
}

/// The user's active catalog filters.
///
/// Lifecycle: created with defaults derived from the full catalog via
/// [`FilterState::for_catalog`], mutated only by explicit user actions,
/// discarded when the view goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search over name and description.
    pub search: String,
    /// Selected category tags; empty = no restriction.
    pub categories: Vec<String>,
    /// Selected collection slugs; empty = no restriction.
    pub collections: Vec<String>,
    /// Inclusive price range in the primary currency.
    pub price_range: PriceRange,
    /// Selected availability buckets; empty = no restriction.
    pub availability: Vec<Availability>,
    /// Legacy all/new-arrivals/bestsellers scope.
    pub scope: CatalogScope,
}

impl FilterState {
    /// Default filters for a catalog: everything open, price bounds set
    /// to the observed min/max.
    #[must_use]
    pub fn for_catalog(catalog: &[ProductRecord]) -> Self {
        Self {
            price_range: PriceRange::observed(catalog),
            ..Self::default()
        }
    }

    /// Whether a product satisfies all active predicate groups.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_collection(product)
            && self.price_range.contains(product.price)
            && self.matches_availability(product)
            && self.matches_scope(product)
    }

    fn matches_search(&self, product: &ProductRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &ProductRecord) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        product
            .category
            .as_ref()
            .is_some_and(|category| self.categories.iter().any(|c| c == category))
    }

    fn matches_collection(&self, product: &ProductRecord) -> bool {
        if self.collections.is_empty() {
            return true;
        }
        product
            .collections
            .iter()
            .any(|slug| self.collections.iter().any(|c| c == slug))
    }

    fn matches_availability(&self, product: &ProductRecord) -> bool {
        if self.availability.is_empty() {
            return true;
        }
        let bucket = Availability::from_stock(product.stock_quantity);
        self.availability.contains(&bucket)
    }

    fn matches_scope(&self, product: &ProductRecord) -> bool {
        match self.scope {
            CatalogScope::All => true,
            CatalogScope::NewArrivals => product.is_new,
            CatalogScope::Bestsellers => product.is_bestseller,
        }
    }
}

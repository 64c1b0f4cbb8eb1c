//! Catalog sort strategies.

use serde::{Deserialize, Serialize};

use crate::types::ProductRecord;

/// Sort strategy for the shop and collection pages.
///
/// `Featured` is the zero case: the catalog's own order, untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Name,
    Newest,
    Popular,
    Rating,
}

impl SortKey {
    /// Parse from URL parameter value; unknown keys fall back to `Featured`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" | "price-ascending" => Self::PriceAsc,
            "price-desc" | "price-descending" => Self::PriceDesc,
            "name" => Self::Name,
            "newest" => Self::Newest,
            "popular" => Self::Popular,
            "rating" => Self::Rating,
            _ => Self::Featured,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::Rating => "rating",
        }
    }
}

/// Order a filtered slice in place.
///
/// Uses the standard library's stable sort, so products tying on the sort
/// field keep their featured order. Records without `created_at` sort
/// last under `Newest`.
pub fn sort_records(records: &mut [&ProductRecord], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceAsc => records.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Name => {
            records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Popular => records.sort_by(|a, b| b.sales_count.cmp(&a.sales_count)),
        SortKey::Rating => records.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating)),
    }
}

//! JSON view types returned to the client-rendered storefront.

use emberline_core::{Availability, ProductRecord};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::StorefrontConfig;

/// Product display data for the shop and collection pages.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub collections: Vec<String>,
    /// Formatted primary price, e.g. "$34.00".
    pub price: String,
    /// Formatted secondary price (informational).
    pub price_secondary: String,
    /// Availability bucket wire value (`in_stock` / `low_stock` / `out_of_stock`).
    pub availability: &'static str,
    pub image: Option<String>,
    pub avg_rating: f64,
    pub is_new: bool,
    pub is_bestseller: bool,
}

impl ProductView {
    /// Build a view from a record using the configured currency symbols.
    #[must_use]
    pub fn from_record(record: &ProductRecord, config: &StorefrontConfig) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            collections: record.collections.clone(),
            price: format_price(record.price, &config.currency),
            price_secondary: format_price(record.price_secondary, &config.currency_secondary),
            availability: Availability::from_stock(record.stock_quantity).as_str(),
            image: record.image.clone(),
            avg_rating: record.avg_rating,
            is_new: record.is_new,
            is_bestseller: record.is_bestseller,
        }
    }
}

/// Format a price with two decimal places and the currency symbol.
#[must_use]
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

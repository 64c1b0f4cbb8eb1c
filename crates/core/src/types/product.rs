//! Product records and feed-row ingestion.
//!
//! The hosted backend exports products with most fields optional and names
//! duplicated per display language. All default resolution and locale
//! fallback happens once, in [`RawProduct::into_record`], so the browse
//! pipeline only ever sees fully-resolved [`ProductRecord`]s.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque product identifier minted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from its backend string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A fully-resolved product snapshot row.
///
/// Every field is already defaulted and localized; the pipeline never
/// mutates a record, it only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Backend product ID.
    pub id: ProductId,
    /// Display name, resolved to the active display language.
    pub name: String,
    /// Long-form description, resolved to the active display language.
    pub description: String,
    /// Optional category tag.
    pub category: Option<String>,
    /// Collection slugs this product belongs to (possibly empty).
    pub collections: Vec<String>,
    /// Price in the primary currency, never negative.
    pub price: Decimal,
    /// Price in the secondary currency (informational only).
    pub price_secondary: Decimal,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Primary image reference, if any.
    pub image: Option<String>,
    /// Creation timestamp; absent for legacy rows.
    pub created_at: Option<DateTime<Utc>>,
    /// Lifetime units sold.
    pub sales_count: u32,
    /// Average review rating (0 when unreviewed).
    pub avg_rating: f64,
    /// New-arrival flag.
    pub is_new: bool,
    /// Bestseller flag.
    pub is_bestseller: bool,
}

/// A product row as exported by the backend feed.
///
/// Everything beyond `id` and `name` is optional; `name_i18n` and
/// `description_i18n` carry per-locale overrides keyed by language code.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_i18n: HashMap<String, String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_i18n: HashMap<String, String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_secondary: Option<Decimal>,
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sales_count: Option<u32>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub is_bestseller: Option<bool>,
}

impl RawProduct {
    /// Resolve a feed row into a [`ProductRecord`] for the given locale.
    ///
    /// Locale lookup falls back to the row's base `name`/`description`.
    /// Missing numerics default to zero, missing flags to false, and
    /// negative prices are clamped to zero.
    #[must_use]
    pub fn into_record(self, locale: &str) -> ProductRecord {
        let name = self
            .name_i18n
            .get(locale)
            .cloned()
            .unwrap_or(self.name);
        let description = self
            .description_i18n
            .get(locale)
            .cloned()
            .or(self.description)
            .unwrap_or_default();

        ProductRecord {
            id: ProductId::new(self.id),
            name,
            description,
            category: self.category,
            collections: self.collections,
            price: self.price.unwrap_or_default().max(Decimal::ZERO),
            price_secondary: self.price_secondary.unwrap_or_default().max(Decimal::ZERO),
            stock_quantity: self.stock_quantity.unwrap_or(0),
            image: self.image,
            created_at: self.created_at,
            sales_count: self.sales_count.unwrap_or(0),
            avg_rating: self.avg_rating.unwrap_or(0.0),
            is_new: self.is_new.unwrap_or(false),
            is_bestseller: self.is_bestseller.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_into_record_applies_defaults() {
        let raw: RawProduct = serde_json::from_str(r#"{"id": "c-001"}"#).unwrap();
        let record = raw.into_record("en");

        assert_eq!(record.id.as_str(), "c-001");
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.price, Decimal::ZERO);
        assert_eq!(record.stock_quantity, 0);
        assert_eq!(record.sales_count, 0);
        assert!((record.avg_rating - 0.0).abs() < f64::EPSILON);
        assert!(!record.is_new);
        assert!(!record.is_bestseller);
        assert!(record.created_at.is_none());
        assert!(record.collections.is_empty());
    }

    #[test]
    fn test_into_record_resolves_locale_with_fallback() {
        let raw: RawProduct = serde_json::from_str(
            r#"{
                "id": "c-002",
                "name": "Pine Forest",
                "name_i18n": {"de": "Kiefernwald"},
                "description": "A resinous winter candle."
            }"#,
        )
        .unwrap();

        let de = raw.clone().into_record("de");
        assert_eq!(de.name, "Kiefernwald");
        assert_eq!(de.description, "A resinous winter candle.");

        let fr = raw.into_record("fr");
        assert_eq!(fr.name, "Pine Forest");
    }

    #[test]
    fn test_into_record_clamps_negative_price() {
        let raw: RawProduct =
            serde_json::from_str(r#"{"id": "c-003", "price": "-4.50"}"#).unwrap();
        let record = raw.into_record("en");
        assert_eq!(record.price, Decimal::ZERO);
    }

    #[test]
    fn test_into_record_parses_full_row() {
        let raw: RawProduct = serde_json::from_str(
            r#"{
                "id": "c-004",
                "name": "Amber Noir",
                "category": "soy",
                "collections": ["winter", "gift-sets"],
                "price": "34.00",
                "price_secondary": "31.50",
                "stock_quantity": 7,
                "created_at": "2026-01-15T12:00:00Z",
                "sales_count": 120,
                "avg_rating": 4.6,
                "is_bestseller": true
            }"#,
        )
        .unwrap();
        let record = raw.into_record("en");

        assert_eq!(record.price, dec("34.00"));
        assert_eq!(record.collections, vec!["winter", "gift-sets"]);
        assert_eq!(record.stock_quantity, 7);
        assert!(record.is_bestseller);
        assert!(!record.is_new);
        assert!(record.created_at.is_some());
    }
}

//! Catalog feed loading and the shared snapshot store.
//!
//! The hosted backend exports the catalog as a JSON array of loosely-shaped
//! product rows. The app starts immediately with no snapshot; a startup task
//! loads and ingests the feed, then swaps the snapshot in atomically.
//! Handlers always see a consistent, immutable snapshot.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use emberline_core::{ProductRecord, RawProduct};
use thiserror::Error;

/// Feed loading errors.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read catalog feed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog feed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load and ingest the JSON product feed at `path`.
///
/// Every row is resolved for `locale` in one pass; the pipeline never sees
/// raw rows.
///
/// # Errors
///
/// Returns [`FeedError`] when the file cannot be read or parsed.
pub fn load_feed(path: &Path, locale: &str) -> Result<Vec<ProductRecord>, FeedError> {
    let raw = fs::read_to_string(path)?;
    let rows: Vec<RawProduct> = serde_json::from_str(&raw)?;
    Ok(rows.into_iter().map(|row| row.into_record(locale)).collect())
}

/// The shared catalog snapshot.
///
/// Starts empty and is populated by the startup feed load. `replace` models
/// the "backing store notified of a change" boundary: callers hand in a
/// fresh record list and subsequent `snapshot` calls see it; in-flight
/// requests keep the snapshot they already cloned.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Option<Arc<Vec<ProductRecord>>>>>,
}

impl CatalogStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records (used by tests).
    #[must_use]
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let store = Self::new();
        store.replace(records);
        store
    }

    /// Whether the first snapshot has been loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.read().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// The current snapshot; empty until the first load completes.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<ProductRecord>> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Swap in a fresh snapshot.
    pub fn replace(&self, records: Vec<ProductRecord>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(Arc::new(records));
        }
    }
}

#[cfg(test)]
mod tests {
    use emberline_core::ProductId;
    use rust_decimal::Decimal;

    use super::*;

    fn product(name: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(name),
            name: name.to_string(),
            description: String::new(),
            category: None,
            collections: Vec::new(),
            price: Decimal::ZERO,
            price_secondary: Decimal::ZERO,
            stock_quantity: 0,
            image: None,
            created_at: None,
            sales_count: 0,
            avg_rating: 0.0,
            is_new: false,
            is_bestseller: false,
        }
    }

    #[test]
    fn test_store_starts_empty_and_unready() {
        let store = CatalogStore::new();
        assert!(!store.is_ready());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_replace_swaps_the_snapshot_in() {
        let store = CatalogStore::new();
        let held = store.snapshot();

        store.replace(vec![product("Amber Noir")]);
        assert!(store.is_ready());
        assert_eq!(store.snapshot().len(), 1);

        // A snapshot cloned before the swap is unaffected.
        assert!(held.is_empty());
    }

    #[test]
    fn test_load_feed_ingests_rows() {
        let dir = std::env::temp_dir();
        let path = dir.join("emberline-feed-test.json");
        fs::write(
            &path,
            r#"[
                {"id": "c-1", "name": "Pine Forest", "price": "28.00", "stock_quantity": 12},
                {"id": "c-2", "name_i18n": {"en": "Hearth"}}
            ]"#,
        )
        .unwrap();

        let records = load_feed(&path, "en").unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Pine Forest");
        assert_eq!(records[0].stock_quantity, 12);
        assert_eq!(records[1].name, "Hearth");
        assert_eq!(records[1].price, Decimal::ZERO);
    }

    #[test]
    fn test_load_feed_reports_parse_errors() {
        let dir = std::env::temp_dir();
        let path = dir.join("emberline-feed-bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_feed(&path, "en").unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, FeedError::Parse(_)));
    }
}

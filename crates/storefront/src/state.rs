//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::feed::{self, CatalogStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the shared catalog snapshot.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
}

impl AppState {
    /// Create application state with an empty catalog store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, CatalogStore::new())
    }

    /// Create application state around an existing catalog store.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// The storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The shared catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Start loading the catalog feed in the background.
    ///
    /// The server starts serving immediately; the snapshot is swapped in
    /// when the load completes. A failed load is logged and the store stays
    /// unready, which `/health/ready` reports as 503.
    pub fn start_feed_load(&self) {
        let catalog = self.inner.catalog.clone();
        let path = self.inner.config.catalog_feed.clone();
        let locale = self.inner.config.locale.clone();

        tokio::task::spawn_blocking(move || match feed::load_feed(&path, &locale) {
            Ok(records) => {
                tracing::info!(products = records.len(), "Catalog feed loaded");
                catalog.replace(records);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load catalog feed: {e}");
            }
        });
    }
}

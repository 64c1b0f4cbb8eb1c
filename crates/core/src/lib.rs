//! Emberline Core - domain types and the catalog browse pipeline.
//!
//! This crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows the browse
//! pipeline to be tested without a rendering framework or a backend.
//!
//! # Modules
//!
//! - [`types`] - Product records and the raw feed shape they are ingested from
//! - [`catalog`] - The browse pipeline: filter, sort, reveal-window, facets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{
    Availability, CatalogFacets, CatalogPage, CatalogScope, CategoryCount, CollectionSummary,
    FilterState, PriceRange, REVEAL_STEP, RevealWindow, SortKey, browse, collection_summaries,
};
pub use types::{ProductId, ProductRecord, RawProduct};

//! Core types for Emberline.
//!
//! This module provides the product snapshot consumed by the browse
//! pipeline, plus the loosely-shaped feed row it is ingested from.

pub mod product;

pub use product::{ProductId, ProductRecord, RawProduct};

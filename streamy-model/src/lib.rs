//! Core data model definitions shared across Streamy crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod ids;
pub mod media_type;
pub mod prelude;
pub mod section;
#[cfg(feature = "serde")]
pub mod wire;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{CatalogItem, CatalogResults, RatingBand};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CatalogId, SectionKey, SlotKey};
pub use media_type::MediaKind;
pub use section::{FocusTarget, Section};
#[cfg(feature = "serde")]
pub use wire::{SearchResponse, SearchResult};

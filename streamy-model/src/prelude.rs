//! Player/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in streamy-player or other presentation layers.

pub use super::catalog::{CatalogItem, CatalogResults, RatingBand};
pub use super::ids::{CatalogId, SectionKey, SlotKey};
pub use super::media_type::MediaKind;
pub use super::section::{FocusTarget, Section};

//! Horizontally scrolling home rows and the focus that drives them.

pub mod focus;
pub mod registry;
pub mod types;

pub use focus::{FocusScrollCoordinator, FocusState};
pub use registry::ScrollRegistry;
pub use types::{Direction, EmphasisStyle, RowGeometry, ScrollCommand};

//! Shared types for the home rows

use std::time::Duration;
use streamy_config::FocusConfig;
use streamy_model::prelude::SectionKey;

/// Horizontal layout of a row of fixed-width cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub item_width: f32,
    pub item_gap: f32,
}

impl RowGeometry {
    pub fn new(item_width: f32, item_gap: f32) -> Self {
        Self {
            item_width,
            item_gap,
        }
    }

    pub fn stride(&self) -> f32 {
        self.item_width + self.item_gap
    }

    /// Scroll offset that brings `index` to the row's leading edge. Not
    /// clamped to the row's content width.
    pub fn offset_for(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }
}

impl From<&FocusConfig> for RowGeometry {
    fn from(config: &FocusConfig) -> Self {
        Self::new(config.item_width, config.item_gap)
    }
}

/// Section header emphasis animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisStyle {
    pub emphasized_scale: f32,
    pub deemphasized_scale: f32,
    pub delay: Duration,
    pub duration: Duration,
}

impl From<&FocusConfig> for EmphasisStyle {
    fn from(config: &FocusConfig) -> Self {
        Self {
            emphasized_scale: config.emphasized_scale,
            deemphasized_scale: config.deemphasized_scale,
            delay: config.emphasis_delay(),
            duration: config.emphasis_duration(),
        }
    }
}

/// Directional input from a remote or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Scroll request for one row, for renderers that drive their own
/// scrollables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCommand {
    pub section: SectionKey,
    pub offset: f32,
    pub animated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_index_times_stride() {
        let geometry = RowGeometry::from(&FocusConfig::default());
        assert_eq!(geometry.stride(), 332.0);
        assert_eq!(geometry.offset_for(0), 0.0);
        assert_eq!(geometry.offset_for(1), 332.0);
        assert_eq!(geometry.offset_for(5), 1660.0);
    }
}

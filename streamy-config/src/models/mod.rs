use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants;

/// Top-level home screen configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamyConfig {
    pub catalog: CatalogConfig,
    pub spotlight: SpotlightConfig,
    pub focus: FocusConfig,
    /// Optional TOML/JSON feed plan replacing the built-in section layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_plan_path: Option<PathBuf>,
}

/// Where and how to reach the catalog service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base endpoint, e.g. `http://localhost:8001`. Paths are appended as-is.
    pub base_url: String,
    /// Per-request transport timeout (ms). A hung request still blocks the
    /// batch join until this expires.
    pub request_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: constants::catalog::BASE_URL.to_string(),
            request_timeout_ms: constants::catalog::REQUEST_TIMEOUT_MS,
        }
    }
}

impl CatalogConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Hero rotation cadence and transition timings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpotlightConfig {
    /// Time between automatic advances (ms).
    pub period_ms: u64,
    /// Outgoing fade duration (ms).
    pub fade_out_ms: u64,
    /// Incoming fade + slide duration (ms).
    pub fade_in_ms: u64,
    /// Horizontal start offset of the incoming item.
    pub slide_offset: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            period_ms: constants::spotlight::PERIOD_MS,
            fade_out_ms: constants::spotlight::FADE_OUT_MS,
            fade_in_ms: constants::spotlight::FADE_IN_MS,
            slide_offset: constants::spotlight::SLIDE_OFFSET,
        }
    }
}

impl SpotlightConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

/// Row geometry and section-emphasis animation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FocusConfig {
    pub item_width: f32,
    pub item_gap: f32,
    /// Header scale of the section holding focus.
    pub emphasized_scale: f32,
    /// Header scale of every other section.
    pub deemphasized_scale: f32,
    pub emphasis_delay_ms: u64,
    pub emphasis_duration_ms: u64,
    /// Duration of the animated scroll-into-view (ms).
    pub scroll_duration_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            item_width: constants::focus::ITEM_WIDTH,
            item_gap: constants::focus::ITEM_GAP,
            emphasized_scale: constants::focus::EMPHASIZED_SCALE,
            deemphasized_scale: constants::focus::DEEMPHASIZED_SCALE,
            emphasis_delay_ms: constants::focus::EMPHASIS_DELAY_MS,
            emphasis_duration_ms: constants::focus::EMPHASIS_DURATION_MS,
            scroll_duration_ms: constants::focus::SCROLL_DURATION_MS,
        }
    }
}

impl FocusConfig {
    pub fn emphasis_delay(&self) -> Duration {
        Duration::from_millis(self.emphasis_delay_ms)
    }

    pub fn emphasis_duration(&self) -> Duration {
        Duration::from_millis(self.emphasis_duration_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }
}

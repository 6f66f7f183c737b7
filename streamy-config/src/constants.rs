//! Default values and environment variable names.

/// Environment variable names understood by the loader.
pub mod env {
    pub const CONFIG_PATH: &str = "STREAMY_CONFIG_PATH";
    pub const CONFIG_JSON: &str = "STREAMY_CONFIG_JSON";
    pub const API_URL: &str = "STREAMY_API_URL";
    pub const REQUEST_TIMEOUT: &str = "STREAMY_REQUEST_TIMEOUT";
    pub const SPOTLIGHT_PERIOD: &str = "STREAMY_SPOTLIGHT_PERIOD";
    pub const FEED_PLAN_PATH: &str = "STREAMY_FEED_PLAN_PATH";
}

/// Config files probed (relative to the working directory) when no
/// explicit path is given.
pub const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "streamy.toml",
    "streamy.json",
    "config/streamy.toml",
    "config/streamy.json",
];

pub mod catalog {
    pub const BASE_URL: &str = "http://localhost:8001";
    /// Transport-level timeout per request; the feed batch has no timeout
    /// of its own.
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
}

pub mod spotlight {
    pub const PERIOD_MS: u64 = 6_000;
    pub const FADE_OUT_MS: u64 = 300;
    pub const FADE_IN_MS: u64 = 400;
    /// Horizontal offset the incoming item slides in from.
    pub const SLIDE_OFFSET: f32 = 50.0;
}

pub mod focus {
    /// Landscape card width used by the home rows.
    pub const ITEM_WIDTH: f32 = 320.0;
    pub const ITEM_GAP: f32 = 12.0;
    pub const EMPHASIZED_SCALE: f32 = 1.2;
    pub const DEEMPHASIZED_SCALE: f32 = 0.7;
    pub const EMPHASIS_DELAY_MS: u64 = 50;
    pub const EMPHASIS_DURATION_MS: u64 = 300;
    pub const SCROLL_DURATION_MS: u64 = 180;
}

//! Guard rails applied after all configuration layers are merged.

use thiserror::Error;
use url::Url;

use crate::models::StreamyConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("catalog.base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("catalog.base_url {0:?} must use http or https")]
    UnsupportedScheme(String),
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f32 },
}

fn require_positive_ms(
    field: &'static str,
    value: u64,
) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDuration { field });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidNumber { field, value });
    }
    Ok(())
}

impl StreamyConfig {
    /// Reject settings that would leave the screen without a usable
    /// catalog endpoint or with degenerate timers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let raw = self.catalog.base_url.trim();
        let url = Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(raw.to_string()));
        }

        require_positive_ms(
            "catalog.request_timeout_ms",
            self.catalog.request_timeout_ms,
        )?;
        require_positive_ms("spotlight.period_ms", self.spotlight.period_ms)?;
        require_positive_ms("spotlight.fade_out_ms", self.spotlight.fade_out_ms)?;
        require_positive_ms("spotlight.fade_in_ms", self.spotlight.fade_in_ms)?;
        require_non_negative("spotlight.slide_offset", self.spotlight.slide_offset)?;

        require_non_negative("focus.item_width", self.focus.item_width)?;
        require_non_negative("focus.item_gap", self.focus.item_gap)?;
        require_non_negative("focus.emphasized_scale", self.focus.emphasized_scale)?;
        require_non_negative(
            "focus.deemphasized_scale",
            self.focus.deemphasized_scale,
        )?;
        require_positive_ms(
            "focus.emphasis_duration_ms",
            self.focus.emphasis_duration_ms,
        )?;
        require_positive_ms("focus.scroll_duration_ms", self.focus.scroll_duration_ms)?;
        Ok(())
    }
}

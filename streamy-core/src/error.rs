use thiserror::Error;

use crate::feed::PlanError;

/// Failure of a single catalog request.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("invalid payload from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Timeouts surface as transport errors; callers may want to tell them
    /// apart in logs.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Transport { source, .. } if source.is_timeout())
    }
}

/// Failure of a whole feed load.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Every lookup in the batch failed; carries the last error seen.
    #[error("catalog unreachable: all {attempted} lookups failed (last error: {source})")]
    Unavailable {
        attempted: usize,
        #[source]
        source: CatalogError,
    },

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

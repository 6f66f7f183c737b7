//! Access to the remote catalog search API.
//!
//! [`CatalogClient`] is the seam the feed composer depends on; the shipped
//! implementation is [`HttpCatalogClient`]. Tests substitute a fake.

mod http;

pub use http::HttpCatalogClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use streamy_model::{CatalogResults, MediaKind};

use crate::error::Result;

/// Which search endpoint a lookup goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupKind {
    #[serde(rename = "movie", alias = "movies")]
    Movie,
    #[serde(rename = "tv", alias = "tv-shows", alias = "series")]
    TvShow,
    #[serde(rename = "multi", alias = "search")]
    Multi,
}

impl LookupKind {
    /// Media kind assumed for hits that do not carry their own.
    pub fn implied_kind(self) -> MediaKind {
        match self {
            LookupKind::Movie | LookupKind::Multi => MediaKind::Movie,
            LookupKind::TvShow => MediaKind::Series,
        }
    }

    /// First path segment of the endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            LookupKind::Movie => "movies",
            LookupKind::TvShow => "tv-shows",
            LookupKind::Multi => "search",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Keyed lookups against the catalog. Every call either yields an ordered
/// result page or fails on its own; calls are independent of each other.
#[async_trait]
pub trait CatalogClient: Send + Sync + fmt::Debug {
    async fn search_movies(&self, query: &str) -> Result<CatalogResults>;

    async fn search_tv_shows(&self, query: &str) -> Result<CatalogResults>;

    /// Mixed search across movies and series. Non-title hits are dropped.
    async fn search_multi(&self, query: &str) -> Result<CatalogResults>;

    /// Cheap reachability probe.
    async fn health(&self) -> Result<()>;

    /// Dispatch on [`LookupKind`].
    async fn lookup(&self, kind: LookupKind, query: &str) -> Result<CatalogResults> {
        match kind {
            LookupKind::Movie => self.search_movies(query).await,
            LookupKind::TvShow => self.search_tv_shows(query).await,
            LookupKind::Multi => self.search_multi(query).await,
        }
    }
}

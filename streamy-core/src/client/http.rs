use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use streamy_config::CatalogConfig;
use streamy_model::{CatalogResults, SearchResponse};

use super::{CatalogClient, LookupKind};
use crate::error::{CatalogError, Result};

/// reqwest-backed [`CatalogClient`].
///
/// The only timeout is the transport's per-request timeout; a hung request
/// holds up whatever batch is waiting on it until then.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for HttpCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        let normalized = format!("http://{trimmed}");
        warn!(
            "[CatalogClient] Normalized base URL from '{}' to '{}'",
            raw, normalized
        );
        normalized
    }
}

/// Pull `message` out of an error envelope, if the body is one.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

impl HttpCatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Client)?;

        info!(
            "[CatalogClient] Creating catalog client with base URL: {} (timeout {:?})",
            base_url, timeout
        );

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn search_path(kind: LookupKind, query: &str) -> String {
        format!(
            "/{}/{}",
            kind.path_segment(),
            urlencoding::encode(query.trim())
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("[CatalogClient] GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|source| {
            CatalogError::Transport {
                endpoint: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| {
            CatalogError::Transport {
                endpoint: path.to_string(),
                source,
            }
        })?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unexpected status").to_string()
            });
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    async fn search(&self, kind: LookupKind, query: &str) -> Result<CatalogResults> {
        let path = Self::search_path(kind, query);
        let response: SearchResponse = self.get_json(&path).await?;

        if response.status != "success" {
            let message = response
                .message
                .unwrap_or_else(|| format!("status {:?}", response.status));
            return Err(CatalogError::Unavailable(format!("{path}: {message}")));
        }

        let results = response.into_results(kind.implied_kind());
        debug!(
            "[CatalogClient] {} {:?} -> {} results",
            kind, query, results.count
        );
        Ok(results)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search_movies(&self, query: &str) -> Result<CatalogResults> {
        self.search(LookupKind::Movie, query).await
    }

    async fn search_tv_shows(&self, query: &str) -> Result<CatalogResults> {
        self.search(LookupKind::TvShow, query).await
    }

    async fn search_multi(&self, query: &str) -> Result<CatalogResults> {
        self.search(LookupKind::Multi, query).await
    }

    async fn health(&self) -> Result<()> {
        let _: serde_json::Value = self.get_json("/health").await?;
        Ok(())
    }
}

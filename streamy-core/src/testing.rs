//! In-memory [`CatalogClient`] for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use streamy_model::{CatalogId, CatalogItem, CatalogResults, MediaKind};

use crate::client::{CatalogClient, LookupKind};
use crate::error::{CatalogError, Result};
use crate::feed::FeedPlan;

type QueryKey = (LookupKind, String);

#[derive(Debug, Default)]
struct FakeState {
    responses: HashMap<QueryKey, Vec<CatalogItem>>,
    failures: HashSet<QueryKey>,
    delays: HashMap<QueryKey, Duration>,
    fail_all: bool,
    calls: Vec<QueryKey>,
}

/// Scripted catalog. Unknown queries return an empty page.
#[derive(Debug, Default)]
pub struct FakeCatalogClient {
    state: Mutex<FakeState>,
}

/// A fully populated item for fixtures.
pub fn sample_item(id: u64, kind: MediaKind, title: &str) -> CatalogItem {
    CatalogItem {
        overview: format!("{title} overview"),
        poster: Some(format!("https://images.example/{id}/poster.jpg")),
        backdrop: Some(format!("https://images.example/{id}/backdrop.jpg")),
        rating: 7.5,
        release_date: Some("2010-07-15".to_string()),
        ..CatalogItem::new(CatalogId::new(id, kind), title)
    }
}

fn title_case(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl FakeCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every lookup of `plan` with one sample item titled after its
    /// query. Ids follow plan order starting at 1.
    pub fn for_plan(plan: &FeedPlan) -> Self {
        let fake = Self::new();
        for (index, lookup) in plan.lookups.iter().enumerate() {
            let item = sample_item(
                index as u64 + 1,
                lookup.kind.implied_kind(),
                &title_case(&lookup.query),
            );
            fake.set_results(lookup.kind, &lookup.query, vec![item]);
        }
        fake
    }

    pub fn with_results(self, kind: LookupKind, query: &str, items: Vec<CatalogItem>) -> Self {
        self.set_results(kind, query, items);
        self
    }

    pub fn with_failure(self, kind: LookupKind, query: &str) -> Self {
        self.state.lock().failures.insert((kind, query.to_string()));
        self
    }

    pub fn with_delay(self, kind: LookupKind, query: &str, delay: Duration) -> Self {
        self.state.lock().delays.insert((kind, query.to_string()), delay);
        self
    }

    pub fn set_results(&self, kind: LookupKind, query: &str, items: Vec<CatalogItem>) {
        self.state.lock().responses.insert((kind, query.to_string()), items);
    }

    /// Make every request fail (or stop failing).
    pub fn set_fail_all(&self, fail_all: bool) {
        self.state.lock().fail_all = fail_all;
    }

    pub fn calls(&self) -> Vec<(LookupKind, String)> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self, kind: LookupKind, query: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|(k, q)| *k == kind && q == query)
            .count()
    }

    async fn respond(&self, kind: LookupKind, query: &str) -> Result<CatalogResults> {
        let key = (kind, query.to_string());
        let delay = {
            let mut state = self.state.lock();
            state.calls.push(key.clone());
            state.delays.get(&key).copied()
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock();
        if state.fail_all || state.failures.contains(&key) {
            return Err(CatalogError::Unavailable(format!(
                "scripted failure for {kind} {query:?}"
            )));
        }
        let items = state.responses.get(&key).cloned().unwrap_or_default();
        Ok(CatalogResults::new(query, items))
    }
}

#[async_trait]
impl CatalogClient for FakeCatalogClient {
    async fn search_movies(&self, query: &str) -> Result<CatalogResults> {
        self.respond(LookupKind::Movie, query).await
    }

    async fn search_tv_shows(&self, query: &str) -> Result<CatalogResults> {
        self.respond(LookupKind::TvShow, query).await
    }

    async fn search_multi(&self, query: &str) -> Result<CatalogResults> {
        self.respond(LookupKind::Multi, query).await
    }

    async fn health(&self) -> Result<()> {
        if self.state.lock().fail_all {
            return Err(CatalogError::Unavailable("scripted outage".to_string()));
        }
        Ok(())
    }
}

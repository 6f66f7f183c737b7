use futures::future::join_all;
use log::{debug, info, warn};
use std::sync::Arc;
use streamy_model::{CatalogItem, SlotKey};

use super::{Feed, FeedPlan, LookupSpec, PlanError, SlotTable};
use crate::client::CatalogClient;
use crate::error::{CatalogError, FeedError};

/// Result of one slot's lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(CatalogItem),
    Empty,
    Failed(CatalogError),
}

/// Tally of a settled batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub found: usize,
    pub empty: usize,
    pub failed: usize,
}

impl BatchReport {
    /// Every lookup errored. Zero-result lookups do not count as failures.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failed == self.attempted
    }
}

struct SettledBatch {
    table: SlotTable,
    report: BatchReport,
    last_error: Option<CatalogError>,
}

impl SettledBatch {
    fn into_result(self) -> Result<(SlotTable, BatchReport), FeedError> {
        if self.report.all_failed()
            && let Some(source) = self.last_error
        {
            return Err(FeedError::Unavailable {
                attempted: self.report.attempted,
                source,
            });
        }
        Ok((self.table, self.report))
    }
}

/// Issues a plan's lookups concurrently and folds the results into a
/// [`Feed`].
///
/// Results are matched to slots by key, so network completion order never
/// affects placement. A failed lookup only removes its own slot.
#[derive(Debug, Clone)]
pub struct FeedComposer {
    client: Arc<dyn CatalogClient>,
    plan: Arc<FeedPlan>,
}

impl FeedComposer {
    pub fn new(client: Arc<dyn CatalogClient>, plan: FeedPlan) -> Result<Self, PlanError> {
        plan.validate()?;
        Ok(Self {
            client,
            plan: Arc::new(plan),
        })
    }

    pub fn plan(&self) -> &FeedPlan {
        &self.plan
    }

    /// Run the whole batch and build hero candidates plus every section.
    ///
    /// Hero and section slots share one lookup table; each declared lookup
    /// is issued exactly once.
    pub async fn compose_feed(&self) -> Result<Feed, FeedError> {
        let (table, report) = self.run_batch(&self.plan.lookups).await.into_result()?;
        let feed = self.plan.fold(&table);
        info!(
            "[FeedComposer] Feed composed: {} hero candidates, {} sections ({} ok / {} empty / {} failed)",
            feed.hero.len(),
            feed.sections.len(),
            report.found,
            report.empty,
            report.failed
        );
        Ok(feed)
    }

    /// Run only the lookups behind hero slots.
    pub async fn compose_hero(&self) -> Result<Vec<CatalogItem>, FeedError> {
        let lookups: Vec<LookupSpec> = self.plan.hero_lookups().cloned().collect();
        let (table, report) = self.run_batch(&lookups).await.into_result()?;
        let hero: Vec<CatalogItem> = self
            .plan
            .hero
            .iter()
            .filter_map(|slot| table.get(slot).cloned())
            .collect();
        info!(
            "[FeedComposer] Hero composed: {} of {} candidates",
            hero.len(),
            report.attempted
        );
        Ok(hero)
    }

    async fn run_batch(&self, lookups: &[LookupSpec]) -> SettledBatch {
        let pending = lookups.iter().map(|spec| async move {
            debug!(
                "[FeedComposer] Lookup `{}`: {} {:?}",
                spec.slot, spec.kind, spec.query
            );
            let outcome = match self.client.lookup(spec.kind, &spec.query).await {
                Ok(results) => match results.into_first() {
                    Some(item) => LookupOutcome::Found(item),
                    None => LookupOutcome::Empty,
                },
                Err(err) => LookupOutcome::Failed(err),
            };
            (spec.slot.clone(), outcome)
        });

        let settled: Vec<(SlotKey, LookupOutcome)> = join_all(pending).await;

        let mut batch = SettledBatch {
            table: SlotTable::default(),
            report: BatchReport {
                attempted: settled.len(),
                ..BatchReport::default()
            },
            last_error: None,
        };

        for (slot, outcome) in settled {
            match outcome {
                LookupOutcome::Found(item) => {
                    batch.report.found += 1;
                    batch.table.insert(slot, item);
                }
                LookupOutcome::Empty => {
                    batch.report.empty += 1;
                    debug!("[FeedComposer] Lookup `{}` returned no results", slot);
                }
                LookupOutcome::Failed(err) => {
                    batch.report.failed += 1;
                    warn!("[FeedComposer] Lookup `{}` failed: {}", slot, err);
                    batch.last_error = Some(err);
                }
            }
        }

        if batch.report.all_failed() {
            log::error!(
                "[FeedComposer] All {} lookups failed; catalog unreachable",
                batch.report.attempted
            );
        }

        batch
    }
}

//! Wiring and the event loop.

use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use streamy_config::StreamyConfig;
use streamy_core::{CatalogClient, FeedComposer, FeedPlan, HttpCatalogClient};
use tokio::time::Instant;

use crate::domains::home::{HomeScreen, LoadState, Message};
use crate::input;

/// Feed plan from `feed_plan_path`, or the built-in layout.
pub fn resolve_plan(config: &StreamyConfig) -> anyhow::Result<FeedPlan> {
    match &config.feed_plan_path {
        Some(path) => {
            log::info!("[App] Using feed plan {}", path.display());
            FeedPlan::load_from_file(path)
                .with_context(|| format!("loading feed plan {}", path.display()))
        }
        None => Ok(FeedPlan::streamy_default()),
    }
}

/// Build the production client, check the catalog is up and run the home
/// screen until `shutdown` resolves or the remote quits.
pub async fn launch<F>(config: StreamyConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let client = Arc::new(HttpCatalogClient::from_config(&config.catalog)?);
    if let Err(err) = client.health().await {
        // not fatal: the feed load reports its own failure with a retry
        log::warn!("[App] Catalog health check failed: {}", err);
    }

    let composer = FeedComposer::new(client, resolve_plan(&config)?)?;
    let screen = HomeScreen::new(composer, &config);
    let _remote = input::spawn_stdin_reader(screen.sender());

    run(screen, shutdown).await;
    Ok(())
}

/// Drive `screen` on the current task: start the first load, then handle
/// messages until shutdown or teardown.
pub async fn run<F>(mut screen: HomeScreen, shutdown: F) -> HomeScreen
where
    F: Future<Output = ()>,
{
    let mut reporter = Reporter::default();
    screen.update(Message::LoadFeed);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!("[App] Shutdown requested");
                break;
            }
            message = screen.recv() => {
                let Some(message) = message else { break };
                log::trace!("[App] {}", message.name());
                screen.update(message);
                reporter.report(&mut screen);
                if screen.is_torn_down() {
                    break;
                }
            }
        }
    }

    screen.teardown();
    screen
}

/// Logs what a renderer would draw differently after each update.
#[derive(Debug, Default)]
struct Reporter {
    load_state: Option<LoadState>,
    spotlight: Option<(u64, usize)>,
}

impl Reporter {
    fn report(&mut self, screen: &mut HomeScreen) {
        for intent in screen.take_intents() {
            log::info!("[App] Intent: {:?}", intent);
        }
        for command in screen.take_scroll_commands() {
            log::debug!(
                "[App] Scroll {} to {:.0}",
                command.section,
                command.offset
            );
        }

        let view = screen.view(Instant::now());

        if self.load_state.as_ref() != Some(screen.load_state()) {
            self.load_state = Some(screen.load_state().clone());
            if let Some(error) = &view.error {
                log::warn!(
                    "[App] {}: {} [{} / {}]",
                    error.title,
                    error.message,
                    error.retry_label,
                    error.cancel_label
                );
            }
            for section in &view.sections {
                log::info!(
                    "[App] Row {}{}",
                    section.key(),
                    if section.is_empty() { " (no content)" } else { "" }
                );
            }
        }

        let spotlight = (screen.generation(), view.spotlight.current_index);
        if self.spotlight != Some(spotlight)
            && let Some(hero) = &view.hero
        {
            self.spotlight = Some(spotlight);
            log::info!(
                "[App] Spotlight {}/{}: {} ({}{})",
                spotlight.1 + 1,
                screen.rotator().len(),
                hero.title,
                hero.badge,
                hero.year.map(|y| format!(", {y}")).unwrap_or_default()
            );
        }
    }
}

//! Home screen state and message handling.
//!
//! `HomeScreen` owns every timer and task it starts. Messages come back
//! through its own inbox; the owner pulls them with [`HomeScreen::recv`] and
//! feeds them to [`HomeScreen::update`] on a single task.

use std::sync::Arc;
use streamy_config::StreamyConfig;
use streamy_core::{Feed, FeedComposer};
use streamy_model::prelude::{CatalogItem, FocusTarget};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

use super::messages::{Intent, Message, SpotlightMessage};
use super::view::{ErrorView, HeroView, HomeView, SectionView};
use crate::domains::carousel::{FocusScrollCoordinator, ScrollCommand};
use crate::domains::spotlight::{RotatorCommand, SpotlightRotator};
use crate::infra::timer::ScopedTask;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub struct HomeScreen {
    composer: FeedComposer,
    feed: Option<Arc<Feed>>,
    generation: u64,
    load_state: LoadState,
    rotator: SpotlightRotator,
    coordinator: FocusScrollCoordinator,
    sender: UnboundedSender<Message>,
    inbox: UnboundedReceiver<Message>,
    load_task: Option<ScopedTask>,
    spotlight_timer: Option<ScopedTask>,
    completion_timer: Option<ScopedTask>,
    intents: Vec<Intent>,
    torn_down: bool,
}

impl HomeScreen {
    pub fn new(composer: FeedComposer, config: &StreamyConfig) -> Self {
        let (sender, inbox) = mpsc::unbounded_channel();
        Self {
            composer,
            feed: None,
            generation: 0,
            load_state: LoadState::Idle,
            rotator: SpotlightRotator::new(config.spotlight.clone()),
            coordinator: FocusScrollCoordinator::new(&config.focus),
            sender,
            inbox,
            load_task: None,
            spotlight_timer: None,
            completion_timer: None,
            intents: Vec::new(),
            torn_down: false,
        }
    }

    /// Handle for input sources that post into this screen.
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.sender.clone()
    }

    pub async fn recv(&mut self) -> Option<Message> {
        self.inbox.recv().await
    }

    pub fn update(&mut self, message: Message) {
        if self.torn_down {
            log::debug!("[Home] Ignoring {} after teardown", message.name());
            return;
        }
        let now = Instant::now();

        match message {
            Message::LoadFeed | Message::RetryLoad => self.start_load(),
            Message::DismissError => self.dismiss_error(),
            Message::FeedLoaded { generation, result } => {
                self.on_feed_loaded(generation, result)
            }
            Message::Spotlight(SpotlightMessage::Tick { epoch }) => {
                let command = self.rotator.on_tick(epoch, now);
                self.apply(command);
            }
            Message::Spotlight(SpotlightMessage::PhaseComplete { cycle }) => {
                let command = self.rotator.on_phase_complete(cycle, now);
                self.apply(command);
            }
            Message::Spotlight(SpotlightMessage::JumpTo(index)) => {
                let command = self.rotator.jump_to(index);
                self.apply(command);
            }
            Message::SpotlightPressed => {
                self.raise_with_hero(Intent::ItemSelected);
            }
            Message::PlayPressed => self.raise_with_hero(Intent::PlayRequested),
            Message::InfoPressed => self.raise_with_hero(Intent::InfoRequested),
            Message::ItemFocused { section, index } => {
                self.coordinator.on_item_focused(&section, index, now);
            }
            Message::MoveFocus(direction) => {
                self.coordinator.move_focus(direction, now);
            }
            Message::Select => self.select_focused(),
            Message::SearchPressed => self.intents.push(Intent::SearchRequested),
            Message::ProfilePressed => self.intents.push(Intent::ProfileRequested),
            Message::Teardown => self.teardown(),
        }
    }

    /// Intents raised since the last call.
    pub fn take_intents(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    pub fn take_scroll_commands(&mut self) -> Vec<ScrollCommand> {
        self.coordinator.drain_commands()
    }

    /// Cancel every timer and in-flight load. Later messages are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::info!("[Home] Tearing down");
        self.torn_down = true;
        self.rotator.stop();
        self.spotlight_timer = None;
        self.completion_timer = None;
        self.load_task = None;
    }

    pub fn view(&self, now: Instant) -> HomeView {
        let hero = self
            .current_hero()
            .map(HeroView::from_item);

        let focused = self.coordinator.focused();
        let sections = self
            .feed
            .as_ref()
            .map(|feed| {
                feed.sections
                    .iter()
                    .map(|section| {
                        let focus_index = focused
                            .filter(|(key, _)| *key == &section.key)
                            .map(|(_, index)| index);
                        SectionView::build(
                            section,
                            self.coordinator.header_scale(&section.key, now),
                            self.coordinator.row_offset(&section.key, now),
                            focus_index,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        let error = match &self.load_state {
            LoadState::Failed { message } => Some(ErrorView::connection(message)),
            _ => None,
        };

        HomeView {
            hero,
            spotlight: self.rotator.view(now),
            sections,
            loading: self.load_state == LoadState::Loading,
            error,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn feed(&self) -> Option<&Arc<Feed>> {
        self.feed.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rotator(&self) -> &SpotlightRotator {
        &self.rotator
    }

    pub fn coordinator(&self) -> &FocusScrollCoordinator {
        &self.coordinator
    }

    /// Whether a spotlight timer (advance or completion) is pending.
    pub fn has_spotlight_timers(&self) -> bool {
        self.spotlight_timer.is_some() || self.completion_timer.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn start_load(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.load_state = LoadState::Loading;
        log::info!("[Home] Loading feed (generation {})", generation);

        let composer = self.composer.clone();
        let sender = self.sender.clone();
        // replacing the handle aborts a previous in-flight load
        self.load_task = Some(ScopedTask::spawn("feed-load", async move {
            let result = composer
                .compose_feed()
                .await
                .map(Arc::new)
                .map_err(|err| err.to_string());
            let _ = sender.send(Message::FeedLoaded { generation, result });
        }));
    }

    fn on_feed_loaded(&mut self, generation: u64, result: Result<Arc<Feed>, String>) {
        if generation != self.generation {
            log::debug!(
                "[Home] Dropping stale feed (generation {}, current {})",
                generation,
                self.generation
            );
            return;
        }
        self.load_task = None;

        match result {
            Ok(feed) => {
                log::info!(
                    "[Home] Feed ready: {} hero candidates, {} sections",
                    feed.hero.len(),
                    feed.sections.len()
                );
                self.coordinator.sync_sections(&feed.sections);
                let command = self.rotator.set_candidates(feed.hero.len());
                self.feed = Some(feed);
                self.load_state = LoadState::Loaded;
                self.apply(Some(command));
            }
            Err(message) => {
                log::error!("[Home] Failed to load content: {}", message);
                self.load_state = LoadState::Failed { message };
            }
        }
    }

    /// The overlay only goes away when an earlier feed is still there to
    /// show; with nothing loaded yet the retry prompt stays up.
    fn dismiss_error(&mut self) {
        if !matches!(self.load_state, LoadState::Failed { .. }) {
            return;
        }
        if self.feed.is_some() {
            self.load_state = LoadState::Loaded;
        } else {
            log::debug!("[Home] Nothing loaded yet, keeping the retry prompt");
        }
    }

    fn apply(&mut self, command: Option<RotatorCommand>) {
        match command {
            Some(RotatorCommand::ArmTimer { epoch, period }) => {
                self.completion_timer = None;
                self.spotlight_timer = Some(ScopedTask::every(
                    "spotlight-advance",
                    period,
                    self.sender.clone(),
                    move || Message::Spotlight(SpotlightMessage::Tick { epoch }),
                ));
            }
            Some(RotatorCommand::DisarmTimer) => {
                self.spotlight_timer = None;
                self.completion_timer = None;
            }
            Some(RotatorCommand::ScheduleCompletion { cycle, after }) => {
                self.completion_timer = Some(ScopedTask::after(
                    "spotlight-phase",
                    after,
                    self.sender.clone(),
                    Message::Spotlight(SpotlightMessage::PhaseComplete { cycle }),
                ));
            }
            None => {}
        }
    }

    fn current_hero(&self) -> Option<&CatalogItem> {
        self.feed
            .as_ref()?
            .hero
            .get(self.rotator.current_index())
    }

    fn raise_with_hero(&mut self, intent: fn(CatalogItem) -> Intent) {
        match self.current_hero().cloned() {
            Some(item) => self.intents.push(intent(item)),
            None => log::debug!("[Home] No spotlight item to act on"),
        }
    }

    fn select_focused(&mut self) {
        let Some((key, index)) = self.coordinator.focused() else {
            return;
        };
        let Some(section) = self.feed.as_ref().and_then(|feed| feed.section(key)) else {
            return;
        };
        let intent = match section.focus_target(index) {
            Some(FocusTarget::Item(item)) => Intent::ItemSelected(item.clone()),
            Some(FocusTarget::SeeAll) => Intent::SeeAllRequested(section.key.clone()),
            None => return,
        };
        self.intents.push(intent);
    }
}

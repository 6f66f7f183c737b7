use std::sync::Arc;
use streamy_core::Feed;
use streamy_model::prelude::{CatalogItem, SectionKey};

use crate::domains::carousel::Direction;

#[derive(Debug, Clone)]
pub enum SpotlightMessage {
    /// Repeating advance timer fired.
    Tick { epoch: u64 },
    /// A fade phase's completion timer fired.
    PhaseComplete { cycle: u64 },
    /// Indicator selected.
    JumpTo(usize),
}

#[derive(Debug, Clone)]
pub enum Message {
    // Feed loading
    LoadFeed,
    RetryLoad,
    DismissError,
    FeedLoaded {
        generation: u64,
        result: Result<Arc<Feed>, String>,
    },

    // Spotlight
    Spotlight(SpotlightMessage),
    SpotlightPressed,
    PlayPressed,
    InfoPressed,

    // Rows
    ItemFocused { section: SectionKey, index: usize },
    MoveFocus(Direction),
    Select,

    // Header
    SearchPressed,
    ProfilePressed,

    Teardown,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::LoadFeed => "Home::LoadFeed",
            Message::RetryLoad => "Home::RetryLoad",
            Message::DismissError => "Home::DismissError",
            Message::FeedLoaded { .. } => "Home::FeedLoaded",
            Message::Spotlight(SpotlightMessage::Tick { .. }) => "Home::Spotlight::Tick",
            Message::Spotlight(SpotlightMessage::PhaseComplete { .. }) => {
                "Home::Spotlight::PhaseComplete"
            }
            Message::Spotlight(SpotlightMessage::JumpTo(_)) => "Home::Spotlight::JumpTo",
            Message::SpotlightPressed => "Home::SpotlightPressed",
            Message::PlayPressed => "Home::PlayPressed",
            Message::InfoPressed => "Home::InfoPressed",
            Message::ItemFocused { .. } => "Home::ItemFocused",
            Message::MoveFocus(_) => "Home::MoveFocus",
            Message::Select => "Home::Select",
            Message::SearchPressed => "Home::SearchPressed",
            Message::ProfilePressed => "Home::ProfilePressed",
            Message::Teardown => "Home::Teardown",
        }
    }
}

/// Requests raised to whoever hosts the home screen. The screen never acts
/// on these itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ItemSelected(CatalogItem),
    PlayRequested(CatalogItem),
    InfoRequested(CatalogItem),
    SeeAllRequested(SectionKey),
    SearchRequested,
    ProfileRequested,
}

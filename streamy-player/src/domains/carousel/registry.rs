//! Per-row scroll positions keyed by section

use std::collections::HashMap;
use std::time::Duration;
use streamy_model::prelude::SectionKey;
use tokio::time::Instant;

use crate::infra::transitions::{Channel, EasingFunction};

#[derive(Debug, Default)]
pub struct ScrollRegistry {
    rows: HashMap<SectionKey, Channel>,
    duration: Duration,
}

impl ScrollRegistry {
    pub fn new(duration: Duration) -> Self {
        Self {
            rows: HashMap::new(),
            duration,
        }
    }

    /// Animate `key`'s row toward `offset`. Other rows are untouched.
    pub fn scroll_to(&mut self, key: &SectionKey, offset: f32, now: Instant) {
        self.rows
            .entry(key.clone())
            .or_insert_with(|| Channel::new(0.0))
            .animate_to(offset, self.duration, EasingFunction::EaseOut, now);
    }

    pub fn offset(&self, key: &SectionKey, now: Instant) -> f32 {
        self.rows.get(key).map_or(0.0, |channel| channel.sample(now))
    }

    /// Where the row is heading, ignoring animation.
    pub fn target(&self, key: &SectionKey) -> f32 {
        self.rows.get(key).map_or(0.0, Channel::target)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

//! Focus-driven scrolling and section emphasis
//!
//! When an item gains focus its row scrolls it to the leading edge, and the
//! row's section becomes the single emphasized section. Header scales are
//! animation channels sampled by the renderer.

use std::collections::HashMap;
use streamy_config::FocusConfig;
use streamy_model::prelude::{Section, SectionKey};
use tokio::time::Instant;

use super::registry::ScrollRegistry;
use super::types::{Direction, EmphasisStyle, RowGeometry, ScrollCommand};
use crate::infra::transitions::{Channel, EasingFunction};

/// Header scale before any section has been focused.
pub const RESTING_SCALE: f32 = 1.0;

/// Which section is active and where focus last was in each row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusState {
    pub active_section: Option<SectionKey>,
    pub last_focused: HashMap<SectionKey, usize>,
}

#[derive(Debug, Clone)]
struct Row {
    key: SectionKey,
    /// Items plus the optional "see all" target.
    targets: usize,
    header_scale: Channel,
}

#[derive(Debug)]
pub struct FocusScrollCoordinator {
    geometry: RowGeometry,
    emphasis: EmphasisStyle,
    rows: Vec<Row>,
    scroll: ScrollRegistry,
    state: FocusState,
    commands: Vec<ScrollCommand>,
}

impl FocusScrollCoordinator {
    pub fn new(config: &FocusConfig) -> Self {
        Self {
            geometry: RowGeometry::from(config),
            emphasis: EmphasisStyle::from(config),
            rows: Vec::new(),
            scroll: ScrollRegistry::new(config.scroll_duration()),
            state: FocusState::default(),
            commands: Vec::new(),
        }
    }

    /// Replace the rows after a feed load. Focus and scroll positions
    /// belong to the previous feed and are dropped.
    pub fn sync_sections(&mut self, sections: &[Section]) {
        self.rows = sections
            .iter()
            .map(|section| Row {
                key: section.key.clone(),
                targets: section.focus_target_count(),
                header_scale: Channel::new(RESTING_SCALE),
            })
            .collect();
        self.state = FocusState::default();
        self.scroll.clear();
        self.commands.clear();
    }

    /// An item (or a row's "see all" target) gained focus.
    pub fn on_item_focused(&mut self, key: &SectionKey, index: usize, now: Instant) {
        let Some(row) = self.rows.iter().find(|row| &row.key == key) else {
            log::warn!("[Focus] Focus event for unknown section {}", key);
            return;
        };
        if index >= row.targets {
            log::warn!(
                "[Focus] Focus index {} out of range for {} ({} targets)",
                index,
                key,
                row.targets
            );
            return;
        }

        let offset = self.geometry.offset_for(index);
        self.scroll.scroll_to(key, offset, now);
        self.commands.push(ScrollCommand {
            section: key.clone(),
            offset,
            animated: true,
        });
        self.state.last_focused.insert(key.clone(), index);

        if self.state.active_section.as_ref() != Some(key) {
            log::debug!("[Focus] Active section -> {}", key);
            self.state.active_section = Some(key.clone());
            self.retarget_headers(now);
        }
    }

    /// Move focus with directional input. Returns the new focus, if any.
    pub fn move_focus(
        &mut self,
        direction: Direction,
        now: Instant,
    ) -> Option<(SectionKey, usize)> {
        let Some((row_index, index)) = self.focused_position() else {
            // nothing focused yet: land on the first row with content
            let row = self.rows.iter().position(|row| row.targets > 0)?;
            return self.focus_row(row, now);
        };
        let targets = self.rows[row_index].targets;

        match direction {
            Direction::Left if index > 0 => self.focus_at(row_index, index - 1, now),
            Direction::Right if index + 1 < targets => {
                self.focus_at(row_index, index + 1, now)
            }
            Direction::Left | Direction::Right => None,
            Direction::Up => {
                let row = self.rows[..row_index]
                    .iter()
                    .rposition(|row| row.targets > 0)?;
                self.focus_row(row, now)
            }
            Direction::Down => {
                let row = self.rows[row_index + 1..]
                    .iter()
                    .position(|row| row.targets > 0)?
                    + row_index
                    + 1;
                self.focus_row(row, now)
            }
        }
    }

    /// Currently focused section and target index.
    pub fn focused(&self) -> Option<(&SectionKey, usize)> {
        let key = self.state.active_section.as_ref()?;
        let index = self.state.last_focused.get(key).copied()?;
        Some((key, index))
    }

    pub fn active_section(&self) -> Option<&SectionKey> {
        self.state.active_section.as_ref()
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn header_scale(&self, key: &SectionKey, now: Instant) -> f32 {
        self.row(key)
            .map_or(RESTING_SCALE, |row| row.header_scale.sample(now))
    }

    /// Scale the header is animating toward.
    pub fn header_target(&self, key: &SectionKey) -> f32 {
        self.row(key)
            .map_or(RESTING_SCALE, |row| row.header_scale.target())
    }

    /// Sections whose header is emphasized. At most one: the active row.
    pub fn emphasized_sections(&self) -> Vec<&SectionKey> {
        self.rows
            .iter()
            .filter(|row| self.state.active_section.as_ref() == Some(&row.key))
            .map(|row| &row.key)
            .collect()
    }

    pub fn row_offset(&self, key: &SectionKey, now: Instant) -> f32 {
        self.scroll.offset(key, now)
    }

    pub fn row_target_offset(&self, key: &SectionKey) -> f32 {
        self.scroll.target(key)
    }

    pub fn drain_commands(&mut self) -> Vec<ScrollCommand> {
        std::mem::take(&mut self.commands)
    }

    fn row(&self, key: &SectionKey) -> Option<&Row> {
        self.rows.iter().find(|row| &row.key == key)
    }

    fn focused_position(&self) -> Option<(usize, usize)> {
        let (key, index) = self.focused()?;
        let row = self.rows.iter().position(|row| &row.key == key)?;
        Some((row, index))
    }

    fn focus_at(
        &mut self,
        row: usize,
        index: usize,
        now: Instant,
    ) -> Option<(SectionKey, usize)> {
        let key = self.rows[row].key.clone();
        self.on_item_focused(&key, index, now);
        Some((key, index))
    }

    /// Enter a row at its remembered position.
    fn focus_row(&mut self, row: usize, now: Instant) -> Option<(SectionKey, usize)> {
        let target = &self.rows[row];
        let remembered = self.state.last_focused.get(&target.key).copied().unwrap_or(0);
        let index = remembered.min(target.targets.saturating_sub(1));
        self.focus_at(row, index, now)
    }

    fn retarget_headers(&mut self, now: Instant) {
        let active = self.state.active_section.clone();
        let style = self.emphasis;
        for row in &mut self.rows {
            let target = if active.as_ref() == Some(&row.key) {
                style.emphasized_scale
            } else {
                style.deemphasized_scale
            };
            if row.header_scale.target() != target {
                row.header_scale.animate_to_after(
                    target,
                    style.delay,
                    style.duration,
                    EasingFunction::EaseInOut,
                    now,
                );
            }
        }
    }
}

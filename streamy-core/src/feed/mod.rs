//! Home feed composition.

mod composer;
mod plan;

pub use composer::{BatchReport, FeedComposer, LookupOutcome};
pub use plan::{FeedPlan, LookupSpec, PlanError, SectionSpec};

use std::collections::HashMap;
use streamy_model::{CatalogItem, Section, SectionKey, SlotKey};

/// Hero candidates plus the declared sections, in plan order.
///
/// Read-only once built; a reload produces a new `Feed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub hero: Vec<CatalogItem>,
    pub sections: Vec<Section>,
}

impl Feed {
    pub fn section(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.iter().find(|section| &section.key == key)
    }

    pub fn section_index(&self, key: &SectionKey) -> Option<usize> {
        self.sections.iter().position(|section| &section.key == key)
    }

    /// True when neither the hero list nor any section has content.
    pub fn is_empty(&self) -> bool {
        self.hero.is_empty() && self.sections.iter().all(Section::is_empty)
    }
}

/// Resolved lookups keyed by slot. A slot is absent when its lookup failed
/// or found nothing.
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    slots: HashMap<SlotKey, CatalogItem>,
}

impl SlotTable {
    pub fn insert(&mut self, slot: SlotKey, item: CatalogItem) {
        self.slots.insert(slot, item);
    }

    pub fn get(&self, slot: &SlotKey) -> Option<&CatalogItem> {
        self.slots.get(slot)
    }

    pub fn contains(&self, slot: &SlotKey) -> bool {
        self.slots.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

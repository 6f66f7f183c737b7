//! Named horizontal rows of the home feed.

use crate::catalog::CatalogItem;
use crate::ids::SectionKey;

/// A named, ordered row of catalog items.
///
/// Item order is display order. Sections are built once per feed load and
/// replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub key: SectionKey,
    pub title: String,
    pub items: Vec<CatalogItem>,
    pub show_see_all: bool,
}

/// Something in a row that can hold input focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusTarget<'a> {
    Item(&'a CatalogItem),
    /// Trailing "see all" affordance; carries no catalog payload.
    SeeAll,
}

impl Section {
    pub fn new(
        key: SectionKey,
        title: impl Into<String>,
        items: Vec<CatalogItem>,
        show_see_all: bool,
    ) -> Self {
        Self {
            key,
            title: title.into(),
            items,
            show_see_all,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "See all" is only offered for rows that have something to see.
    pub fn see_all_visible(&self) -> bool {
        self.show_see_all && !self.items.is_empty()
    }

    /// Number of focusable positions: every item plus the optional trailing
    /// "see all" target.
    pub fn focus_target_count(&self) -> usize {
        self.items.len() + usize::from(self.see_all_visible())
    }

    pub fn focus_target(&self, index: usize) -> Option<FocusTarget<'_>> {
        match self.items.get(index) {
            Some(item) => Some(FocusTarget::Item(item)),
            None if self.see_all_visible() && index == self.items.len() => {
                Some(FocusTarget::SeeAll)
            }
            None => None,
        }
    }

    pub fn focus_targets(&self) -> impl Iterator<Item = FocusTarget<'_>> {
        self.items
            .iter()
            .map(FocusTarget::Item)
            .chain(self.see_all_visible().then_some(FocusTarget::SeeAll))
    }
}

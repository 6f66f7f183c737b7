//! Sampled, render-ready state of the home screen.

use streamy_model::prelude::{CatalogItem, RatingBand, Section, SectionKey};

use crate::domains::spotlight::SpotlightView;

pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";
pub const SEE_ALL_LABEL: &str = "See all";
pub const CONNECTION_ERROR_TITLE: &str = "Connection Error";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to load content. Please make sure the API server is running.";

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub hero: Option<HeroView>,
    pub spotlight: SpotlightView,
    pub sections: Vec<SectionView>,
    pub loading: bool,
    pub error: Option<ErrorView>,
}

/// The spotlighted item.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub title: String,
    pub overview: String,
    pub art: Option<String>,
    pub badge: &'static str,
    pub year: Option<u16>,
    pub rating: Option<f32>,
}

impl HeroView {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            overview: item.overview.clone(),
            art: item.landscape_art().map(str::to_string),
            badge: item.display_kind(),
            year: item.year(),
            rating: item.has_rating().then_some(item.rating),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub art: Option<String>,
    pub badge: &'static str,
    pub year: Option<u16>,
    pub rating: Option<(f32, RatingBand)>,
    pub focused: bool,
}

impl CardView {
    pub fn from_item(item: &CatalogItem, focused: bool) -> Self {
        Self {
            title: item.title.clone(),
            art: item.landscape_art().map(str::to_string),
            badge: item.display_kind(),
            year: item.year(),
            rating: item
                .has_rating()
                .then(|| (item.rating, item.rating_band())),
            focused,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    Populated {
        key: SectionKey,
        title: String,
        header_scale: f32,
        scroll_offset: f32,
        cards: Vec<CardView>,
        see_all: Option<SeeAllView>,
    },
    Empty {
        key: SectionKey,
        title: String,
        header_scale: f32,
        placeholder: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeeAllView {
    pub label: &'static str,
    pub focused: bool,
}

impl SectionView {
    /// Build a row view; `focused` is the focused target index when this
    /// row holds focus.
    pub fn build(
        section: &Section,
        header_scale: f32,
        scroll_offset: f32,
        focused: Option<usize>,
    ) -> Self {
        if section.is_empty() {
            return SectionView::Empty {
                key: section.key.clone(),
                title: section.title.clone(),
                header_scale,
                placeholder: NO_CONTENT_PLACEHOLDER,
            };
        }

        let cards = section
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| CardView::from_item(item, focused == Some(index)))
            .collect();
        let see_all = section.see_all_visible().then(|| SeeAllView {
            label: SEE_ALL_LABEL,
            focused: focused == Some(section.items.len()),
        });

        SectionView::Populated {
            key: section.key.clone(),
            title: section.title.clone(),
            header_scale,
            scroll_offset,
            cards,
            see_all,
        }
    }

    pub fn key(&self) -> &SectionKey {
        match self {
            SectionView::Populated { key, .. } | SectionView::Empty { key, .. } => key,
        }
    }

    pub fn header_scale(&self) -> f32 {
        match self {
            SectionView::Populated { header_scale, .. }
            | SectionView::Empty { header_scale, .. } => *header_scale,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SectionView::Empty { .. })
    }
}

/// Failure overlay with retry and dismiss actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub title: &'static str,
    pub message: &'static str,
    /// Underlying cause, for logs and debug overlays.
    pub detail: String,
    pub retry_label: &'static str,
    pub cancel_label: &'static str,
}

impl ErrorView {
    pub fn connection(detail: &str) -> Self {
        Self {
            title: CONNECTION_ERROR_TITLE,
            message: CONNECTION_ERROR_MESSAGE,
            detail: detail.to_string(),
            retry_label: "Retry",
            cancel_label: "Cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamy_model::CatalogId;

    #[test]
    fn empty_sections_render_placeholder() {
        let section = Section::new(SectionKey::new("comedy-shows"), "Comedy shows", vec![], true);
        let view = SectionView::build(&section, 1.0, 0.0, None);
        assert_eq!(
            view,
            SectionView::Empty {
                key: SectionKey::new("comedy-shows"),
                title: "Comedy shows".to_string(),
                header_scale: 1.0,
                placeholder: NO_CONTENT_PLACEHOLDER,
            }
        );
    }

    #[test]
    fn see_all_can_hold_focus() {
        let mut item = CatalogItem::new(CatalogId::series(1396), "Breaking Bad");
        item.rating = 8.9;
        let section = Section::new(SectionKey::new("continue"), "Continue", vec![item], true);

        let SectionView::Populated { cards, see_all, .. } =
            SectionView::build(&section, 1.2, 0.0, Some(1))
        else {
            panic!("populated row expected");
        };
        assert!(!cards[0].focused);
        assert_eq!(cards[0].badge, "SERIES");
        assert_eq!(cards[0].rating, Some((8.9, RatingBand::High)));
        assert_eq!(see_all, Some(SeeAllView { label: SEE_ALL_LABEL, focused: true }));
    }
}

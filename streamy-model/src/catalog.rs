//! Catalog entries as displayed by the home screen.

use crate::ids::CatalogId;
use crate::media_type::MediaKind;

/// Title used when the catalog returns neither `title` nor `name`.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Upper bound of the catalog's rating scale.
pub const MAX_RATING: f32 = 10.0;

/// A single movie or series entry with display metadata.
///
/// Items are immutable once fetched. The same entry may be held by several
/// sections and by the hero list; each holder owns its own copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub id: CatalogId,
    pub title: String,
    pub overview: String,
    /// Portrait artwork URL
    pub poster: Option<String>,
    /// Landscape artwork URL
    pub backdrop: Option<String>,
    /// Average rating in `[0, 10]`
    pub rating: f32,
    /// Release or first-air date as delivered (`YYYY-MM-DD`)
    pub release_date: Option<String>,
}

/// Coarse rating buckets used for card accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    High,
    Medium,
    Low,
}

impl CatalogItem {
    pub fn new(id: CatalogId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster: None,
            backdrop: None,
            rating: 0.0,
            release_date: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.id.kind
    }

    /// Badge text shown on cards ("MOVIE" / "SERIES").
    pub fn display_kind(&self) -> &'static str {
        self.id.kind.badge()
    }

    /// Release year parsed from the leading digits of the date string.
    pub fn year(&self) -> Option<u16> {
        let date = self.release_date.as_deref()?.trim();
        let digits = date.get(..4)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn rating_band(&self) -> RatingBand {
        if self.rating >= 7.0 {
            RatingBand::High
        } else if self.rating >= 5.0 {
            RatingBand::Medium
        } else {
            RatingBand::Low
        }
    }

    /// Cards only show a rating pill for rated items.
    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    /// Artwork for landscape surfaces: backdrop, falling back to poster.
    pub fn landscape_art(&self) -> Option<&str> {
        self.backdrop.as_deref().or(self.poster.as_deref())
    }

    /// Clamp a raw upstream rating into the catalog scale.
    pub fn normalize_rating(raw: f32) -> f32 {
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, MAX_RATING)
        }
    }
}

/// Result page of a catalog lookup with entries already mapped into the
/// domain model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogResults {
    pub status: String,
    pub query: String,
    pub count: usize,
    pub results: Vec<CatalogItem>,
}

impl CatalogResults {
    pub fn new(query: impl Into<String>, results: Vec<CatalogItem>) -> Self {
        Self {
            status: "success".to_string(),
            query: query.into(),
            count: results.len(),
            results,
        }
    }

    pub fn first(&self) -> Option<&CatalogItem> {
        self.results.first()
    }

    pub fn into_first(self) -> Option<CatalogItem> {
        self.results.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_date(date: Option<&str>) -> CatalogItem {
        CatalogItem {
            release_date: date.map(str::to_string),
            ..CatalogItem::new(CatalogId::movie(1), "Inception")
        }
    }

    #[test]
    fn year_comes_from_leading_digits() {
        assert_eq!(item_with_date(Some("2010-07-15")).year(), Some(2010));
        assert_eq!(item_with_date(Some("1999")).year(), Some(1999));
        assert_eq!(item_with_date(Some("")).year(), None);
        assert_eq!(item_with_date(Some("n/a-date")).year(), None);
        assert_eq!(item_with_date(None).year(), None);
    }

    #[test]
    fn rating_bands_follow_card_thresholds() {
        let mut item = item_with_date(None);
        item.rating = 8.4;
        assert_eq!(item.rating_band(), RatingBand::High);
        item.rating = 7.0;
        assert_eq!(item.rating_band(), RatingBand::High);
        item.rating = 5.5;
        assert_eq!(item.rating_band(), RatingBand::Medium);
        item.rating = 2.0;
        assert_eq!(item.rating_band(), RatingBand::Low);
    }

    #[test]
    fn ratings_are_clamped() {
        assert_eq!(CatalogItem::normalize_rating(11.2), 10.0);
        assert_eq!(CatalogItem::normalize_rating(-1.0), 0.0);
        assert_eq!(CatalogItem::normalize_rating(f32::NAN), 0.0);
        assert_eq!(CatalogItem::normalize_rating(6.5), 6.5);
    }

    #[test]
    fn landscape_art_prefers_backdrop() {
        let mut item = item_with_date(None);
        item.poster = Some("poster.jpg".into());
        assert_eq!(item.landscape_art(), Some("poster.jpg"));
        item.backdrop = Some("backdrop.jpg".into());
        assert_eq!(item.landscape_art(), Some("backdrop.jpg"));
    }
}

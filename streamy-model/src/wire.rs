//! JSON payloads returned by the catalog search endpoints.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, CatalogResults, UNKNOWN_TITLE};
use crate::ids::CatalogId;
use crate::media_type::MediaKind;

/// Envelope of `/movies/{q}`, `/tv-shows/{q}` and `/search/{q}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// Present on error envelopes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One upstream search hit. Movies carry `title`/`release_date`, series
/// carry `name`/`first_air_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SearchResult {
    /// Map into a [`CatalogItem`].
    ///
    /// Single-kind endpoints omit `media_type`; `fallback` supplies the kind
    /// implied by the endpoint. Returns `None` for non-title hits (people on
    /// the multi-search endpoint).
    pub fn into_item(self, fallback: MediaKind) -> Option<CatalogItem> {
        let kind = match self.media_type.as_deref() {
            None => fallback,
            Some(raw) => raw.parse().ok()?,
        };

        let title = non_blank(self.title)
            .or(non_blank(self.name))
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        Some(CatalogItem {
            id: CatalogId::new(self.id, kind),
            title,
            overview: self.overview.unwrap_or_default(),
            poster: non_blank(self.poster_path),
            backdrop: non_blank(self.backdrop_path),
            rating: CatalogItem::normalize_rating(
                self.vote_average.unwrap_or_default(),
            ),
            release_date: non_blank(self.release_date)
                .or(non_blank(self.first_air_date)),
        })
    }
}

impl SearchResponse {
    /// Map every usable hit, keeping upstream order.
    pub fn into_results(self, fallback: MediaKind) -> CatalogResults {
        let results: Vec<CatalogItem> = self
            .results
            .into_iter()
            .filter_map(|hit| hit.into_item(fallback))
            .collect();
        CatalogResults {
            status: self.status,
            query: self.query,
            count: results.len(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIE_PAGE: &str = r#"{
        "status": "success",
        "query": "inception",
        "count": 2,
        "results": [
            {
                "id": 27205,
                "title": "Inception",
                "overview": "Cobb steals secrets.",
                "release_date": "2010-07-15",
                "vote_average": 8.369,
                "popularity": 120.5,
                "poster_path": "https://image.tmdb.org/t/p/w500/poster.jpg",
                "backdrop_path": "https://image.tmdb.org/t/p/w500/backdrop.jpg"
            },
            {
                "id": 64956,
                "title": "",
                "overview": "",
                "release_date": "",
                "vote_average": 0,
                "poster_path": null,
                "backdrop_path": null
            }
        ]
    }"#;

    #[test]
    fn movie_page_maps_with_endpoint_kind() {
        let page: SearchResponse = serde_json::from_str(MOVIE_PAGE).unwrap();
        let results = page.into_results(MediaKind::Movie);

        assert_eq!(results.count, 2);
        let first = &results.results[0];
        assert_eq!(first.id, CatalogId::movie(27205));
        assert_eq!(first.title, "Inception");
        assert_eq!(first.year(), Some(2010));
        assert!(first.backdrop.as_deref().unwrap().ends_with("backdrop.jpg"));

        let second = &results.results[1];
        assert_eq!(second.title, UNKNOWN_TITLE);
        assert_eq!(second.release_date, None);
        assert_eq!(second.poster, None);
    }

    #[test]
    fn series_fields_fill_title_and_date() {
        let hit: SearchResult = serde_json::from_str(
            r#"{"id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20",
                "vote_average": 8.9, "media_type": "tv"}"#,
        )
        .unwrap();
        let item = hit.into_item(MediaKind::Movie).unwrap();
        assert_eq!(item.id, CatalogId::series(1396));
        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.year(), Some(2008));
    }

    #[test]
    fn multi_search_drops_people() {
        let page: SearchResponse = serde_json::from_str(
            r#"{"status": "success", "query": "nolan", "count": 2, "results": [
                {"id": 525, "name": "Christopher Nolan", "media_type": "person"},
                {"id": 157336, "title": "Interstellar", "media_type": "movie"}
            ]}"#,
        )
        .unwrap();
        let results = page.into_results(MediaKind::Movie);
        assert_eq!(results.count, 1);
        assert_eq!(results.results[0].title, "Interstellar");
    }
}

//! Declarative description of the home feed: which lookups to issue and
//! how their first results are arranged into hero candidates and sections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use streamy_model::{Section, SectionKey, SlotKey};
use thiserror::Error;

use super::{Feed, SlotTable};
use crate::client::LookupKind;

/// One named request in the feed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSpec {
    pub slot: SlotKey,
    pub kind: LookupKind,
    pub query: String,
}

/// A declared section: an ordered list of slot references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub key: SectionKey,
    pub title: String,
    pub slots: Vec<SlotKey>,
    #[serde(default = "default_show_see_all")]
    pub show_see_all: bool,
}

fn default_show_see_all() -> bool {
    true
}

/// Fixed batch of lookups plus the layout folded from their results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPlan {
    pub lookups: Vec<LookupSpec>,
    /// Hero candidate order.
    #[serde(default)]
    pub hero: Vec<SlotKey>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("{owner} references undeclared slot `{slot}`")]
    UndeclaredSlot { owner: String, slot: SlotKey },

    #[error("slot `{0}` is declared more than once")]
    DuplicateSlot(SlotKey),

    #[error("section `{0}` is declared more than once")]
    DuplicateSection(SectionKey),

    #[error("slot `{0}` has an empty query")]
    EmptyQuery(SlotKey),

    #[error("failed to read feed plan {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feed plan {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl LookupSpec {
    pub fn new(slot: &str, kind: LookupKind, query: &str) -> Self {
        Self {
            slot: SlotKey::new(slot),
            kind,
            query: query.to_string(),
        }
    }
}

impl SectionSpec {
    pub fn new(key: &str, title: &str, slots: &[&str]) -> Self {
        Self {
            key: SectionKey::new(key),
            title: title.to_string(),
            slots: slots.iter().copied().map(SlotKey::new).collect(),
            show_see_all: true,
        }
    }
}

impl Default for FeedPlan {
    fn default() -> Self {
        Self::streamy_default()
    }
}

impl FeedPlan {
    /// The stock home feed: five themed rows over fifteen title lookups,
    /// with twelve of them doubling as hero candidates.
    pub fn streamy_default() -> Self {
        use LookupKind::{Movie, TvShow};

        let lookups = vec![
            LookupSpec::new("inception", Movie, "inception"),
            LookupSpec::new("the-dark-knight", Movie, "the dark knight"),
            LookupSpec::new("interstellar", Movie, "interstellar"),
            LookupSpec::new("fight-club", Movie, "fight club"),
            LookupSpec::new("the-matrix", Movie, "the matrix"),
            LookupSpec::new("breaking-bad", TvShow, "breaking bad"),
            LookupSpec::new("game-of-thrones", TvShow, "game of thrones"),
            LookupSpec::new("stranger-things", TvShow, "stranger things"),
            LookupSpec::new("the-office", TvShow, "the office"),
            LookupSpec::new("friends", TvShow, "friends"),
            LookupSpec::new("the-godfather", Movie, "the godfather"),
            LookupSpec::new("pulp-fiction", Movie, "pulp fiction"),
            LookupSpec::new("the-shawshank-redemption", Movie, "the shawshank redemption"),
            LookupSpec::new("the-wire", TvShow, "the wire"),
            LookupSpec::new("the-sopranos", TvShow, "the sopranos"),
        ];

        let hero = [
            "inception",
            "breaking-bad",
            "the-dark-knight",
            "game-of-thrones",
            "interstellar",
            "stranger-things",
            "the-godfather",
            "the-office",
            "pulp-fiction",
            "friends",
            "fight-club",
            "the-wire",
        ]
        .into_iter()
        .map(SlotKey::new)
        .collect();

        let sections = vec![
            SectionSpec::new(
                "top-picks",
                "Top picks for you",
                &[
                    "inception",
                    "the-dark-knight",
                    "interstellar",
                    "fight-club",
                    "the-matrix",
                    "the-godfather",
                ],
            ),
            SectionSpec::new(
                "continue-watching",
                "Continue watching for you",
                &["breaking-bad", "game-of-thrones", "stranger-things", "the-wire"],
            ),
            SectionSpec::new(
                "action-movies",
                "Action movies",
                &["the-dark-knight", "the-matrix", "inception", "fight-club"],
            ),
            SectionSpec::new(
                "drama-content",
                "Award-winning dramas",
                &[
                    "the-godfather",
                    "the-shawshank-redemption",
                    "pulp-fiction",
                    "the-sopranos",
                ],
            ),
            SectionSpec::new("comedy-shows", "Comedy shows", &["the-office", "friends"]),
        ];

        Self {
            lookups,
            hero,
            sections,
        }
    }

    /// Load a plan from TOML or JSON (chosen by extension, TOML otherwise)
    /// and validate it.
    pub fn load_from_file(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|err| err.to_string()),
            _ => toml::from_str(&contents).map_err(|err| err.to_string()),
        };
        let plan: FeedPlan = parsed.map_err(|message| PlanError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        let mut declared = HashSet::with_capacity(self.lookups.len());
        for lookup in &self.lookups {
            if !declared.insert(&lookup.slot) {
                return Err(PlanError::DuplicateSlot(lookup.slot.clone()));
            }
            if lookup.query.trim().is_empty() {
                return Err(PlanError::EmptyQuery(lookup.slot.clone()));
            }
        }

        if let Some(slot) = self.hero.iter().find(|slot| !declared.contains(slot)) {
            return Err(PlanError::UndeclaredSlot {
                owner: "hero".to_string(),
                slot: slot.clone(),
            });
        }

        let mut section_keys = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !section_keys.insert(&section.key) {
                return Err(PlanError::DuplicateSection(section.key.clone()));
            }
            if let Some(slot) = section.slots.iter().find(|slot| !declared.contains(slot)) {
                return Err(PlanError::UndeclaredSlot {
                    owner: format!("section `{}`", section.key),
                    slot: slot.clone(),
                });
            }
        }

        Ok(())
    }

    /// Slots needed for the hero list only.
    pub fn hero_lookups(&self) -> impl Iterator<Item = &LookupSpec> {
        self.lookups
            .iter()
            .filter(|lookup| self.hero.contains(&lookup.slot))
    }

    /// Arrange resolved slots into the feed. Absent slots are skipped, so
    /// every declared section is present even if it ends up empty.
    pub fn fold(&self, table: &SlotTable) -> Feed {
        let hero = self
            .hero
            .iter()
            .filter_map(|slot| table.get(slot).cloned())
            .collect();

        let sections = self
            .sections
            .iter()
            .map(|spec| {
                let items = spec
                    .slots
                    .iter()
                    .filter_map(|slot| table.get(slot).cloned())
                    .collect();
                Section::new(spec.key.clone(), spec.title.clone(), items, spec.show_see_all)
            })
            .collect();

        Feed { hero, sections }
    }
}

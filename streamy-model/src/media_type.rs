use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of catalog entry. The wire format spells series as `"tv"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    /// Feature film
    #[cfg_attr(feature = "serde", serde(rename = "movie"))]
    Movie,
    /// Television series
    #[cfg_attr(feature = "serde", serde(rename = "tv", alias = "series"))]
    Series,
}

impl MediaKind {
    /// Badge label shown on cards and the spotlight.
    pub fn badge(&self) -> &'static str {
        match self {
            MediaKind::Movie => "MOVIE",
            MediaKind::Series => "SERIES",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Series => write!(f, "Series"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "tv" | "series" => Ok(MediaKind::Series),
            other => Err(ModelError::UnknownMediaKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_spellings() {
        assert_eq!("movie".parse::<MediaKind>(), Ok(MediaKind::Movie));
        assert_eq!("TV".parse::<MediaKind>(), Ok(MediaKind::Series));
        assert_eq!("series".parse::<MediaKind>(), Ok(MediaKind::Series));
        assert!(matches!(
            "person".parse::<MediaKind>(),
            Err(ModelError::UnknownMediaKind(raw)) if raw == "person"
        ));
    }
}

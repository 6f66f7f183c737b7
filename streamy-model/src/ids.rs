use crate::error::ModelError;
use crate::media_type::MediaKind;

/// Identity of a catalog entry. Upstream ids are only unique per media
/// kind, so the kind is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogId {
    pub id: u64,
    pub kind: MediaKind,
}

impl CatalogId {
    pub fn new(id: u64, kind: MediaKind) -> Self {
        Self { id, kind }
    }

    pub fn movie(id: u64) -> Self {
        Self::new(id, MediaKind::Movie)
    }

    pub fn series(id: u64) -> Self {
        Self::new(id, MediaKind::Series)
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind.wire_name(), self.id)
    }
}

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Build a key from a static, known-good literal.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Build a key from untrusted input, rejecting blank values.
            pub fn parse(raw: &str) -> Result<Self, ModelError> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ModelError::InvalidKey(format!(
                        "{} cannot be empty",
                        $label
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(
    /// Stable key of a home-feed section (e.g. `top-picks`).
    SectionKey,
    "section key"
);

string_key!(
    /// Logical name of one lookup in a feed batch. Results land in their
    /// slot regardless of network completion order.
    SlotKey,
    "slot key"
);

//! Storage backend ID type.

use crate::IdError;

// =============================================================================
// Storage ID
// =============================================================================

/// A single-character token naming a storage backend.
///
/// Membership in a particular alphabet is checked by the [`Codec`](crate::Codec)
/// that encodes it, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageId(char);

impl StorageId {
    /// Creates a storage ID from a character.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.0
    }

    /// Parses a storage ID from a string holding exactly one character.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(IdError::InvalidStorageId {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StorageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StorageId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<StorageId> for char {
    fn from(id: StorageId) -> Self {
        id.0
    }
}

impl serde::Serialize for StorageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for StorageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

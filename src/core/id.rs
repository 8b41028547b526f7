//! Identifier newtypes for cards, categories, and piles.
//!
//! The dataset schema carries string identifiers, so all three id types
//! wrap `String` rather than dense integers. Wrapping keeps the id
//! spaces from mixing: a `CardId` can never be passed where a `PileId`
//! is expected.
//!
//! ## Id Ownership
//!
//! - `CardId` and `CategoryId` are assigned by the dataset author and
//!   checked for global uniqueness at load time.
//! - `PileId` is caller-generated: the presentation layer mints one per
//!   created pile and uses it in every later action on that pile.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a hidden category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a pile.
///
/// Piles are created by the caller, so the caller supplies the id.
/// The engine only requires it to be distinct from every live pile id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PileId(String);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PileId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("card-7");
        assert_eq!(id.as_str(), "card-7");
        assert_eq!(format!("{}", id), "card-7");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(CardId::new("a"), CardId::from("a"));
        assert_ne!(CardId::new("a"), CardId::new("b"));
        assert_eq!(CategoryId::new("cat-1"), CategoryId::from("cat-1"));
        assert_eq!(PileId::new("p-1"), PileId::from("p-1"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = CardId::new("card-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"card-42\"");

        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

//! Card and category records.
//!
//! Both types are produced once by the dataset loader and never change
//! afterwards. A `Card` carries its hidden `category_id`; that field
//! must not cross the presentation boundary until the owning pile
//! completes (see `query::view` for the stripped projections).

use serde::{Deserialize, Serialize};

use super::id::{CardId, CategoryId};

/// A single sortable item.
///
/// `category_id` is the card's secret membership. The engine keeps it
/// for validation; the UI only ever sees `CardView`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Globally unique card identifier.
    pub id: CardId,

    /// Display text shown to the player.
    pub title: String,

    /// Hidden category membership.
    pub category_id: CategoryId,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            title: title.into(),
            category_id,
        }
    }
}

/// A hidden group of cards sharing a revealable name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Globally unique category identifier.
    pub id: CategoryId,

    /// Name revealed when a pile of this category completes.
    pub name: String,
}

impl Category {
    /// Create a new category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new() {
        let card = Card::new(CardId::new("card-1"), "Otter", CategoryId::new("cat-1"));
        assert_eq!(card.id.as_str(), "card-1");
        assert_eq!(card.title, "Otter");
        assert_eq!(card.category_id, CategoryId::new("cat-1"));
    }

    #[test]
    fn test_category_new() {
        let cat = Category::new(CategoryId::new("cat-1"), "River Animals");
        assert_eq!(cat.id.as_str(), "cat-1");
        assert_eq!(cat.name, "River Animals");
    }

    #[test]
    fn test_card_serde_round_trip() {
        let card = Card::new(CardId::new("card-1"), "Otter", CategoryId::new("cat-1"));
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}

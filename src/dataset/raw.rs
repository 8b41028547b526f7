//! Raw dataset schema.
//!
//! This is the shape the loader consumes, exactly as documented for the
//! external interface:
//!
//! ```json
//! {
//!   "categories": [
//!     { "id": "cat-1", "name": "River Animals",
//!       "cards": [ { "id": "card-1", "title": "Otter" } ] }
//!   ]
//! }
//! ```
//!
//! `RawDataset` is untrusted input: nothing about it has been checked
//! until `DatasetLoader::load` validates it.

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

/// An unvalidated categorized dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    /// Source categories with their nested cards.
    pub categories: Vec<RawCategory>,
}

/// One source category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: String,
    pub cards: Vec<RawCard>,
}

/// One source card, before its category id is injected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub id: String,
    pub title: String,
}

impl RawDataset {
    /// Parse the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fabricate a well-formed dataset of the given shape.
    ///
    /// Card ids are numbered globally (`card-1`, `card-2`, ...) so a
    /// 2 × 3 fixture yields `cat-1`: card-1..3 and `cat-2`: card-4..6.
    /// Intended for tests and development; production datasets come
    /// from `from_json`.
    #[must_use]
    pub fn synthetic(category_count: usize, category_size: usize) -> Self {
        let mut card_number = 0usize;

        let categories = (1..=category_count)
            .map(|c| RawCategory {
                id: format!("cat-{c}"),
                name: format!("Category {c}"),
                cards: (0..category_size)
                    .map(|_| {
                        card_number += 1;
                        RawCard {
                            id: format!("card-{card_number}"),
                            title: format!("Card {card_number}"),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }
}

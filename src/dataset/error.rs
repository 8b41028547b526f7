//! Load-time validation errors.
//!
//! All of these are fatal: the loader aborts on the first violation and
//! no engine state is constructed. Each variant names the offending
//! entity so dataset authors can find it.

use thiserror::Error;

use crate::core::id::{CardId, CategoryId};

/// Why a raw dataset was rejected.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input was not valid JSON for the dataset schema.
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A category id was empty or whitespace.
    #[error("category at index {index} has a blank id")]
    BlankCategoryId { index: usize },

    /// A category name was empty or whitespace.
    #[error("category '{category}' has a blank name")]
    BlankCategoryName { category: CategoryId },

    /// A card id was empty or whitespace.
    #[error("card at index {index} of category '{category}' has a blank id")]
    BlankCardId { category: CategoryId, index: usize },

    /// A card title was empty or whitespace.
    #[error("card '{card}' in category '{category}' has a blank title")]
    BlankCardTitle { category: CategoryId, card: CardId },

    /// Two categories share an id.
    #[error("duplicate category id '{id}'")]
    DuplicateCategoryId { id: CategoryId },

    /// Two cards share an id, possibly across categories.
    #[error("duplicate card id '{card}' (second occurrence in category '{category}')")]
    DuplicateCardId { category: CategoryId, card: CardId },

    /// Strict mode: wrong number of categories.
    #[error("expected {expected} categories, found {found}")]
    CategoryCountMismatch { expected: usize, found: usize },

    /// Strict mode: a category with the wrong number of cards.
    #[error("category '{category}' has {found} cards, expected {expected}")]
    CategorySizeMismatch {
        category: CategoryId,
        expected: usize,
        found: usize,
    },
}

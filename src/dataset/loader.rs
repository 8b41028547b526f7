//! Dataset validation, flattening, and shuffling.
//!
//! ## Pipeline
//!
//! 1. **Validate** — shape and id-uniqueness checks always run;
//!    cardinality checks run in strict mode only. The first violation
//!    aborts the load.
//! 2. **Flatten** — nested category cards become one flat list with
//!    the hidden `category_id` injected per card.
//! 3. **Shuffle** — an unbiased permutation of the flat list via the
//!    injected `ShuffleRng`. The raw input is never mutated.
//!
//! Relaxed mode exists so the same loader serves incomplete or
//! synthetic datasets; it never skips shape or uniqueness checks.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::card::{Card, Category};
use crate::core::config::PuzzleConfig;
use crate::core::id::{CardId, CategoryId};
use crate::core::rng::ShuffleRng;
use crate::core::state::GameState;
use crate::rules::moves::Puzzle;

use super::error::DatasetError;
use super::raw::RawDataset;

/// A validated, flattened, shuffled dataset.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    /// The configuration the dataset was validated against.
    pub config: PuzzleConfig,

    /// Categories in source order.
    pub categories: Vector<Category>,

    /// All cards in randomized display order.
    pub cards: Vector<Card>,
}

impl LoadedDataset {
    /// Split into the two runtime halves: the immutable `Puzzle`
    /// context and a fresh `GameState`.
    #[must_use]
    pub fn into_game(self) -> (Puzzle, GameState) {
        (
            Puzzle::new(self.categories),
            GameState::new(self.config, self.cards),
        )
    }
}

/// Validating dataset loader.
///
/// Strict by default: the dataset must match the configured
/// cardinalities exactly. `relaxed()` drops only the cardinality
/// checks.
///
/// ## Example
///
/// ```
/// use pilesort::{DatasetLoader, PuzzleConfig, RawDataset, ShuffleRng};
///
/// let config = PuzzleConfig::new(2, 3);
/// let raw = RawDataset::synthetic(2, 3);
/// let mut rng = ShuffleRng::new(42);
///
/// let loaded = DatasetLoader::new(config).load(&raw, &mut rng).unwrap();
/// assert_eq!(loaded.cards.len(), 6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DatasetLoader {
    config: PuzzleConfig,
    strict: bool,
}

impl DatasetLoader {
    /// Create a strict loader for the given puzzle shape.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            strict: true,
        }
    }

    /// Skip the cardinality checks (for partial or synthetic
    /// datasets). Shape and uniqueness checks still apply.
    #[must_use]
    pub fn relaxed(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Validate a raw dataset and produce the randomized card list.
    pub fn load(
        &self,
        raw: &RawDataset,
        rng: &mut ShuffleRng,
    ) -> Result<LoadedDataset, DatasetError> {
        self.validate(raw)?;

        let categories: Vector<Category> = raw
            .categories
            .iter()
            .map(|cat| Category::new(CategoryId::new(&*cat.id), &*cat.name))
            .collect();

        let mut cards: Vec<Card> = raw
            .categories
            .iter()
            .flat_map(|cat| {
                cat.cards.iter().map(|card| {
                    Card::new(
                        CardId::new(&*card.id),
                        &*card.title,
                        CategoryId::new(&*cat.id),
                    )
                })
            })
            .collect();

        rng.shuffle(&mut cards);

        tracing::debug!(
            categories = categories.len(),
            cards = cards.len(),
            strict = self.strict,
            "dataset loaded"
        );

        Ok(LoadedDataset {
            config: self.config,
            categories,
            cards: cards.into_iter().collect(),
        })
    }

    /// Parse the JSON wire format, then load.
    pub fn load_str(
        &self,
        json: &str,
        rng: &mut ShuffleRng,
    ) -> Result<LoadedDataset, DatasetError> {
        let raw = RawDataset::from_json(json)?;
        self.load(&raw, rng)
    }

    fn validate(&self, raw: &RawDataset) -> Result<(), DatasetError> {
        if self.strict && raw.categories.len() != self.config.category_count {
            return Err(DatasetError::CategoryCountMismatch {
                expected: self.config.category_count,
                found: raw.categories.len(),
            });
        }

        let mut seen_categories: FxHashSet<&str> = FxHashSet::default();
        let mut seen_cards: FxHashSet<&str> = FxHashSet::default();

        for (index, category) in raw.categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(DatasetError::BlankCategoryId { index });
            }

            let category_id = CategoryId::new(&*category.id);

            if category.name.trim().is_empty() {
                return Err(DatasetError::BlankCategoryName {
                    category: category_id,
                });
            }

            if !seen_categories.insert(category.id.as_str()) {
                return Err(DatasetError::DuplicateCategoryId { id: category_id });
            }

            if self.strict && category.cards.len() != self.config.category_size {
                return Err(DatasetError::CategorySizeMismatch {
                    category: category_id,
                    expected: self.config.category_size,
                    found: category.cards.len(),
                });
            }

            for (card_index, card) in category.cards.iter().enumerate() {
                if card.id.trim().is_empty() {
                    return Err(DatasetError::BlankCardId {
                        category: category_id.clone(),
                        index: card_index,
                    });
                }

                if card.title.trim().is_empty() {
                    return Err(DatasetError::BlankCardTitle {
                        category: category_id.clone(),
                        card: CardId::new(&*card.id),
                    });
                }

                if !seen_cards.insert(card.id.as_str()) {
                    return Err(DatasetError::DuplicateCardId {
                        category: category_id.clone(),
                        card: CardId::new(&*card.id),
                    });
                }
            }
        }

        Ok(())
    }
}

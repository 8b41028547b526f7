//! Puzzle configuration.
//!
//! The cardinalities are configuration, not hardcoded business logic:
//! the same engine serves the canonical 45 × 45 puzzle and small
//! synthetic fixtures without code changes.

use serde::{Deserialize, Serialize};

/// Canonical number of categories in the shipped dataset.
pub const CANONICAL_CATEGORY_COUNT: usize = 45;

/// Canonical number of cards per category in the shipped dataset.
pub const CANONICAL_CATEGORY_SIZE: usize = 45;

/// Shape of the puzzle: how many categories, and how many cards each.
///
/// A pile completes exactly when it holds `category_size` cards, and a
/// strict dataset load requires exactly `category_count` categories of
/// exactly `category_size` cards each.
///
/// ## Example
///
/// ```
/// use pilesort::PuzzleConfig;
///
/// let canonical = PuzzleConfig::default();
/// assert_eq!(canonical.total_cards(), 2025);
///
/// let fixture = PuzzleConfig::new(2, 3);
/// assert_eq!(fixture.total_cards(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of hidden categories.
    pub category_count: usize,

    /// Cards per category; also the pile completion capacity.
    pub category_size: usize,
}

impl PuzzleConfig {
    /// Create a new configuration.
    ///
    /// Piles are always created with two cards, so `category_size`
    /// must leave room for at least one addition.
    #[must_use]
    pub fn new(category_count: usize, category_size: usize) -> Self {
        assert!(category_count > 0, "Must have at least 1 category");
        assert!(
            category_size > 2,
            "Category size must exceed the two-card pile seed"
        );

        Self {
            category_count,
            category_size,
        }
    }

    /// Total size of the card universe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.category_count * self.category_size
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(CANONICAL_CATEGORY_COUNT, CANONICAL_CATEGORY_SIZE)
    }
}

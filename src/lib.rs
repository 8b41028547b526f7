//! # pilesort
//!
//! Game-state engine for a discovery grouping puzzle: a fixed universe
//! of cards, each secretly belonging to one of several equally sized
//! hidden categories, is sorted into piles purely by trial-and-error
//! feedback. Canonical shape: 45 categories × 45 cards = 2025 cards.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `GameState::apply` maps `(state, action)`
//!    to a new snapshot. Nothing is mutated in place; `im` persistent
//!    collections make snapshots O(1) to produce.
//!
//! 2. **Validate, then commit**: legality lives in `rules::gate`, the
//!    transition in `core::state`, and `rules::moves` composes the two
//!    into `try_*` operations with three-valued outcomes — accepted,
//!    rejected (a counted mistake), or ignored (invalid reference,
//!    never scored).
//!
//! 3. **Configuration over convention**: cardinalities come from
//!    `PuzzleConfig`; the same engine runs the shipped 45 × 45 dataset
//!    and 2 × 3 test fixtures.
//!
//! 4. **Injected randomness**: the one random act — the display-order
//!    shuffle — draws from a caller-supplied `ShuffleRng`, seedable in
//!    tests, entropy-backed in production.
//!
//! ## Modules
//!
//! - `core`: ids, cards, config, RNG, actions, state, transitions
//! - `dataset`: schema, validation, flatten-and-shuffle pipeline
//! - `rules`: legality gate and the `try_*` caller composition
//! - `query`: derived read views and presentation projections
//!
//! ## Quick start
//!
//! ```
//! use pilesort::{CardId, DatasetLoader, PileId, PuzzleConfig, RawDataset, ShuffleRng};
//!
//! let config = PuzzleConfig::new(2, 3);
//! let raw = RawDataset::synthetic(2, 3);
//! let mut rng = ShuffleRng::new(42);
//!
//! let (puzzle, state) = DatasetLoader::new(config)
//!     .load(&raw, &mut rng)
//!     .expect("valid dataset")
//!     .into_game();
//!
//! let (state, outcome) = puzzle.try_create_pile(
//!     &state,
//!     PileId::new("p1"),
//!     &CardId::new("card-1"),
//!     &CardId::new("card-2"),
//! );
//! assert!(outcome.is_accepted());
//! assert_eq!(pilesort::query::ungrouped_cards(&state).len(), 4);
//! ```

pub mod core;
pub mod dataset;
pub mod query;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ApplyOutcome, Card, CardId, Category, CategoryId, GameState, IgnoredReason, Pile,
    PileId, PuzzleConfig, ShuffleRng, CANONICAL_CATEGORY_COUNT, CANONICAL_CATEGORY_SIZE,
};

pub use crate::dataset::{DatasetError, DatasetLoader, LoadedDataset, RawCard, RawCategory, RawDataset};

pub use crate::rules::{MoveOutcome, Puzzle, RejectReason};

pub use crate::query::{pile_view, pile_views, ungrouped_card_views, CardView, PileView};

//! Core engine types: identifiers, cards, state, actions, RNG,
//! configuration.
//!
//! Everything here is dataset-agnostic. The canonical 45 × 45 puzzle
//! and small test fixtures run through the same code, configured via
//! `PuzzleConfig`.

pub mod action;
pub mod card;
pub mod config;
pub mod id;
pub mod rng;
pub mod state;

pub use action::{Action, ApplyOutcome, IgnoredReason};
pub use card::{Card, Category};
pub use config::{PuzzleConfig, CANONICAL_CATEGORY_COUNT, CANONICAL_CATEGORY_SIZE};
pub use id::{CardId, CategoryId, PileId};
pub use rng::ShuffleRng;
pub use state::{GameState, Pile};

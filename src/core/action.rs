//! Engine actions and transition outcomes.
//!
//! Actions are plain tagged records. The engine interprets them in
//! `GameState::apply`; it never checks gameplay legality (that is the
//! `rules::gate` layer's job, composed in `rules::moves`). What the
//! engine does check are reference conditions — unknown ids, duplicate
//! pile ids, already-piled cards — and those never mutate state.
//!
//! Every transition reports an `ApplyOutcome`, so callers and tests can
//! tell "accepted" from "ignored invalid action" instead of inferring
//! it from state diffs.

use serde::{Deserialize, Serialize};

use super::id::{CardId, PileId};

/// A state-changing request.
///
/// Preconditions in the variant docs are the caller's responsibility
/// (via `rules::gate`); the engine's own checks are limited to
/// reference validity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Create a pile from two cards of the same category.
    ///
    /// The caller generates `pile_id` and must have gated the category
    /// match. Both cards must exist and be ungrouped.
    CreatePile {
        pile_id: PileId,
        first: CardId,
        second: CardId,
    },

    /// Append a card to an open pile.
    ///
    /// `revealed_name` is the category name to expose if this addition
    /// completes the pile. The engine has no category metadata, so the
    /// caller supplies it.
    AddCardToPile {
        card: CardId,
        pile: PileId,
        revealed_name: Option<String>,
    },

    /// Destroy a pile, returning its cards to the ungrouped pool.
    SplitPile { pile: PileId },

    /// Count one rejected grouping attempt.
    IncrementMistake,

    /// Clear piles and counters, keeping the card ordering unchanged.
    ResetGame,
}

/// What a transition did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyOutcome {
    /// The action was applied.
    Applied,

    /// The action was applied and the addition completed the pile.
    Completed(PileId),

    /// The action referenced something invalid; state is unchanged.
    Ignored(IgnoredReason),
}

impl ApplyOutcome {
    /// True for `Applied` and `Completed`.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, ApplyOutcome::Ignored(_))
    }
}

/// Why an action was ignored.
///
/// These are caller/wiring defects, not gameplay mistakes: none of
/// them touch the mistake counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredReason {
    /// The card id does not exist in the universe.
    UnknownCard(CardId),

    /// The pile id does not name a live pile.
    UnknownPile(PileId),

    /// The target pile is complete and locked.
    PileComplete(PileId),

    /// A pile with this id already exists.
    DuplicatePileId(PileId),

    /// The card is already in a pile (or was supplied twice).
    CardAlreadyPiled(CardId),
}

//! Caller-side composition of gate and engine.
//!
//! `Puzzle` owns the immutable category list and turns raw UI intents
//! into validated dispatches. Its two `try_*` operations distinguish
//! three outcomes:
//!
//! - **Accepted** — the gate passed and the engine applied the action.
//! - **Rejected** — a genuine gameplay mistake (category mismatch); an
//!   `IncrementMistake` was dispatched before returning.
//! - **Ignored** — an invalid reference (unknown id, complete pile,
//!   already-piled card). Not scored against the player; a correctly
//!   wired UI never produces these, so they are logged here at debug
//!   level.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::action::{Action, ApplyOutcome, IgnoredReason};
use crate::core::card::Category;
use crate::core::id::{CardId, CategoryId, PileId};
use crate::core::state::GameState;

use super::gate;

/// Result of a `try_*` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; `completed` is true when it finished a
    /// pile.
    Accepted { completed: bool },

    /// A gameplay mistake — the mistake counter was incremented.
    Rejected(RejectReason),

    /// An invalid reference — state unchanged, nothing scored.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// True for either `Accepted` form.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// True when the move was counted as a mistake.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Why a move was counted as a mistake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The proposed cards do not share a category.
    CategoryMismatch,
}

/// Immutable puzzle context: the loaded categories plus a name index.
///
/// Pairs with a `GameState`: the state holds everything that evolves,
/// the puzzle holds the category metadata the engine is not allowed to
/// see (it is what supplies `revealed_name` on completion).
#[derive(Clone, Debug)]
pub struct Puzzle {
    categories: Vector<Category>,
    names: FxHashMap<CategoryId, String>,
}

impl Puzzle {
    /// Create a puzzle context from loaded categories.
    #[must_use]
    pub fn new(categories: Vector<Category>) -> Self {
        let names = categories
            .iter()
            .map(|category| (category.id.clone(), category.name.clone()))
            .collect();

        Self { categories, names }
    }

    /// The loaded categories in source order.
    #[must_use]
    pub fn categories(&self) -> &Vector<Category> {
        &self.categories
    }

    /// Resolve a category name.
    #[must_use]
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Attempt to create a pile from two ungrouped cards.
    ///
    /// A category mismatch is a mistake; unknown or already-piled
    /// cards and a duplicate pile id are ignored without penalty.
    #[must_use]
    pub fn try_create_pile(
        &self,
        state: &GameState,
        pile_id: PileId,
        first: &CardId,
        second: &CardId,
    ) -> (GameState, MoveOutcome) {
        let Some(a) = state.card(first) else {
            return ignored(state, IgnoredReason::UnknownCard(first.clone()));
        };
        let Some(b) = state.card(second) else {
            return ignored(state, IgnoredReason::UnknownCard(second.clone()));
        };

        if a.category_id != b.category_id {
            let (next, _) = state.apply(&Action::IncrementMistake);
            return (next, MoveOutcome::Rejected(RejectReason::CategoryMismatch));
        }

        let (next, outcome) = state.apply(&Action::CreatePile {
            pile_id,
            first: first.clone(),
            second: second.clone(),
        });
        (next, into_move_outcome(outcome))
    }

    /// Attempt to add a card to an open pile.
    ///
    /// Only a category mismatch against a live, open pile counts as a
    /// mistake. Unknown ids and complete-pile targets are ignored
    /// without penalty.
    #[must_use]
    pub fn try_add_card_to_pile(
        &self,
        state: &GameState,
        card_id: &CardId,
        pile_id: &PileId,
    ) -> (GameState, MoveOutcome) {
        let Some(card) = state.card(card_id) else {
            return ignored(state, IgnoredReason::UnknownCard(card_id.clone()));
        };
        let Some(pile) = state.pile(pile_id) else {
            return ignored(state, IgnoredReason::UnknownPile(pile_id.clone()));
        };

        if pile.is_complete {
            return ignored(state, IgnoredReason::PileComplete(pile_id.clone()));
        }

        if !gate::can_accept(card, pile, state) {
            let (next, _) = state.apply(&Action::IncrementMistake);
            return (next, MoveOutcome::Rejected(RejectReason::CategoryMismatch));
        }

        // The engine has no category metadata, so the revealed name is
        // resolved here, only when this addition would complete the pile.
        let revealed_name = if gate::would_complete(pile, state.config()) {
            self.category_name(&card.category_id).map(str::to_owned)
        } else {
            None
        };

        let (next, outcome) = state.apply(&Action::AddCardToPile {
            card: card_id.clone(),
            pile: pile_id.clone(),
            revealed_name,
        });
        (next, into_move_outcome(outcome))
    }
}

fn into_move_outcome(outcome: ApplyOutcome) -> MoveOutcome {
    match outcome {
        ApplyOutcome::Applied => MoveOutcome::Accepted { completed: false },
        ApplyOutcome::Completed(_) => MoveOutcome::Accepted { completed: true },
        ApplyOutcome::Ignored(reason) => {
            tracing::debug!(?reason, "move ignored by engine");
            MoveOutcome::Ignored(reason)
        }
    }
}

fn ignored(state: &GameState, reason: IgnoredReason) -> (GameState, MoveOutcome) {
    tracing::debug!(?reason, "move ignored");
    (state.clone(), MoveOutcome::Ignored(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PuzzleConfig;
    use crate::dataset::{DatasetLoader, RawDataset};
    use crate::core::rng::ShuffleRng;

    fn game_2x3() -> (Puzzle, GameState) {
        let raw = RawDataset::synthetic(2, 3);
        let mut rng = ShuffleRng::new(42);
        DatasetLoader::new(PuzzleConfig::new(2, 3))
            .load(&raw, &mut rng)
            .unwrap()
            .into_game()
    }

    #[test]
    fn test_try_create_pile_success() {
        let (puzzle, state) = game_2x3();
        let (next, outcome) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-2"),
        );

        assert_eq!(outcome, MoveOutcome::Accepted { completed: false });
        assert_eq!(next.piles().len(), 1);
        assert_eq!(next.mistakes(), 0);
    }

    #[test]
    fn test_try_create_pile_mismatch_is_mistake() {
        let (puzzle, state) = game_2x3();
        let (next, outcome) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-4"),
        );

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(RejectReason::CategoryMismatch)
        );
        assert!(next.piles().is_empty());
        assert_eq!(next.mistakes(), 1);
    }

    #[test]
    fn test_try_create_pile_unknown_card_no_mistake() {
        let (puzzle, state) = game_2x3();
        let (next, outcome) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-99"),
        );

        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoredReason::UnknownCard(CardId::new("card-99")))
        );
        assert!(next.piles().is_empty());
        assert_eq!(next.mistakes(), 0);
    }

    #[test]
    fn test_try_add_card_completes_with_revealed_name() {
        let (puzzle, state) = game_2x3();
        let (state, _) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-2"),
        );
        let (next, outcome) =
            puzzle.try_add_card_to_pile(&state, &CardId::new("card-3"), &PileId::new("p1"));

        assert_eq!(outcome, MoveOutcome::Accepted { completed: true });

        let pile = next.pile(&PileId::new("p1")).unwrap();
        assert!(pile.is_complete);
        assert_eq!(pile.revealed_category_name.as_deref(), Some("Category 1"));
        assert_eq!(next.completed_count(), 1);
    }

    #[test]
    fn test_try_add_card_mismatch_is_mistake() {
        let (puzzle, state) = game_2x3();
        let (state, _) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-2"),
        );
        let (next, outcome) =
            puzzle.try_add_card_to_pile(&state, &CardId::new("card-4"), &PileId::new("p1"));

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(RejectReason::CategoryMismatch)
        );
        assert_eq!(next.mistakes(), 1);
        assert_eq!(next.pile(&PileId::new("p1")).unwrap().len(), 2);
    }

    #[test]
    fn test_try_add_card_complete_pile_no_mistake() {
        let (puzzle, state) = game_2x3();
        let (state, _) = puzzle.try_create_pile(
            &state,
            PileId::new("p1"),
            &CardId::new("card-1"),
            &CardId::new("card-2"),
        );
        let (state, _) =
            puzzle.try_add_card_to_pile(&state, &CardId::new("card-3"), &PileId::new("p1"));

        // card-4 is the right shape of wiring bug: live card, locked pile.
        let (next, outcome) =
            puzzle.try_add_card_to_pile(&state, &CardId::new("card-4"), &PileId::new("p1"));

        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoredReason::PileComplete(PileId::new("p1")))
        );
        assert_eq!(next.mistakes(), 0);
    }

    #[test]
    fn test_try_add_card_unknown_pile_no_mistake() {
        let (puzzle, state) = game_2x3();
        let (next, outcome) =
            puzzle.try_add_card_to_pile(&state, &CardId::new("card-1"), &PileId::new("nope"));

        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoredReason::UnknownPile(PileId::new("nope")))
        );
        assert_eq!(next.mistakes(), 0);
    }

    #[test]
    fn test_category_name_lookup() {
        let (puzzle, _) = game_2x3();

        assert_eq!(
            puzzle.category_name(&CategoryId::new("cat-1")),
            Some("Category 1")
        );
        assert_eq!(puzzle.category_name(&CategoryId::new("cat-9")), None);
    }
}

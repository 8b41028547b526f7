//! State-transition integration tests.
//!
//! Drive the engine through action sequences and check the state
//! invariants hold at every step:
//!
//! - a card id appears in at most one pile,
//! - pile size never exceeds `category_size`, and equals it iff the
//!   pile is complete,
//! - `completed_count` equals the number of complete piles,
//! - reset clears piles and counters but keeps the card ordering.

use pilesort::{
    Action, ApplyOutcome, CardId, DatasetLoader, GameState, PileId, Puzzle, PuzzleConfig,
    RawDataset, ShuffleRng,
};
use std::collections::HashMap;

fn game(categories: usize, size: usize) -> (Puzzle, GameState) {
    let raw = RawDataset::synthetic(categories, size);
    let mut rng = ShuffleRng::new(42);
    DatasetLoader::new(PuzzleConfig::new(categories, size))
        .load(&raw, &mut rng)
        .unwrap()
        .into_game()
}

/// Assert the cross-pile invariants on a snapshot.
fn assert_invariants(state: &GameState) {
    let size = state.config().category_size;

    let mut complete = 0u32;
    let mut membership: HashMap<&CardId, u32> = HashMap::new();

    for pile in state.piles() {
        assert!(pile.len() <= size, "pile over capacity");
        assert_eq!(pile.is_complete, pile.len() == size);
        assert_eq!(pile.is_complete, pile.revealed_category_name.is_some());

        complete += u32::from(pile.is_complete);
        for id in &pile.card_ids {
            *membership.entry(id).or_default() += 1;
        }
    }

    assert_eq!(state.completed_count(), complete);
    for (id, count) in membership {
        assert_eq!(count, 1, "card {id} appears in {count} piles");
    }
}

/// Fill one category's pile to completion, checking invariants along
/// the way.
#[test]
fn test_fill_pile_to_completion() {
    let (puzzle, mut state) = game(2, 5);

    let (next, _) = puzzle.try_create_pile(
        &state,
        PileId::new("p1"),
        &CardId::new("card-1"),
        &CardId::new("card-2"),
    );
    state = next;
    assert_invariants(&state);

    for n in 3..=5 {
        let id = CardId::new(format!("card-{n}"));
        let (next, outcome) = puzzle.try_add_card_to_pile(&state, &id, &PileId::new("p1"));
        state = next;
        assert_invariants(&state);

        let completed = n == 5;
        assert_eq!(
            outcome,
            pilesort::MoveOutcome::Accepted { completed },
            "card-{n}"
        );
    }

    assert_eq!(state.completed_count(), 1);
    assert_eq!(
        state
            .pile(&PileId::new("p1"))
            .unwrap()
            .revealed_category_name
            .as_deref(),
        Some("Category 1")
    );
}

/// Split decrements `completed_count` by one for a complete pile and
/// leaves it unchanged for an open pile.
#[test]
fn test_split_count_semantics() {
    let (puzzle, state) = game(2, 3);

    // Open pile.
    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("open"),
        &CardId::new("card-4"),
        &CardId::new("card-5"),
    );

    // Complete pile.
    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("done"),
        &CardId::new("card-1"),
        &CardId::new("card-2"),
    );
    let (state, _) = puzzle.try_add_card_to_pile(&state, &CardId::new("card-3"), &PileId::new("done"));
    assert_eq!(state.completed_count(), 1);
    assert_invariants(&state);

    let (state, _) = state.apply(&Action::SplitPile {
        pile: PileId::new("open"),
    });
    assert_eq!(state.completed_count(), 1);
    assert_invariants(&state);

    let (state, _) = state.apply(&Action::SplitPile {
        pile: PileId::new("done"),
    });
    assert_eq!(state.completed_count(), 0);
    assert_invariants(&state);
    assert!(state.piles().is_empty());
}

/// Split returns the cards to the ungrouped pool.
#[test]
fn test_split_returns_cards() {
    let (puzzle, state) = game(2, 3);

    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("p1"),
        &CardId::new("card-1"),
        &CardId::new("card-2"),
    );
    assert_eq!(pilesort::query::ungrouped_cards(&state).len(), 4);

    let (state, _) = state.apply(&Action::SplitPile {
        pile: PileId::new("p1"),
    });
    assert_eq!(pilesort::query::ungrouped_cards(&state).len(), 6);

    // The pile identity is destroyed, not reopened.
    assert!(state.pile(&PileId::new("p1")).is_none());
}

/// Reset clears progress but never reshuffles.
#[test]
fn test_reset_game() {
    let (puzzle, state) = game(2, 3);
    let order_before: Vec<CardId> = state.cards().iter().map(|c| c.id.clone()).collect();

    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("p1"),
        &CardId::new("card-1"),
        &CardId::new("card-2"),
    );
    let (state, _) = puzzle.try_add_card_to_pile(&state, &CardId::new("card-3"), &PileId::new("p1"));
    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("p2"),
        &CardId::new("card-4"),
        &CardId::new("card-1"),
    );
    assert_eq!(state.completed_count(), 1);

    let (state, outcome) = state.apply(&Action::ResetGame);
    assert_eq!(outcome, ApplyOutcome::Applied);
    assert!(state.piles().is_empty());
    assert_eq!(state.mistakes(), 0);
    assert_eq!(state.completed_count(), 0);

    let order_after: Vec<CardId> = state.cards().iter().map(|c| c.id.clone()).collect();
    assert_eq!(order_before, order_after);
}

/// Ignored actions return an unchanged snapshot, distinguishable from
/// accepted ones by outcome code alone.
#[test]
fn test_ignored_actions_leave_state_intact() {
    let (_, state) = game(2, 3);

    let cases = [
        Action::AddCardToPile {
            card: CardId::new("card-1"),
            pile: PileId::new("ghost"),
            revealed_name: None,
        },
        Action::SplitPile {
            pile: PileId::new("ghost"),
        },
        Action::CreatePile {
            pile_id: PileId::new("p1"),
            first: CardId::new("card-1"),
            second: CardId::new("card-404"),
        },
    ];

    for action in &cases {
        let (next, outcome) = state.apply(action);
        assert!(
            matches!(outcome, ApplyOutcome::Ignored(_)),
            "expected ignore for {action:?}"
        );
        assert!(next.piles().is_empty());
        assert_eq!(next.mistakes(), 0);
        assert_eq!(next.completed_count(), 0);
    }
}

/// Completion is monotonic: once a pile completes, additions are
/// refused until the pile is destroyed.
#[test]
fn test_completion_is_terminal_for_additions() {
    let (puzzle, state) = game(2, 3);

    let (state, _) = puzzle.try_create_pile(
        &state,
        PileId::new("p1"),
        &CardId::new("card-1"),
        &CardId::new("card-2"),
    );
    let (state, _) = puzzle.try_add_card_to_pile(&state, &CardId::new("card-3"), &PileId::new("p1"));
    assert!(state.pile(&PileId::new("p1")).unwrap().is_complete);

    // Direct engine dispatch, bypassing the try helpers: still refused.
    let (state, outcome) = state.apply(&Action::AddCardToPile {
        card: CardId::new("card-4"),
        pile: PileId::new("p1"),
        revealed_name: None,
    });
    assert!(matches!(outcome, ApplyOutcome::Ignored(_)));
    assert!(state.pile(&PileId::new("p1")).unwrap().is_complete);
    assert_eq!(state.pile(&PileId::new("p1")).unwrap().len(), 3);
}

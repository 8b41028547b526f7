//! Legality predicates for proposed grouping moves.
//!
//! These are pure yes/no questions over a state snapshot. They never
//! mutate, never log, and never fail — the caller composition in
//! `rules::moves` consults them before dispatching any state-changing
//! action. The engine itself trusts the gate: it does not re-derive
//! category homogeneity.

use crate::core::card::Card;
use crate::core::config::PuzzleConfig;
use crate::core::id::CategoryId;
use crate::core::state::{GameState, Pile};

/// Category a pile is collecting, derived from its first card.
///
/// `None` for an empty pile (defensive — the engine never produces
/// one, since piles are always seeded with two cards) or for a first
/// id that no longer resolves.
#[must_use]
pub fn pile_category<'a>(pile: &Pile, state: &'a GameState) -> Option<&'a CategoryId> {
    let first = pile.card_ids.front()?;
    state.card(first).map(|card| &card.category_id)
}

/// Whether a pile would accept a card: empty, or same category.
#[must_use]
pub fn can_accept(card: &Card, pile: &Pile, state: &GameState) -> bool {
    match pile_category(pile, state) {
        Some(category) => *category == card.category_id,
        None => true,
    }
}

/// Whether one more card would complete the pile.
#[must_use]
pub fn would_complete(pile: &Pile, config: PuzzleConfig) -> bool {
    pile.len() + 1 == config.category_size
}

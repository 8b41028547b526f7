//! Derived read-only views over a state snapshot.
//!
//! Every function here is pure: it computes an answer from the
//! snapshot it is given and mutates nothing. The presentation layer
//! calls these on every render; `view` holds the projections that
//! strip hidden fields before data crosses that boundary.

pub mod view;

pub use view::{pile_view, pile_views, ungrouped_card_views, CardView, PileView};

use rustc_hash::FxHashSet;

use crate::core::card::{Card, Category};
use crate::core::id::{CardId, CategoryId, PileId};
use crate::core::state::{GameState, Pile};

/// Cards not currently in any pile, in display order.
#[must_use]
pub fn ungrouped_cards(state: &GameState) -> Vec<&Card> {
    let piled: FxHashSet<&CardId> = state
        .piles()
        .iter()
        .flat_map(|pile| pile.card_ids.iter())
        .collect();

    state
        .cards()
        .iter()
        .filter(|card| !piled.contains(&card.id))
        .collect()
}

/// A pile's cards in insertion order.
///
/// Ids that fail to resolve are skipped rather than surfaced — an
/// unresolvable member is a wiring defect, not a render error.
#[must_use]
pub fn pile_cards<'a>(pile_id: &PileId, state: &'a GameState) -> Vec<&'a Card> {
    let Some(pile) = state.pile(pile_id) else {
        return Vec::new();
    };

    pile.card_ids
        .iter()
        .filter_map(|id| state.card(id))
        .collect()
}

/// Look up a category's revealable name.
#[must_use]
pub fn category_name_of<'a>(
    category_id: &CategoryId,
    categories: &'a im::Vector<Category>,
) -> Option<&'a str> {
    categories
        .iter()
        .find(|category| &category.id == category_id)
        .map(|category| category.name.as_str())
}

/// Total cards sitting in piles.
///
/// Every insertion was gated, so every piled card is correctly placed.
#[must_use]
pub fn correctly_placed_count(state: &GameState) -> usize {
    state.piles().iter().map(Pile::len).sum()
}

/// Overall progress as a rounded percentage of the card universe
/// locked into complete piles. `0` for an empty universe.
#[must_use]
pub fn completion_percentage(state: &GameState) -> u32 {
    let total = state.cards().len();
    if total == 0 {
        return 0;
    }

    let placed = state.completed_count() as f64 * state.config().category_size as f64;
    ((placed / total as f64) * 100.0).round() as u32
}

/// The pile holding a card, if any.
#[must_use]
pub fn pile_containing<'a>(card_id: &CardId, state: &'a GameState) -> Option<&'a Pile> {
    state.piles().iter().find(|pile| pile.contains(card_id))
}

//! Presentation projections with hidden fields stripped.
//!
//! A `Card`'s `category_id` is secret until its pile completes. Rather
//! than trusting the UI not to look, the data that crosses the
//! presentation boundary is a projection type that does not carry the
//! field at all. The only category information a view exposes is
//! `revealed_category_name`, which the engine sets on completion.

use serde::Serialize;

use crate::core::card::Card;
use crate::core::id::{CardId, PileId};
use crate::core::state::{GameState, Pile};

use super::pile_cards;

/// A card as the player sees it: id and title only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub title: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
        }
    }
}

/// A pile as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PileView {
    pub id: PileId,
    pub cards: Vec<CardView>,
    pub is_complete: bool,
    pub revealed_category_name: Option<String>,
}

impl PileView {
    fn project(pile: &Pile, state: &GameState) -> Self {
        Self {
            id: pile.id.clone(),
            cards: pile_cards(&pile.id, state)
                .into_iter()
                .map(CardView::from)
                .collect(),
            is_complete: pile.is_complete,
            revealed_category_name: pile.revealed_category_name.clone(),
        }
    }
}

/// Ungrouped cards, projected for rendering.
#[must_use]
pub fn ungrouped_card_views(state: &GameState) -> Vec<CardView> {
    super::ungrouped_cards(state)
        .into_iter()
        .map(CardView::from)
        .collect()
}

/// All piles, projected for rendering.
#[must_use]
pub fn pile_views(state: &GameState) -> Vec<PileView> {
    state
        .piles()
        .iter()
        .map(|pile| PileView::project(pile, state))
        .collect()
}

/// A single pile, projected for rendering.
#[must_use]
pub fn pile_view(pile_id: &PileId, state: &GameState) -> Option<PileView> {
    state
        .pile(pile_id)
        .map(|pile| PileView::project(pile, state))
}

//! Game state and the pure transition function.
//!
//! ## Snapshot model
//!
//! `GameState` is a value. `apply` never mutates the receiver; it
//! builds a new snapshot and returns it together with an
//! `ApplyOutcome`. The `im` persistent collections make this cheap:
//! untouched piles and the whole card universe are shared structurally
//! between snapshots.
//!
//! ## Invariants
//!
//! After every transition:
//! - a card id appears in at most one pile,
//! - `is_complete` holds iff a pile has exactly `category_size` cards,
//! - `revealed_category_name` is set iff `is_complete`,
//! - `completed_count` equals the number of complete piles.
//!
//! Category homogeneity inside a pile is *not* re-derived here — every
//! insertion is gated through `rules::gate` by the caller composition
//! before the engine sees it.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::{Action, ApplyOutcome, IgnoredReason};
use super::card::Card;
use super::config::PuzzleConfig;
use super::id::{CardId, PileId};

/// A user-formed group of cards.
///
/// Created with exactly two cards, grows by one per accepted move, and
/// is destroyed (not reopened) by a split. Once `is_complete` flips
/// true it stays true for the life of the pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    /// Caller-generated pile identifier.
    pub id: PileId,

    /// Member card ids in insertion order.
    pub card_ids: Vector<CardId>,

    /// True once the pile holds `category_size` cards. Terminal for
    /// additions.
    pub is_complete: bool,

    /// Category name exposed on completion; `None` while open.
    pub revealed_category_name: Option<String>,
}

impl Pile {
    /// Seed a new open pile with its first two cards.
    fn seed(id: PileId, first: CardId, second: CardId) -> Self {
        let mut card_ids = Vector::new();
        card_ids.push_back(first);
        card_ids.push_back(second);

        Self {
            id,
            card_ids,
            is_complete: false,
            revealed_category_name: None,
        }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    /// True if the pile holds no cards. The engine never produces an
    /// empty pile; this exists for defensive callers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }

    /// Whether the pile contains a card.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.card_ids.iter().any(|id| id == card_id)
    }
}

/// Complete in-memory game state.
///
/// The card universe is immutable after construction; only `piles` and
/// the two counters evolve. Fields that carry invariants are private —
/// all change flows through `apply`.
#[derive(Clone, Debug)]
pub struct GameState {
    config: PuzzleConfig,

    /// Full card set in display order. Never changes after `new`.
    cards: Vector<Card>,

    /// Id index over `cards`, shared structurally across snapshots.
    by_id: ImHashMap<CardId, Card>,

    piles: Vector<Pile>,
    mistakes: u32,
    completed_count: u32,
}

impl GameState {
    /// Create a fresh state over a loaded card universe.
    ///
    /// Card ids are assumed unique; the dataset loader enforces this
    /// before any state exists.
    #[must_use]
    pub fn new(config: PuzzleConfig, cards: Vector<Card>) -> Self {
        let by_id = cards
            .iter()
            .map(|card| (card.id.clone(), card.clone()))
            .collect();

        Self {
            config,
            cards,
            by_id,
            piles: Vector::new(),
            mistakes: 0,
            completed_count: 0,
        }
    }

    // === Read access ===

    /// The puzzle shape this state was built with.
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Resolve a card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.by_id.get(id)
    }

    /// All live piles in creation order.
    #[must_use]
    pub fn piles(&self) -> &Vector<Pile> {
        &self.piles
    }

    /// Resolve a pile by id.
    #[must_use]
    pub fn pile(&self, id: &PileId) -> Option<&Pile> {
        self.piles.iter().find(|pile| &pile.id == id)
    }

    /// Rejected grouping attempts so far.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Number of currently complete piles.
    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    // === Transition ===

    /// Apply an action, producing a new snapshot and an outcome.
    ///
    /// Invalid references leave the state unchanged (the returned
    /// snapshot equals `self`) and report `ApplyOutcome::Ignored`.
    #[must_use]
    pub fn apply(&self, action: &Action) -> (GameState, ApplyOutcome) {
        match action {
            Action::CreatePile {
                pile_id,
                first,
                second,
            } => self.create_pile(pile_id, first, second),
            Action::AddCardToPile {
                card,
                pile,
                revealed_name,
            } => self.add_card_to_pile(card, pile, revealed_name.as_deref()),
            Action::SplitPile { pile } => self.split_pile(pile),
            Action::IncrementMistake => (
                Self {
                    mistakes: self.mistakes + 1,
                    ..self.clone()
                },
                ApplyOutcome::Applied,
            ),
            Action::ResetGame => (
                Self {
                    piles: Vector::new(),
                    mistakes: 0,
                    completed_count: 0,
                    ..self.clone()
                },
                ApplyOutcome::Applied,
            ),
        }
    }

    fn create_pile(
        &self,
        pile_id: &PileId,
        first: &CardId,
        second: &CardId,
    ) -> (GameState, ApplyOutcome) {
        if self.pile(pile_id).is_some() {
            return self.ignored(IgnoredReason::DuplicatePileId(pile_id.clone()));
        }

        for card in [first, second] {
            if self.card(card).is_none() {
                return self.ignored(IgnoredReason::UnknownCard(card.clone()));
            }
        }

        // Uphold the one-pile-per-card invariant against miswired
        // callers, including the same card supplied twice.
        if first == second || self.is_piled(second) {
            return self.ignored(IgnoredReason::CardAlreadyPiled(second.clone()));
        }
        if self.is_piled(first) {
            return self.ignored(IgnoredReason::CardAlreadyPiled(first.clone()));
        }

        let mut piles = self.piles.clone();
        piles.push_back(Pile::seed(pile_id.clone(), first.clone(), second.clone()));

        (
            Self {
                piles,
                ..self.clone()
            },
            ApplyOutcome::Applied,
        )
    }

    fn add_card_to_pile(
        &self,
        card: &CardId,
        pile_id: &PileId,
        revealed_name: Option<&str>,
    ) -> (GameState, ApplyOutcome) {
        let Some(index) = self.piles.iter().position(|pile| &pile.id == pile_id) else {
            return self.ignored(IgnoredReason::UnknownPile(pile_id.clone()));
        };

        if self.piles[index].is_complete {
            return self.ignored(IgnoredReason::PileComplete(pile_id.clone()));
        }

        if self.card(card).is_none() {
            return self.ignored(IgnoredReason::UnknownCard(card.clone()));
        }

        if self.is_piled(card) {
            return self.ignored(IgnoredReason::CardAlreadyPiled(card.clone()));
        }

        let mut pile = self.piles[index].clone();
        pile.card_ids.push_back(card.clone());

        let completed = pile.card_ids.len() == self.config.category_size;
        if completed {
            pile.is_complete = true;
            pile.revealed_category_name = revealed_name.map(str::to_owned);
        }

        let mut piles = self.piles.clone();
        piles.set(index, pile);

        let next = Self {
            piles,
            completed_count: self.completed_count + u32::from(completed),
            ..self.clone()
        };

        let outcome = if completed {
            ApplyOutcome::Completed(pile_id.clone())
        } else {
            ApplyOutcome::Applied
        };

        (next, outcome)
    }

    fn split_pile(&self, pile_id: &PileId) -> (GameState, ApplyOutcome) {
        let Some(index) = self.piles.iter().position(|pile| &pile.id == pile_id) else {
            return self.ignored(IgnoredReason::UnknownPile(pile_id.clone()));
        };

        let was_complete = self.piles[index].is_complete;

        let mut piles = self.piles.clone();
        piles.remove(index);

        (
            Self {
                piles,
                completed_count: self.completed_count - u32::from(was_complete),
                ..self.clone()
            },
            ApplyOutcome::Applied,
        )
    }

    fn is_piled(&self, card_id: &CardId) -> bool {
        self.piles.iter().any(|pile| pile.contains(card_id))
    }

    fn ignored(&self, reason: IgnoredReason) -> (GameState, ApplyOutcome) {
        (self.clone(), ApplyOutcome::Ignored(reason))
    }
}

//! Pile store for card locations and movement.
//!
//! The `PileStore` is the only place pile membership is mutated. It maps
//! pile names to ordered card-id sequences and supports:
//! - Drawing from the top of a pile (last element)
//! - Placing onto the end of a pile
//! - Uniform in-place shuffles
//! - Splicing out a specific card (list overlay selection)
//!
//! Piles are created on demand: `deck` and `discard` exist from the
//! start, and any other name (hand slots, play areas) comes into being
//! the first time a card is placed into it. The store puts no limit on
//! pile names.
//!
//! The store never invents or destroys cards. A draw hands the card to
//! the caller, who owns it as a table entity until a later `place` hands
//! it back. `place` does not check that the card is absent from every
//! other pile; callers remove a card from its prior owner before placing
//! it.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{CardId, TableRng};

/// Name of the pile seeded with the full deck.
pub const DECK_PILE: &str = "deck";

/// Name of the pile that starts empty and collects discards.
pub const DISCARD_PILE: &str = "discard";

/// Failure of a pile operation.
///
/// Both variants are recovered locally: a draw that fails simply means
/// the gesture does not start.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PileError {
    /// The pile exists but has no cards.
    #[error("pile `{0}` has no cards")]
    Empty(String),

    /// No pile with this name exists.
    #[error("no pile named `{0}`")]
    Unknown(String),
}

/// Ordered card sequences by pile name.
///
/// The top of a pile is the LAST element of its sequence; `draw` pops it.
///
/// ## Usage
///
/// ```
/// use playfield::core::CardId;
/// use playfield::piles::{PileStore, DECK_PILE, DISCARD_PILE};
///
/// let mut piles = PileStore::new();
/// piles.extend(DECK_PILE, [CardId::new(0), CardId::new(1)]);
///
/// let drawn = piles.draw(DECK_PILE).unwrap();
/// assert_eq!(drawn, CardId::new(1)); // top of pile
///
/// piles.place(DISCARD_PILE, drawn);
/// assert_eq!(piles.size(DISCARD_PILE), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PileStore {
    piles: FxHashMap<String, Vec<CardId>>,
}

impl PileStore {
    /// Create a store seeded with empty `deck` and `discard` piles.
    #[must_use]
    pub fn new() -> Self {
        let mut piles = FxHashMap::default();
        piles.insert(DECK_PILE.to_string(), Vec::new());
        piles.insert(DISCARD_PILE.to_string(), Vec::new());
        Self { piles }
    }

    /// Create an empty pile if it does not already exist.
    pub fn create_pile(&mut self, name: &str) {
        if !self.piles.contains_key(name) {
            self.piles.insert(name.to_string(), Vec::new());
        }
    }

    /// Check if a pile exists.
    #[must_use]
    pub fn has_pile(&self, name: &str) -> bool {
        self.piles.contains_key(name)
    }

    /// Iterate over pile names.
    pub fn pile_names(&self) -> impl Iterator<Item = &str> {
        self.piles.keys().map(String::as_str)
    }

    /// Cards in a pile, bottom to top. Empty for unknown piles.
    #[must_use]
    pub fn cards(&self, name: &str) -> &[CardId] {
        self.piles.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of cards in a pile. Zero for unknown piles.
    #[must_use]
    pub fn size(&self, name: &str) -> usize {
        self.piles.get(name).map_or(0, Vec::len)
    }

    /// Check if a pile has no cards (true for unknown piles).
    #[must_use]
    pub fn is_empty(&self, name: &str) -> bool {
        self.size(name) == 0
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.values().map(Vec::len).sum()
    }

    /// Append cards to the end of a pile, creating it if needed.
    pub fn extend(&mut self, name: &str, cards: impl IntoIterator<Item = CardId>) {
        self.pile_mut(name).extend(cards);
    }

    /// Append a card to the end of a pile, creating it if needed.
    ///
    /// Does not verify the card is absent elsewhere; the caller removes
    /// it from its prior owner first.
    pub fn place(&mut self, name: &str, card: CardId) {
        self.pile_mut(name).push(card);
    }

    /// Remove and return the top card (last element) of a pile.
    pub fn draw(&mut self, name: &str) -> Result<CardId, PileError> {
        let pile = self
            .piles
            .get_mut(name)
            .ok_or_else(|| PileError::Unknown(name.to_string()))?;
        pile.pop().ok_or_else(|| PileError::Empty(name.to_string()))
    }

    /// Remove the first occurrence of a card from a pile.
    ///
    /// Returns the index it was removed from, or `None` if the card is
    /// not in the pile (or the pile does not exist).
    pub fn remove_card(&mut self, name: &str, card: CardId) -> Option<usize> {
        let pile = self.piles.get_mut(name)?;
        let index = pile.iter().position(|&c| c == card)?;
        pile.remove(index);
        Some(index)
    }

    /// Shuffle a pile in place (uniform Fisher-Yates).
    ///
    /// Shuffling an empty or unknown pile is a no-op.
    pub fn shuffle(&mut self, name: &str, rng: &mut TableRng) {
        if let Some(pile) = self.piles.get_mut(name) {
            rng.shuffle(pile);
        }
    }

    fn pile_mut(&mut self, name: &str) -> &mut Vec<CardId> {
        self.piles.entry(name.to_string()).or_default()
    }
}

impl Default for PileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: impl IntoIterator<Item = u32>) -> Vec<CardId> {
        raw.into_iter().map(CardId::new).collect()
    }

    #[test]
    fn test_seeded_piles() {
        let store = PileStore::new();

        assert!(store.has_pile(DECK_PILE));
        assert!(store.has_pile(DISCARD_PILE));
        assert!(store.is_empty(DECK_PILE));
        assert!(store.is_empty(DISCARD_PILE));
        assert_eq!(store.total_cards(), 0);
    }

    #[test]
    fn test_draw_is_lifo() {
        let mut store = PileStore::new();
        store.extend(DECK_PILE, ids([0, 1, 2]));

        assert_eq!(store.draw(DECK_PILE), Ok(CardId::new(2)));
        assert_eq!(store.draw(DECK_PILE), Ok(CardId::new(1)));
        assert_eq!(store.size(DECK_PILE), 1);
    }

    #[test]
    fn test_draw_empty_pile() {
        let mut store = PileStore::new();

        assert_eq!(
            store.draw(DISCARD_PILE),
            Err(PileError::Empty(DISCARD_PILE.to_string()))
        );
    }

    #[test]
    fn test_draw_unknown_pile() {
        let mut store = PileStore::new();

        assert_eq!(
            store.draw("hand-3"),
            Err(PileError::Unknown("hand-3".to_string()))
        );
    }

    #[test]
    fn test_place_creates_dynamic_pile() {
        let mut store = PileStore::new();

        store.place("hand-1", CardId::new(4));

        assert!(store.has_pile("hand-1"));
        assert_eq!(store.cards("hand-1"), &[CardId::new(4)]);
    }

    #[test]
    fn test_place_appends_to_top() {
        let mut store = PileStore::new();
        store.extend(DISCARD_PILE, ids([0]));
        store.place(DISCARD_PILE, CardId::new(9));

        assert_eq!(store.draw(DISCARD_PILE), Ok(CardId::new(9)));
    }

    #[test]
    fn test_remove_card_splices_first_match() {
        let mut store = PileStore::new();
        store.extend(DECK_PILE, ids([5, 6, 5, 7]));

        assert_eq!(store.remove_card(DECK_PILE, CardId::new(5)), Some(0));
        assert_eq!(store.cards(DECK_PILE), ids([6, 5, 7]).as_slice());

        assert_eq!(store.remove_card(DECK_PILE, CardId::new(99)), None);
        assert_eq!(store.remove_card("nope", CardId::new(5)), None);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut store = PileStore::new();
        store.extend(DECK_PILE, ids(0..20));
        let before = store.cards(DECK_PILE).to_vec();

        let mut rng = TableRng::new(42);
        store.shuffle(DECK_PILE, &mut rng);

        let mut after = store.cards(DECK_PILE).to_vec();
        assert_ne!(after, before); // very likely for 20 cards
        after.sort();
        assert_eq!(after, ids(0..20));
    }

    #[test]
    fn test_shuffle_empty_is_noop() {
        let mut store = PileStore::new();
        let mut rng = TableRng::new(42);

        store.shuffle(DISCARD_PILE, &mut rng);
        store.shuffle("unknown", &mut rng);

        assert!(store.is_empty(DISCARD_PILE));
    }

    #[test]
    fn test_total_cards() {
        let mut store = PileStore::new();
        store.extend(DECK_PILE, ids([0, 1, 2]));
        store.place("hand-1", CardId::new(3));

        assert_eq!(store.total_cards(), 4);
    }

    #[test]
    fn test_create_pile_preserves_contents() {
        let mut store = PileStore::new();
        store.place("hand-1", CardId::new(0));
        store.create_pile("hand-1");

        assert_eq!(store.size("hand-1"), 1);
    }
}

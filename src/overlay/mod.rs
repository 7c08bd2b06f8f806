//! Filterable pile browser.
//!
//! Holding on a pile opens an overlay listing its cards in order. The
//! list is a VIEW: cards stay in the pile until one is selected, at
//! which point the session splices it out of the pile and places it on
//! the table. Dismissing the overlay touches nothing.
//!
//! The overlay tracks its own dismissal so a stale reference cannot
//! mutate anything afterwards: `take` on a dismissed overlay returns
//! [`OverlayError::Dismissed`], which callers treat as a no-op.

use thiserror::Error;

use crate::catalog::CardCatalog;
use crate::core::CardId;

/// Misuse of an overlay.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// The overlay was already dismissed.
    #[error("overlay was dismissed")]
    Dismissed,

    /// The card is not (or no longer) in the list.
    #[error("card {0} is not in the list")]
    NotListed(CardId),
}

/// An open list overlay for one pile.
///
/// ## Example
///
/// ```
/// use playfield::catalog::{CardCatalog, CardInfo};
/// use playfield::core::CardId;
/// use playfield::overlay::ListOverlay;
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(CardId::new(0), CardInfo::new("Fireball", "Deal 3 damage"));
/// catalog.insert(CardId::new(1), CardInfo::new("Ice Shard", "Freeze a target"));
///
/// let mut overlay = ListOverlay::new("deck", vec![CardId::new(0), CardId::new(1)]);
/// overlay.set_filter("ice");
///
/// assert_eq!(overlay.visible(&catalog), vec![CardId::new(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct ListOverlay {
    pile: String,
    entries: Vec<CardId>,
    query: String,
    dismissed: bool,
}

impl ListOverlay {
    /// Open an overlay over a snapshot of a pile's cards.
    #[must_use]
    pub fn new(pile: impl Into<String>, entries: Vec<CardId>) -> Self {
        Self {
            pile: pile.into(),
            entries,
            query: String::new(),
            dismissed: false,
        }
    }

    /// The pile this overlay browses.
    #[must_use]
    pub fn pile(&self) -> &str {
        &self.pile
    }

    /// All listed cards, in pile order.
    #[must_use]
    pub fn entries(&self) -> &[CardId] {
        &self.entries
    }

    /// The current filter query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter query.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Cards passing the current filter, in pile order.
    ///
    /// A card matches when its name or description contains the query,
    /// case-insensitively. An empty query shows everything.
    #[must_use]
    pub fn visible(&self, catalog: &CardCatalog) -> Vec<CardId> {
        self.entries
            .iter()
            .copied()
            .filter(|&card| {
                catalog
                    .get(card)
                    .is_some_and(|info| info.matches(&self.query))
            })
            .collect()
    }

    /// Select a card, removing it from the list.
    ///
    /// The caller is responsible for splicing the card out of the pile
    /// and re-parenting it onto the table.
    pub fn take(&mut self, card: CardId) -> Result<(), OverlayError> {
        if self.dismissed {
            return Err(OverlayError::Dismissed);
        }
        let index = self
            .entries
            .iter()
            .position(|&c| c == card)
            .ok_or(OverlayError::NotListed(card))?;
        self.entries.remove(index);
        Ok(())
    }

    /// Dismiss the overlay. Mutates no pile state.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Has the overlay been dismissed?
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

//! Card metadata and lookup.
//!
//! The `CardCatalog` stores display metadata for every card in a deck.
//! It provides fast lookup by `CardId` and drives the list overlay's
//! text filter.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Display metadata for a single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Display name.
    pub name: String,

    /// Flavor or rules text.
    pub description: String,
}

impl CardInfo {
    /// Create new card metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Does this card match a filter query?
    ///
    /// Case-insensitive substring match against the name or the
    /// description; an empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Metadata catalog for a deck.
///
/// ## Example
///
/// ```
/// use playfield::catalog::{CardCatalog, CardInfo};
/// use playfield::core::CardId;
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(CardId::new(0), CardInfo::new("Fireball", "Deal 3 damage"));
///
/// let found = catalog.get(CardId::new(0)).unwrap();
/// assert_eq!(found.name, "Fireball");
/// assert!(found.matches("fire"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardInfo>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert metadata for a card, replacing any previous entry.
    pub fn insert(&mut self, id: CardId, info: CardInfo) {
        self.cards.insert(id, info);
    }

    /// Get metadata by card ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }

    /// Check if a card has metadata.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cataloged cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CardInfo)> {
        self.cards.iter().map(|(&id, info)| (id, info))
    }
}

//! Card identification.
//!
//! A [`CardId`] is the normalized, zero-based index of a card within a
//! deck. It doubles as the key into the metadata catalog and as the cell
//! index into the sprite sheet, so the same id drives both what a card
//! *is* and what it *looks like*.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a deck.
///
/// Ids are dense: a deck of `n` cards uses ids drawn from `0..n` cell
/// space. The id never changes once assigned; only the card's location
/// (pile or table) does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

//! Table entities: cards living outside any pile.
//!
//! A drawn or list-selected card becomes a `TableCard` until it is
//! dropped back onto a pile. Its position is authoritative here; the
//! host renders FROM this record and never the reverse.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Point};

/// Unique identifier for a table entity within a session.
///
/// Distinct from [`CardId`]: the same card drawn, dropped, and drawn
/// again gets a fresh entity id each time it hits the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableCardId(pub u32);

impl TableCardId {
    /// Create a new table card ID.
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

impl std::fmt::Display for TableCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TableCard({})", self.0)
    }
}

/// An independently positioned, draggable card on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableCard {
    /// Entity id for gesture targeting.
    pub id: TableCardId,

    /// Which card this entity shows.
    pub card: CardId,

    /// Current position on the surface.
    pub position: Point,

    /// Magnified (2x) or normal (1x)?
    pub zoomed: bool,
}

impl TableCard {
    /// Create a new entity at a position, unzoomed.
    #[must_use]
    pub fn new(id: TableCardId, card: CardId, position: Point) -> Self {
        Self {
            id,
            card,
            position,
            zoomed: false,
        }
    }

    /// Current visual scale factor.
    #[must_use]
    pub fn scale(&self) -> u32 {
        if self.zoomed {
            2
        } else {
            1
        }
    }

    /// Toggle between 1x and 2x.
    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
    }
}

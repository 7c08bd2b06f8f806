//! Deck catalog: parsing deck descriptions into playable decks.
//!
//! A deck description is the JSON contract the host fetches by deck name:
//!
//! ```json
//! {
//!   "cardIds": [100, 101, 102],
//!   "grid": { "width": 5, "height": 2 },
//!   "cards": { "100": { "name": "...", "description": "..." } }
//! }
//! ```
//!
//! Raw ids carry a fixed offset of [`RAW_ID_OFFSET`]; subtracting it
//! yields the zero-based sprite index used everywhere else in the crate.
//! Metadata keys are normalized the same way so name lookups and sprite
//! lookups always agree on the same [`CardId`].
//!
//! Loading is strict: a description that cannot seed a complete session
//! (missing fields, empty grid, empty card list, metadata gaps) fails
//! with a [`DeckLoadError`] instead of producing a half-usable deck.

pub mod info;

pub use info::{CardCatalog, CardInfo};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::core::CardId;
use crate::sprite::DeckGeometry;

/// Offset between raw metadata identifiers and zero-based sprite indices.
///
/// Deck descriptions number their cards starting here; the catalog
/// subtracts it on load and every other module only ever sees the
/// normalized index.
pub const RAW_ID_OFFSET: u32 = 100;

/// Failure to turn a deck description into a [`Deck`].
///
/// All variants are fatal to session start; the host must surface them
/// as a blocking message rather than opening an empty table.
#[derive(Debug, Error)]
pub enum DeckLoadError {
    /// The description is not valid JSON or is missing required fields.
    #[error("malformed deck description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The sprite grid has zero width or height.
    #[error("sprite grid {width}x{height} has no cells")]
    EmptyGrid { width: u32, height: u32 },

    /// The description lists no cards.
    #[error("deck description lists no cards")]
    EmptyDeck,

    /// A raw id is below [`RAW_ID_OFFSET`] and cannot be normalized.
    #[error("raw card id {raw} is below the sprite index offset")]
    BadCardId { raw: u32 },

    /// A listed card has no metadata entry.
    #[error("card {0} has no metadata entry")]
    MissingCard(CardId),
}

/// Wire shape of a deck description.
///
/// This mirrors the JSON contract exactly; [`Deck::from_description`]
/// turns it into normalized, validated session input.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDescription {
    /// Raw card ids in deck order (offset by [`RAW_ID_OFFSET`]).
    pub card_ids: Vec<u32>,

    /// Sprite sheet grid dimensions.
    pub grid: DeckGeometry,

    /// Per-card metadata keyed by raw id.
    pub cards: FxHashMap<u32, CardInfo>,
}

/// A parsed, validated deck: ordered card ids, grid geometry, metadata.
///
/// The order is the pre-shuffle deck sequence; the session shuffles it
/// when seeding the deck pile.
#[derive(Clone, Debug)]
pub struct Deck {
    order: Vec<CardId>,
    geometry: DeckGeometry,
    catalog: CardCatalog,
}

impl Deck {
    /// Parse a deck description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DeckLoadError> {
        let description: DeckDescription = serde_json::from_str(json)?;
        Self::from_description(description)
    }

    /// Validate and normalize a deck description.
    pub fn from_description(description: DeckDescription) -> Result<Self, DeckLoadError> {
        let geometry = description.grid;
        if geometry.width == 0 || geometry.height == 0 {
            return Err(DeckLoadError::EmptyGrid {
                width: geometry.width,
                height: geometry.height,
            });
        }
        if description.card_ids.is_empty() {
            return Err(DeckLoadError::EmptyDeck);
        }

        let order = description
            .card_ids
            .iter()
            .map(|&raw| normalize(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let mut catalog = CardCatalog::new();
        for (raw, info) in description.cards {
            catalog.insert(normalize(raw)?, info);
        }

        // Every listed card must be browsable in the overlay.
        for &card in &order {
            if !catalog.contains(card) {
                return Err(DeckLoadError::MissingCard(card));
            }
        }

        Ok(Self {
            order,
            geometry,
            catalog,
        })
    }

    /// Card ids in description order (pre-shuffle deck sequence).
    #[must_use]
    pub fn order(&self) -> &[CardId] {
        &self.order
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.order.len()
    }

    /// Sprite sheet grid dimensions.
    #[must_use]
    pub fn geometry(&self) -> DeckGeometry {
        self.geometry
    }

    /// Per-card metadata catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Decompose into order, geometry, and catalog.
    #[must_use]
    pub fn into_parts(self) -> (Vec<CardId>, DeckGeometry, CardCatalog) {
        (self.order, self.geometry, self.catalog)
    }
}

fn normalize(raw: u32) -> Result<CardId, DeckLoadError> {
    raw.checked_sub(RAW_ID_OFFSET)
        .map(CardId::new)
        .ok_or(DeckLoadError::BadCardId { raw })
}

//! Sprite-sheet rendering: card id -> background offset and scale.
//!
//! Every card in a deck shares one sprite-sheet image laid out on a
//! `width x height` grid. A card's visual identity is derived purely
//! from its id and that grid, so the same id always produces the same
//! descriptor wherever it is rendered (table entity, pile preview, list
//! overlay row).

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Sprite sheet grid dimensions, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckGeometry {
    /// Cells per row.
    pub width: u32,

    /// Number of rows.
    pub height: u32,
}

impl DeckGeometry {
    /// Create a new grid.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total cell count.
    #[must_use]
    pub const fn cells(self) -> u32 {
        self.width * self.height
    }
}

/// On-screen size of a single card, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSize {
    pub width: u32,
    pub height: u32,
}

impl CardSize {
    /// Create a new card size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Background placement for one card's sprite.
///
/// Offsets are negative pixel shifts of the sheet image; scale factors
/// are percentages sizing the whole sheet relative to one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale_x_percent: u32,
    pub scale_y_percent: u32,
}

/// Pure card-id -> sprite-descriptor mapping for one deck.
///
/// ## Example
///
/// ```
/// use playfield::core::CardId;
/// use playfield::sprite::{CardSize, DeckGeometry, SpriteSheet};
///
/// let sheet = SpriteSheet::new(DeckGeometry::new(5, 2), CardSize::new(60, 90));
/// let descriptor = sheet.descriptor(CardId::new(3));
///
/// assert_eq!(descriptor.offset_x, -180); // column 3 of 5
/// assert_eq!(descriptor.scale_x_percent, 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    geometry: DeckGeometry,
    card: CardSize,
}

impl SpriteSheet {
    /// Create a sheet mapping for the given grid and card pixel size.
    ///
    /// The grid must have nonzero dimensions; deck loading enforces this
    /// before a sheet is ever built.
    #[must_use]
    pub fn new(geometry: DeckGeometry, card: CardSize) -> Self {
        debug_assert!(geometry.width > 0 && geometry.height > 0);
        Self { geometry, card }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn geometry(&self) -> DeckGeometry {
        self.geometry
    }

    /// Card pixel size.
    #[must_use]
    pub fn card_size(&self) -> CardSize {
        self.card
    }

    /// Compute the sprite descriptor for a card.
    ///
    /// Deterministic: identical inputs always yield identical
    /// descriptors. The column wraps on the grid width; the row divisor
    /// is the grid HEIGHT, the canonical mapping every lookup in the
    /// crate shares (for non-square grids the row therefore wraps on
    /// height, not width).
    #[must_use]
    pub fn descriptor(&self, card: CardId) -> SpriteDescriptor {
        let column = card.raw() % self.geometry.width;
        let row = card.raw() / self.geometry.height;

        SpriteDescriptor {
            offset_x: -((column * self.card.width) as i32),
            offset_y: -((row * self.card.height) as i32),
            scale_x_percent: self.geometry.width * 100,
            scale_y_percent: self.geometry.height * 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_5x2() -> SpriteSheet {
        SpriteSheet::new(DeckGeometry::new(5, 2), CardSize::new(60, 90))
    }

    #[test]
    fn test_first_card_is_origin() {
        let descriptor = sheet_5x2().descriptor(CardId::new(0));

        assert_eq!(descriptor.offset_x, 0);
        assert_eq!(descriptor.offset_y, 0);
    }

    #[test]
    fn test_column_wraps_on_width() {
        let sheet = sheet_5x2();

        assert_eq!(sheet.descriptor(CardId::new(4)).offset_x, -240);
        assert_eq!(sheet.descriptor(CardId::new(5)).offset_x, 0);
        assert_eq!(sheet.descriptor(CardId::new(6)).offset_x, -60);
    }

    #[test]
    fn test_row_divides_by_height() {
        let sheet = sheet_5x2();

        // Grid height is 2, so the row advances every 2 ids.
        assert_eq!(sheet.descriptor(CardId::new(1)).offset_y, 0);
        assert_eq!(sheet.descriptor(CardId::new(2)).offset_y, -90);
        assert_eq!(sheet.descriptor(CardId::new(7)).offset_y, -270);
    }

    #[test]
    fn test_scale_covers_whole_sheet() {
        let descriptor = sheet_5x2().descriptor(CardId::new(0));

        assert_eq!(descriptor.scale_x_percent, 500);
        assert_eq!(descriptor.scale_y_percent, 200);
    }

    #[test]
    fn test_deterministic() {
        let sheet = sheet_5x2();

        for id in 0..10 {
            assert_eq!(
                sheet.descriptor(CardId::new(id)),
                sheet.descriptor(CardId::new(id))
            );
        }
    }

    #[test]
    fn test_square_grid() {
        let sheet = SpriteSheet::new(DeckGeometry::new(3, 3), CardSize::new(10, 10));

        // On a square grid rows advance every `width` ids as expected.
        let descriptor = sheet.descriptor(CardId::new(4));
        assert_eq!(descriptor.offset_x, -10);
        assert_eq!(descriptor.offset_y, -10);
    }

    #[test]
    fn test_cells() {
        assert_eq!(DeckGeometry::new(5, 2).cells(), 10);
    }
}

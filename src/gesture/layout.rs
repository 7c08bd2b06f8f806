//! Table surface layout: dropzones and the hand region.
//!
//! The host describes where pile zones and the hand row sit on screen;
//! gesture resolution hit-tests against these rectangles instead of
//! querying rendered output.

use smallvec::SmallVec;

use crate::core::{Point, Rect};
use crate::sprite::CardSize;

/// A pile's dropzone rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct PileZone {
    /// Name of the pile this zone feeds.
    pub pile: String,

    /// Screen rectangle accepting drops.
    pub rect: Rect,
}

impl PileZone {
    /// Create a new pile zone.
    pub fn new(pile: impl Into<String>, rect: Rect) -> Self {
        Self {
            pile: pile.into(),
            rect,
        }
    }
}

/// Geometry of the interactive surface.
///
/// ## Example
///
/// ```
/// use playfield::core::Rect;
/// use playfield::gesture::Layout;
/// use playfield::sprite::CardSize;
/// use playfield::piles::{DECK_PILE, DISCARD_PILE};
///
/// let layout = Layout::new(
///     Rect::new(0.0, 0.0, 800.0, 600.0),
///     Rect::new(0.0, 500.0, 800.0, 100.0),
///     CardSize::new(60, 90),
/// )
/// .with_zone(DECK_PILE, Rect::new(20.0, 20.0, 80.0, 110.0))
/// .with_zone(DISCARD_PILE, Rect::new(120.0, 20.0, 80.0, 110.0));
///
/// assert_eq!(layout.zones().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Bounds cards may occupy; released cards are clamped inside.
    pub surface: Rect,

    /// The hand row; releases near its top edge snap onto it.
    pub hand: Rect,

    /// On-screen pixel size of a single card.
    pub card: CardSize,

    /// Pile dropzones. Tables rarely have more than a handful.
    zones: SmallVec<[PileZone; 4]>,
}

impl Layout {
    /// Create a layout with no pile zones.
    #[must_use]
    pub fn new(surface: Rect, hand: Rect, card: CardSize) -> Self {
        Self {
            surface,
            hand,
            card,
            zones: SmallVec::new(),
        }
    }

    /// Add a pile dropzone.
    #[must_use]
    pub fn with_zone(mut self, pile: impl Into<String>, rect: Rect) -> Self {
        self.zones.push(PileZone::new(pile, rect));
        self
    }

    /// All pile dropzones.
    #[must_use]
    pub fn zones(&self) -> &[PileZone] {
        &self.zones
    }

    /// The first zone containing the point, if any.
    #[must_use]
    pub fn zone_at(&self, point: Point) -> Option<&PileZone> {
        self.zones.iter().find(|zone| zone.rect.contains(point))
    }
}

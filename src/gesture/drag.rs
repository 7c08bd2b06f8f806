//! Card drag state machine.
//!
//! A press on a table card arms the machine in `Idle`. Movement past the
//! drag threshold enters `Dragging`; from then on the card's position
//! tracks the pointer. Release resolves into exactly one of:
//!
//! - `DroppedOnPile`: the pointer ended inside a pile dropzone
//! - `ReleasedInPlace`: the card stays on the table at its last
//!   position, snapped onto the hand row when released close to it and
//!   clamped into the surface bounds
//!
//! A press that never crosses the threshold resolves to nothing; the
//! card does not move.

use crate::core::Point;

use super::layout::Layout;
use super::GestureConfig;

/// How a drag release resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome {
    /// The card was dropped into a pile's dropzone.
    DroppedOnPile {
        /// Pile to place the card into.
        pile: String,
        /// Pointer position at release.
        at: Point,
    },

    /// The card stays on the table as an independent entity.
    ReleasedInPlace {
        /// Final card position after snap and clamp.
        at: Point,
    },
}

/// In-flight drag of a single table card.
#[derive(Clone, Debug)]
pub struct CardDrag {
    pointer_origin: Point,
    card_origin: Point,
    position: Point,
    dragging: bool,
}

impl CardDrag {
    /// Arm a drag from a press on a card at `card_origin`.
    #[must_use]
    pub fn press(card_origin: Point, pointer: Point) -> Self {
        Self {
            pointer_origin: pointer,
            card_origin,
            position: card_origin,
            dragging: false,
        }
    }

    /// Start a drag already past the threshold.
    ///
    /// Used when a pile draw transfers its gesture onto the freshly
    /// drawn card: the user's press continues as this card's drag
    /// without re-crossing the threshold.
    #[must_use]
    pub fn begun(card_origin: Point, pointer: Point) -> Self {
        Self {
            pointer_origin: pointer,
            card_origin,
            position: card_origin,
            dragging: true,
        }
    }

    /// Has the drag passed the movement threshold?
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current card position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Feed a pointer move. Returns `true` if the card position changed.
    pub fn moved(&mut self, pointer: Point, config: &GestureConfig) -> bool {
        if !self.dragging {
            if self.pointer_origin.distance_to(pointer) <= config.drag_threshold {
                return false;
            }
            self.dragging = true;
        }

        self.position = Point::new(
            self.card_origin.x + (pointer.x - self.pointer_origin.x),
            self.card_origin.y + (pointer.y - self.pointer_origin.y),
        );
        true
    }

    /// Resolve the release. `None` if the threshold was never crossed.
    #[must_use]
    pub fn release(self, pointer: Point, layout: &Layout) -> Option<DragOutcome> {
        if !self.dragging {
            return None;
        }

        if let Some(zone) = layout.zone_at(pointer) {
            return Some(DragOutcome::DroppedOnPile {
                pile: zone.pile.clone(),
                at: pointer,
            });
        }

        let mut at = self.position;
        // Releases within half the hand height of its top edge settle
        // onto that edge.
        if (at.y - layout.hand.y).abs() <= layout.hand.height / 2.0 {
            at.y = layout.hand.y;
        }

        Some(DragOutcome::ReleasedInPlace {
            at: layout.surface.clamp(at),
        })
    }
}

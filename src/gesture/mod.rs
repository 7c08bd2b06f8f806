//! Gesture state machines.
//!
//! One continuous pointer interaction (press, optional move, release) is
//! interpreted into a single semantic action. Two machines cover the
//! table's interactions:
//!
//! - [`CardDrag`]: a press on a table card. `Idle` until movement passes
//!   a small threshold, then `Dragging` with the card tracking the
//!   pointer; release resolves into a pile drop or an in-place release.
//! - [`PilePress`]: a press on a pile zone. Exactly one of draw-drag,
//!   tap-shuffle, or hold-list fires per press-release cycle, selected
//!   by movement distance and hold duration, never by arrival order.
//!
//! Both machines consume synthetic events (points, millisecond
//! timestamps) so tests can drive them without real pointer input.

pub mod drag;
pub mod layout;
pub mod press;

pub use drag::{CardDrag, DragOutcome};
pub use layout::{Layout, PileZone};
pub use press::{PilePress, PressOutcome};

use crate::core::Point;

/// Thresholds and fixed positions for gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Movement past this distance (pixels) turns a press into a drag.
    pub drag_threshold: f32,

    /// A press sustained this long (milliseconds) without dragging opens
    /// the list overlay.
    pub hold_ms: u64,

    /// Where cards picked from the list overlay land on the table.
    pub list_spawn: Point,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 4.0,
            hold_ms: 600,
            list_spawn: Point::new(16.0, 16.0),
        }
    }
}

impl GestureConfig {
    /// Set the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, pixels: f32) -> Self {
        self.drag_threshold = pixels;
        self
    }

    /// Set the hold duration.
    #[must_use]
    pub fn with_hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    /// Set the spawn position for list-selected cards.
    #[must_use]
    pub fn with_list_spawn(mut self, at: Point) -> Self {
        self.list_spawn = at;
        self
    }
}

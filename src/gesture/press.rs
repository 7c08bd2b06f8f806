//! Pile press recognizer.
//!
//! A press on a pile zone can mean three things, decided by what the
//! pointer does before release:
//!
//! - move past the drag threshold -> **draw-drag** (draw the top card
//!   and keep dragging it)
//! - stay put and release quickly -> **tap** (shuffle the pile)
//! - stay put past the hold duration -> **hold** (open the list overlay)
//!
//! The recognizer guarantees at most one outcome per press-release
//! cycle. Once any outcome fires the rest of the cycle is inert.

use crate::core::Point;

use super::GestureConfig;

/// The single action a pile press resolved into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Draw the top card and transfer the gesture onto it.
    DrawDrag,

    /// Shuffle the pile.
    Shuffle,

    /// Open the list overlay for the pile.
    OpenList,
}

/// In-flight press on a pile zone.
#[derive(Clone, Debug)]
pub struct PilePress {
    origin: Point,
    pressed_ms: u64,
    fired: bool,
}

impl PilePress {
    /// Begin a press at the given position and time.
    #[must_use]
    pub fn new(at: Point, now_ms: u64) -> Self {
        Self {
            origin: at,
            pressed_ms: now_ms,
            fired: false,
        }
    }

    /// Has an outcome already fired this cycle?
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed a pointer move. Fires `DrawDrag` once movement passes the
    /// threshold.
    pub fn moved(&mut self, to: Point, config: &GestureConfig) -> Option<PressOutcome> {
        if self.fired || self.origin.distance_to(to) <= config.drag_threshold {
            return None;
        }
        self.fired = true;
        Some(PressOutcome::DrawDrag)
    }

    /// Feed a clock tick while the press is held. Fires `OpenList` once
    /// the hold duration elapses.
    pub fn tick(&mut self, now_ms: u64, config: &GestureConfig) -> Option<PressOutcome> {
        if self.fired || now_ms.saturating_sub(self.pressed_ms) < config.hold_ms {
            return None;
        }
        self.fired = true;
        Some(PressOutcome::OpenList)
    }

    /// End the press. Fires `Shuffle` if nothing else fired.
    #[must_use]
    pub fn release(self) -> Option<PressOutcome> {
        if self.fired {
            return None;
        }
        Some(PressOutcome::Shuffle)
    }
}

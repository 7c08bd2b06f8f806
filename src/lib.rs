//! # playfield
//!
//! A virtual card tabletop core. Cards live in named piles (deck, discard,
//! hand slots), can be drawn with a single press-drag-release, dropped back
//! onto piles, shuffled with a tap, and browsed through a filterable list
//! overlay. The crate owns the interaction rules; rendering and input
//! delivery belong to the host.
//!
//! ## Design Principles
//!
//! 1. **Explicit state over ambient state**: pile membership lives in one
//!    [`PileStore`] instance owned by the session, never in globals. Table
//!    entity positions live on the entity record, never queried back from
//!    rendered output.
//!
//! 2. **Synthetic events**: gestures are state machines fed plain data
//!    (points and millisecond timestamps). Tests drive them directly
//!    without simulating real pointer input.
//!
//! 3. **Single-threaded by construction**: every transition happens
//!    synchronously inside a host event callback. One active gesture at a
//!    time; no locking.
//!
//! ## Modules
//!
//! - `core`: card ids, 2-D geometry, deterministic RNG
//! - `catalog`: deck description parsing and per-card metadata
//! - `piles`: the pile store (the only place pile membership changes)
//! - `sprite`: card id + grid geometry -> sprite-sheet descriptor
//! - `gesture`: drag and pile-press state machines
//! - `overlay`: filterable pile browser
//! - `table`: the `Playfield` session wiring it all together

pub mod core;
pub mod catalog;
pub mod piles;
pub mod sprite;
pub mod gesture;
pub mod overlay;
pub mod table;

// Re-export commonly used types
pub use crate::core::{CardId, Point, Rect, TableRng};

pub use crate::catalog::{CardCatalog, CardInfo, Deck, DeckDescription, DeckLoadError};

pub use crate::piles::{PileError, PileStore, DECK_PILE, DISCARD_PILE};

pub use crate::sprite::{CardSize, DeckGeometry, SpriteDescriptor, SpriteSheet};

pub use crate::gesture::{CardDrag, DragOutcome, GestureConfig, PilePress, PressOutcome};

pub use crate::overlay::{ListOverlay, OverlayError};

pub use crate::table::{
    Layout, PileZone, Playfield, PressTarget, TableCard, TableCardId, TableEvent,
};

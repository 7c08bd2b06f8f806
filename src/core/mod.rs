//! Core value types: card ids, 2-D geometry, deterministic RNG.
//!
//! Everything here is a plain value with no knowledge of piles, gestures,
//! or the session. Higher modules build on these.

pub mod card;
pub mod geom;
pub mod rng;

pub use card::CardId;
pub use geom::{Point, Rect};
pub use rng::TableRng;

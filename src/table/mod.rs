//! The table session.
//!
//! `Playfield` wires the pile store, catalog, sprite sheet, gesture
//! machines, and list overlay into one session. It is constructed
//! not-ready and stays inert until [`Playfield::load`] seeds it from a
//! parsed [`Deck`]; the host performs its fetch however it likes and
//! calls `load` exactly once when the description arrives.
//!
//! ## Event flow
//!
//! The host forwards pointer input as synthetic events
//! ([`Playfield::pointer_down`], [`pointer_move`](Playfield::pointer_move),
//! [`tick`](Playfield::tick), [`pointer_up`](Playfield::pointer_up),
//! [`double_tap`](Playfield::double_tap)). Anything that changed pile
//! membership or the table surface comes back as a [`TableEvent`] the
//! host re-renders from. One gesture is active at a time; pointer input
//! is ignored while the list overlay is open (it is modal) and before
//! the deck is loaded.

pub mod entity;

pub use entity::{TableCard, TableCardId};
pub use crate::gesture::{Layout, PileZone};

use tracing::{debug, info, warn};

use crate::catalog::{CardCatalog, CardInfo, Deck};
use crate::core::{CardId, Point, TableRng};
use crate::gesture::{CardDrag, DragOutcome, GestureConfig, PilePress};
use crate::overlay::ListOverlay;
use crate::piles::{PileStore, DECK_PILE};
use crate::sprite::{SpriteDescriptor, SpriteSheet};

/// What a pointer press landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressTarget {
    /// A pile's dropzone.
    Pile(String),

    /// A table entity.
    Card(TableCardId),
}

/// A state change the host should re-render from.
#[derive(Clone, Debug, PartialEq)]
pub enum TableEvent {
    /// A drag over a pile drew its top card onto the table.
    CardDrawn {
        pile: String,
        entity: TableCardId,
        card: CardId,
    },

    /// A dragged card was dropped into a pile; its entity is gone.
    CardDropped { pile: String, card: CardId },

    /// A dragged card settled on the table.
    CardReleased { entity: TableCardId, at: Point },

    /// A tap shuffled a pile.
    PileShuffled { pile: String },

    /// A hold opened the list overlay.
    ListOpened { pile: String },

    /// A list selection re-parented a card onto the table.
    CardTakenFromList {
        pile: String,
        entity: TableCardId,
        card: CardId,
    },
}

/// The gesture currently owning the pointer.
#[derive(Clone, Debug)]
enum ActiveGesture {
    Pile { pile: String, press: PilePress },
    Card { id: TableCardId, drag: CardDrag },
}

/// Session state that only exists once a deck is loaded.
#[derive(Clone, Debug)]
struct Loaded {
    piles: PileStore,
    catalog: CardCatalog,
    sheet: SpriteSheet,
    card_count: usize,
    rng: TableRng,
    /// Table entities in z-order; last = frontmost.
    table: Vec<TableCard>,
    next_entity: u32,
    overlay: Option<ListOverlay>,
}

impl Loaded {
    fn spawn(&mut self, card: CardId, at: Point) -> TableCardId {
        let id = TableCardId::new(self.next_entity);
        self.next_entity += 1;
        self.table.push(TableCard::new(id, card, at));
        id
    }

    fn despawn(&mut self, id: TableCardId) -> Option<TableCard> {
        let index = self.table.iter().position(|c| c.id == id)?;
        Some(self.table.remove(index))
    }

    /// Reposition an entity and raise it to the front of the z-order.
    fn move_entity(&mut self, id: TableCardId, at: Point) {
        if let Some(index) = self.table.iter().position(|c| c.id == id) {
            let mut card = self.table.remove(index);
            card.position = at;
            self.table.push(card);
        }
    }
}

/// A single-client tabletop session.
///
/// ## Example
///
/// ```
/// use playfield::catalog::Deck;
/// use playfield::core::Rect;
/// use playfield::gesture::{GestureConfig, Layout};
/// use playfield::piles::{DECK_PILE, DISCARD_PILE};
/// use playfield::sprite::CardSize;
/// use playfield::table::Playfield;
///
/// let layout = Layout::new(
///     Rect::new(0.0, 0.0, 800.0, 600.0),
///     Rect::new(0.0, 500.0, 800.0, 100.0),
///     CardSize::new(60, 90),
/// )
/// .with_zone(DECK_PILE, Rect::new(20.0, 20.0, 80.0, 110.0))
/// .with_zone(DISCARD_PILE, Rect::new(120.0, 20.0, 80.0, 110.0));
///
/// let mut table = Playfield::new(layout, GestureConfig::default());
/// assert!(!table.is_ready());
///
/// let deck = Deck::from_json(r#"{
///     "cardIds": [100, 101],
///     "grid": { "width": 2, "height": 1 },
///     "cards": {
///         "100": { "name": "Fireball", "description": "" },
///         "101": { "name": "Ice Shard", "description": "" }
///     }
/// }"#).unwrap();
///
/// table.load(deck, 42);
/// assert!(table.is_ready());
/// assert_eq!(table.pile_size(DECK_PILE), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Playfield {
    layout: Layout,
    config: GestureConfig,
    loaded: Option<Loaded>,
    gesture: Option<ActiveGesture>,
}

impl Playfield {
    /// Create a not-ready session over a surface layout.
    #[must_use]
    pub fn new(layout: Layout, config: GestureConfig) -> Self {
        Self {
            layout,
            config,
            loaded: None,
            gesture: None,
        }
    }

    /// Has a deck been loaded?
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.loaded.is_some()
    }

    /// Seed the session from a parsed deck.
    ///
    /// The deck pile gets the full card sequence shuffled with the given
    /// seed; discard starts empty. Any in-flight gesture or overlay from
    /// a previous load is discarded.
    pub fn load(&mut self, deck: Deck, seed: u64) {
        let (order, geometry, catalog) = deck.into_parts();
        let card_count = order.len();

        let mut rng = TableRng::new(seed);
        let mut piles = PileStore::new();
        piles.extend(DECK_PILE, order);
        piles.shuffle(DECK_PILE, &mut rng);

        info!(card_count, seed, "deck loaded");
        self.loaded = Some(Loaded {
            piles,
            catalog,
            sheet: SpriteSheet::new(geometry, self.layout.card),
            card_count,
            rng,
            table: Vec::new(),
            next_entity: 0,
            overlay: None,
        });
        self.gesture = None;
    }

    // === Read accessors ===

    /// Total cards in the deck (0 before load).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.loaded.as_ref().map_or(0, |l| l.card_count)
    }

    /// Number of cards in a pile (0 before load or for unknown piles).
    #[must_use]
    pub fn pile_size(&self, pile: &str) -> usize {
        self.loaded.as_ref().map_or(0, |l| l.piles.size(pile))
    }

    /// Cards in a pile, bottom to top.
    #[must_use]
    pub fn pile_cards(&self, pile: &str) -> &[CardId] {
        self.loaded.as_ref().map_or(&[], |l| l.piles.cards(pile))
    }

    /// Label text for a pile zone: `"{PILE}\n{size}/{card_count}"`.
    #[must_use]
    pub fn pile_label(&self, pile: &str) -> Option<String> {
        let loaded = self.loaded.as_ref()?;
        if !loaded.piles.has_pile(pile) {
            return None;
        }
        Some(format!(
            "{}\n{}/{}",
            pile.to_uppercase(),
            loaded.piles.size(pile),
            loaded.card_count
        ))
    }

    /// Table entities in z-order (last = frontmost).
    #[must_use]
    pub fn table_cards(&self) -> &[TableCard] {
        self.loaded.as_ref().map_or(&[], |l| &l.table)
    }

    /// Look up a table entity.
    #[must_use]
    pub fn table_card(&self, id: TableCardId) -> Option<&TableCard> {
        self.loaded
            .as_ref()?
            .table
            .iter()
            .find(|card| card.id == id)
    }

    /// Cards tracked anywhere: piles plus table entities.
    ///
    /// Equal to [`Playfield::card_count`] at all times once loaded; no
    /// operation creates or destroys a card.
    #[must_use]
    pub fn tracked_cards(&self) -> usize {
        self.loaded
            .as_ref()
            .map_or(0, |l| l.piles.total_cards() + l.table.len())
    }

    /// Sprite descriptor for a card (None before load).
    #[must_use]
    pub fn descriptor(&self, card: CardId) -> Option<SpriteDescriptor> {
        Some(self.loaded.as_ref()?.sheet.descriptor(card))
    }

    /// Metadata for a card (None before load or for unknown ids).
    #[must_use]
    pub fn card_info(&self, card: CardId) -> Option<&CardInfo> {
        self.loaded.as_ref()?.catalog.get(card)
    }

    // === Gesture input ===

    /// Begin a press on a pile zone or a table card.
    ///
    /// Ignored before load, while the overlay is open, and while another
    /// gesture is active.
    pub fn pointer_down(&mut self, target: PressTarget, at: Point, now_ms: u64) {
        let Some(loaded) = self.loaded.as_ref() else {
            debug!("pointer ignored: deck not loaded");
            return;
        };
        if loaded.overlay.is_some() {
            debug!("pointer ignored: overlay open");
            return;
        }
        if self.gesture.is_some() {
            debug!("pointer ignored: gesture already active");
            return;
        }

        match target {
            PressTarget::Pile(pile) => {
                self.gesture = Some(ActiveGesture::Pile {
                    pile,
                    press: PilePress::new(at, now_ms),
                });
            }
            PressTarget::Card(id) => {
                let Some(card) = loaded.table.iter().find(|c| c.id == id) else {
                    warn!(%id, "press on unknown table card");
                    return;
                };
                self.gesture = Some(ActiveGesture::Card {
                    id,
                    drag: CardDrag::press(card.position, at),
                });
            }
        }
    }

    /// Feed a pointer move for the active gesture.
    ///
    /// A move over a pressed pile draws its top card and transfers the
    /// gesture onto the new entity, so the same press keeps dragging it.
    pub fn pointer_move(&mut self, at: Point, _now_ms: u64) -> Option<TableEvent> {
        let gesture = self.gesture.take()?;
        let loaded = self.loaded.as_mut()?;

        match gesture {
            ActiveGesture::Pile { pile, mut press } => {
                if press.moved(at, &self.config).is_none() {
                    self.gesture = Some(ActiveGesture::Pile { pile, press });
                    return None;
                }
                // DrawDrag fired: draw and hand the gesture to the card.
                match loaded.piles.draw(&pile) {
                    Ok(card) => {
                        let entity = loaded.spawn(card, at);
                        self.gesture = Some(ActiveGesture::Card {
                            id: entity,
                            drag: CardDrag::begun(at, at),
                        });
                        debug!(%card, pile = %pile, "card drawn by drag");
                        Some(TableEvent::CardDrawn { pile, entity, card })
                    }
                    Err(err) => {
                        debug!(%err, "draw did not start");
                        None
                    }
                }
            }
            ActiveGesture::Card { id, mut drag } => {
                if drag.moved(at, &self.config) {
                    loaded.move_entity(id, drag.position());
                }
                self.gesture = Some(ActiveGesture::Card { id, drag });
                None
            }
        }
    }

    /// Advance the hold clock for the active gesture.
    ///
    /// A press held on a pile past the hold duration opens the list
    /// overlay and ends the gesture.
    pub fn tick(&mut self, now_ms: u64) -> Option<TableEvent> {
        let gesture = self.gesture.take()?;
        let loaded = self.loaded.as_mut()?;

        match gesture {
            ActiveGesture::Pile { pile, mut press } => {
                if press.tick(now_ms, &self.config).is_none() {
                    self.gesture = Some(ActiveGesture::Pile { pile, press });
                    return None;
                }
                let entries = loaded.piles.cards(&pile).to_vec();
                loaded.overlay = Some(ListOverlay::new(pile.clone(), entries));
                debug!(pile = %pile, "list overlay opened");
                Some(TableEvent::ListOpened { pile })
            }
            other => {
                self.gesture = Some(other);
                None
            }
        }
    }

    /// End the active gesture.
    pub fn pointer_up(&mut self, at: Point, _now_ms: u64) -> Option<TableEvent> {
        let gesture = self.gesture.take()?;
        let loaded = self.loaded.as_mut()?;

        match gesture {
            ActiveGesture::Pile { pile, press } => {
                press.release()?;
                loaded.piles.shuffle(&pile, &mut loaded.rng);
                debug!(pile = %pile, "pile shuffled");
                Some(TableEvent::PileShuffled { pile })
            }
            ActiveGesture::Card { id, drag } => match drag.release(at, &self.layout)? {
                DragOutcome::DroppedOnPile { pile, .. } => {
                    let entity = loaded.despawn(id)?;
                    loaded.piles.place(&pile, entity.card);
                    debug!(card = %entity.card, pile = %pile, "card dropped onto pile");
                    Some(TableEvent::CardDropped {
                        pile,
                        card: entity.card,
                    })
                }
                DragOutcome::ReleasedInPlace { at } => {
                    loaded.move_entity(id, at);
                    Some(TableEvent::CardReleased { entity: id, at })
                }
            },
        }
    }

    /// Toggle a table card between 1x and 2x. Pile state is untouched.
    pub fn double_tap(&mut self, id: TableCardId) {
        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };
        if loaded.overlay.is_some() {
            return;
        }
        if let Some(card) = loaded.table.iter_mut().find(|c| c.id == id) {
            card.toggle_zoom();
        }
    }

    // === List overlay ===

    /// The open overlay, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&ListOverlay> {
        self.loaded.as_ref()?.overlay.as_ref()
    }

    /// Update the overlay's filter query.
    pub fn overlay_filter(&mut self, query: &str) {
        if let Some(overlay) = self.loaded.as_mut().and_then(|l| l.overlay.as_mut()) {
            overlay.set_filter(query);
        }
    }

    /// Cards passing the overlay's filter, in pile order.
    #[must_use]
    pub fn overlay_visible(&self) -> Vec<CardId> {
        let Some(loaded) = self.loaded.as_ref() else {
            return Vec::new();
        };
        loaded
            .overlay
            .as_ref()
            .map_or_else(Vec::new, |overlay| overlay.visible(&loaded.catalog))
    }

    /// Select a card in the overlay, re-parenting it onto the table.
    ///
    /// The card is spliced out of the pile at its first occurrence and
    /// spawned at the configured list position. Misuse (no overlay open,
    /// card not listed, card gone from the pile) is a logged no-op.
    pub fn overlay_select(&mut self, card: CardId) -> Option<TableEvent> {
        let loaded = self.loaded.as_mut()?;
        let Some(overlay) = loaded.overlay.as_mut() else {
            warn!(%card, "selection with no open overlay");
            return None;
        };

        if let Err(err) = overlay.take(card) {
            warn!(%err, "overlay selection ignored");
            return None;
        }
        let pile = overlay.pile().to_string();

        if loaded.piles.remove_card(&pile, card).is_none() {
            warn!(%card, pile = %pile, "selected card missing from pile");
            return None;
        }
        let entity = loaded.spawn(card, self.config.list_spawn);
        debug!(%card, pile = %pile, "card taken from list");
        Some(TableEvent::CardTakenFromList { pile, entity, card })
    }

    /// Close the overlay. Mutates no pile state.
    pub fn overlay_dismiss(&mut self) {
        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };
        if let Some(mut overlay) = loaded.overlay.take() {
            overlay.dismiss();
            debug!(pile = %overlay.pile(), "list overlay dismissed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::piles::DISCARD_PILE;
    use crate::sprite::CardSize;

    fn layout() -> Layout {
        Layout::new(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Rect::new(0.0, 500.0, 800.0, 100.0),
            CardSize::new(60, 90),
        )
        .with_zone(DECK_PILE, Rect::new(20.0, 20.0, 80.0, 110.0))
        .with_zone(DISCARD_PILE, Rect::new(120.0, 20.0, 80.0, 110.0))
    }

    fn deck(cards: u32) -> Deck {
        let card_ids: Vec<u32> = (0..cards).map(|i| i + 100).collect();
        let entries: Vec<String> = (0..cards)
            .map(|i| format!(r#""{}": {{ "name": "Card {}", "description": "" }}"#, i + 100, i))
            .collect();
        let json = format!(
            r#"{{ "cardIds": {:?}, "grid": {{ "width": 5, "height": 2 }}, "cards": {{ {} }} }}"#,
            card_ids,
            entries.join(", ")
        );
        Deck::from_json(&json).unwrap()
    }

    fn ready_table(cards: u32) -> Playfield {
        let mut table = Playfield::new(layout(), GestureConfig::default());
        table.load(deck(cards), 42);
        table
    }

    #[test]
    fn test_not_ready_ignores_input() {
        let mut table = Playfield::new(layout(), GestureConfig::default());

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        assert_eq!(table.pointer_move(Point::new(200.0, 200.0), 10), None);
        assert_eq!(table.pointer_up(Point::new(200.0, 200.0), 20), None);
        assert_eq!(table.card_count(), 0);
    }

    #[test]
    fn test_load_seeds_piles() {
        let table = ready_table(10);

        assert!(table.is_ready());
        assert_eq!(table.card_count(), 10);
        assert_eq!(table.pile_size(DECK_PILE), 10);
        assert_eq!(table.pile_size(DISCARD_PILE), 0);
        assert_eq!(table.tracked_cards(), 10);
    }

    #[test]
    fn test_pile_label_format() {
        let table = ready_table(10);

        assert_eq!(table.pile_label(DECK_PILE), Some("DECK\n10/10".to_string()));
        assert_eq!(
            table.pile_label(DISCARD_PILE),
            Some("DISCARD\n0/10".to_string())
        );
        assert_eq!(table.pile_label("hand-1"), None);
    }

    #[test]
    fn test_tap_shuffles_pile() {
        let mut table = ready_table(10);
        let before = table.pile_cards(DECK_PILE).to_vec();

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        let event = table.pointer_up(Point::new(50.0, 50.0), 100);

        assert_eq!(
            event,
            Some(TableEvent::PileShuffled {
                pile: DECK_PILE.to_string()
            })
        );
        let mut after = table.pile_cards(DECK_PILE).to_vec();
        assert_ne!(after, before);
        after.sort();
        let mut sorted_before = before;
        sorted_before.sort();
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn test_draw_drag_transfers_gesture() {
        let mut table = ready_table(10);

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        let event = table.pointer_move(Point::new(300.0, 300.0), 16);

        let Some(TableEvent::CardDrawn { entity, .. }) = event else {
            panic!("expected CardDrawn, got {event:?}");
        };
        assert_eq!(table.pile_size(DECK_PILE), 9);
        assert_eq!(table.table_cards().len(), 1);

        // The continuing move drags the drawn card.
        table.pointer_move(Point::new(340.0, 320.0), 32);
        let card = table.table_card(entity).unwrap();
        assert_eq!(card.position, Point::new(340.0, 320.0));
    }

    #[test]
    fn test_draw_from_empty_pile_ends_gesture() {
        let mut table = ready_table(10);

        table.pointer_down(
            PressTarget::Pile(DISCARD_PILE.to_string()),
            Point::new(150.0, 50.0),
            0,
        );
        assert_eq!(table.pointer_move(Point::new(300.0, 300.0), 16), None);
        assert_eq!(table.table_cards().len(), 0);

        // The press is consumed: releasing does not shuffle.
        assert_eq!(table.pointer_up(Point::new(300.0, 300.0), 32), None);
    }

    #[test]
    fn test_double_tap_zooms() {
        let mut table = ready_table(10);

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        let Some(TableEvent::CardDrawn { entity, .. }) =
            table.pointer_move(Point::new(300.0, 300.0), 16)
        else {
            panic!("expected a draw");
        };
        table.pointer_up(Point::new(300.0, 300.0), 32);

        table.double_tap(entity);
        assert_eq!(table.table_card(entity).unwrap().scale(), 2);
        table.double_tap(entity);
        assert_eq!(table.table_card(entity).unwrap().scale(), 1);
    }

    #[test]
    fn test_dragging_raises_to_front() {
        let mut table = ready_table(10);

        // Draw two cards onto the table.
        for _ in 0..2 {
            table.pointer_down(
                PressTarget::Pile(DECK_PILE.to_string()),
                Point::new(50.0, 50.0),
                0,
            );
            table.pointer_move(Point::new(300.0, 300.0), 16);
            table.pointer_up(Point::new(300.0, 300.0), 32);
        }
        let back = table.table_cards()[0].id;

        table.pointer_down(PressTarget::Card(back), Point::new(300.0, 300.0), 100);
        table.pointer_move(Point::new(350.0, 300.0), 116);

        assert_eq!(table.table_cards().last().unwrap().id, back);
    }

    #[test]
    fn test_hold_opens_overlay_and_blocks_pointer_input() {
        let mut table = ready_table(10);

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        let event = table.tick(700);
        assert_eq!(
            event,
            Some(TableEvent::ListOpened {
                pile: DECK_PILE.to_string()
            })
        );
        assert!(table.overlay().is_some());
        assert_eq!(table.overlay_visible().len(), 10);

        // Modal: a new press is ignored.
        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            800,
        );
        assert_eq!(table.pointer_up(Point::new(50.0, 50.0), 900), None);
        assert_eq!(table.pile_size(DECK_PILE), 10);
    }

    #[test]
    fn test_overlay_select_reparents_card() {
        let mut table = ready_table(10);
        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        table.tick(700);

        let picked = table.pile_cards(DECK_PILE)[3];
        let event = table.overlay_select(picked);

        let Some(TableEvent::CardTakenFromList { entity, card, .. }) = event else {
            panic!("expected CardTakenFromList, got {event:?}");
        };
        assert_eq!(card, picked);
        assert_eq!(table.pile_size(DECK_PILE), 9);
        assert!(!table.pile_cards(DECK_PILE).contains(&picked));
        assert_eq!(
            table.table_card(entity).unwrap().position,
            GestureConfig::default().list_spawn
        );
        assert_eq!(table.tracked_cards(), 10);
    }

    #[test]
    fn test_overlay_dismiss_mutates_nothing() {
        let mut table = ready_table(10);
        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        table.tick(700);
        let before = table.pile_cards(DECK_PILE).to_vec();

        table.overlay_dismiss();

        assert!(table.overlay().is_none());
        assert_eq!(table.pile_cards(DECK_PILE), before.as_slice());
        assert_eq!(table.tracked_cards(), 10);

        // Selection after dismissal is a no-op.
        assert_eq!(table.overlay_select(before[0]), None);
        assert_eq!(table.pile_size(DECK_PILE), 10);
    }

    #[test]
    fn test_second_press_during_gesture_is_ignored() {
        let mut table = ready_table(10);

        table.pointer_down(
            PressTarget::Pile(DECK_PILE.to_string()),
            Point::new(50.0, 50.0),
            0,
        );
        // A second down must not replace the live press.
        table.pointer_down(
            PressTarget::Pile(DISCARD_PILE.to_string()),
            Point::new(150.0, 50.0),
            10,
        );

        let event = table.pointer_up(Point::new(50.0, 50.0), 50);
        assert_eq!(
            event,
            Some(TableEvent::PileShuffled {
                pile: DECK_PILE.to_string()
            })
        );
    }
}

//! Doors, keys and level transitions.
//!
//! Delivering the level key to a door opens it, clears the board and
//! either merges the next level's cards into the remaining deck or, on the
//! last level, wins the game.

use tracing::info;

use super::{CommandRecord, GameSession, Notification};
use crate::cards::CardKind;
use crate::core::Rejection;
use crate::encounter::{CardRef, Ending};
use crate::zones::{CellPos, Deck};

impl GameSession {
    /// Open the door at `door` with the key at `from`.
    ///
    /// The key must be a key card; when both key and door declare a deck
    /// level, the levels must match.
    pub fn deliver_key_to_door(&mut self, from: CardRef, door: CellPos) -> Result<(), Rejection> {
        self.ensure_idle_for(&from)?;
        let door_card = self.board.get_card_at(door).ok_or(Rejection::EmptyCell(door))?;
        if door_card.kind() != CardKind::Door {
            return Err(Rejection::WrongCardType);
        }
        let door_level = door_card.data.deck_level;

        let key = self.peek_movable(&from)?;
        if !key.data.is_key {
            return Err(Rejection::NotDeliverable);
        }
        if let (Some(k), Some(d)) = (key.data.deck_level, door_level) {
            if k != d {
                return Err(Rejection::KeyMismatch);
            }
        }

        let key = self.take(&from)?;
        self.record(CommandRecord::DeliverKeyToDoor { from, door });
        self.discard(key);

        if let Some(opened) = self.board.remove_card(door) {
            info!(door = %opened.uid, level = self.level, "door opened");
            let settle_ms = self.config.door_settle_ms;
            self.emit(Notification::DoorOpened {
                door: opened.uid,
                settle_ms,
            });
            self.emit(Notification::CellChanged {
                pos: door,
                card: None,
            });
            self.discard(opened);
        }

        self.clear_board();
        if self.level + 1 < self.dungeon.levels.len() {
            self.advance_level();
        } else {
            self.finish(Ending::Victory);
        }
        self.release();
        Ok(())
    }

    /// Discard every board occupant along with its held loot.
    fn clear_board(&mut self) {
        let cells: Vec<CellPos> = self.board.occupants().map(|(pos, _)| pos).collect();
        let cards = self.board.get_all_cards();
        let discarded: usize = cards.iter().map(|c| c.population()).sum();

        for pos in cells {
            self.emit(Notification::CellChanged { pos, card: None });
        }
        for card in cards {
            self.discard(card);
        }
        self.emit(Notification::BoardCleared { discarded });

        self.emit_stats();
    }

    /// Move to the next level: merge its cards into the deck, arm its key
    /// and explore if configured.
    fn advance_level(&mut self) {
        self.level += 1;
        self.key_awarded = false;

        let cards = Deck::level_cards(
            &self.dungeon.levels[self.level],
            &self.cards,
            &mut self.uids,
        )
        .unwrap_or_else(|e| panic!("validated level lost a card: {e}"));
        self.deck.merge_cards(cards, &mut self.rng);

        let remaining = self.deck.remaining();
        self.emit(Notification::DeckSizeChanged { remaining });
        self.announce_level();

        if self.config.auto_explore_on_level {
            self.explore_batch();
        }
    }

    pub(super) fn announce_level(&mut self) {
        let level = self.level;
        let config = &self.dungeon.levels[level];
        let (name, flavor_text) = (config.name.clone(), config.flavor_text.clone());
        info!(level, %name, deck = self.deck.remaining(), "level entered");
        self.emit(Notification::LevelEntered {
            level,
            name,
            flavor_text,
        });
    }
}

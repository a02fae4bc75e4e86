//! Exploring: drawing a batch of cards and placing them on the board.

use tracing::{debug, trace};

use super::loot::{find_claimable, loot_snapshot, pick_loot};
use super::{CommandRecord, GameSession, Notification};
use crate::abilities::{AbilityEffect, AbilityTrigger};
use crate::cards::{CardKind, CardRecord};
use crate::core::Rejection;
use crate::encounter::Activity;
use crate::zones::CellPos;

impl GameSession {
    /// Draw up to `draw_count` cards (never more than there are empty
    /// cells) and place them on the board.
    ///
    /// Refused while locked, while a trap is on the board, when the deck is
    /// empty, or when the board is full. Returns the cells that received a
    /// card.
    pub fn explore(&mut self) -> Result<Vec<CellPos>, Rejection> {
        self.ensure_idle()?;
        if self.has_trap_on_board() {
            return Err(Rejection::TrapOnBoard);
        }
        if self.deck.is_empty() {
            return Err(Rejection::DeckEmpty);
        }
        if self.board.get_empty_slots().is_empty() {
            return Err(Rejection::BoardFull);
        }

        self.record(CommandRecord::Explore);
        Ok(self.explore_batch())
    }

    /// Run one explore under the lock: fire explore abilities, then draw
    /// and place.
    pub(super) fn explore_batch(&mut self) -> Vec<CellPos> {
        self.activity = Activity::Exploring;
        self.summon_into_deck();
        let placed = self.place_batch(self.config.draw_count);
        self.release();
        placed
    }

    /// Shuffle cards summoned by explore abilities on the board into the
    /// deck.
    fn summon_into_deck(&mut self) {
        let mut summons = Vec::new();
        for (_, card) in self.board.occupants() {
            for t in self.abilities.triggered(card, AbilityTrigger::OnExplore) {
                if t.effect() == AbilityEffect::ShuffleIntoDeck {
                    let id = t.instance.text("card").unwrap_or(card.id().as_str());
                    let count = t.instance.int("count").unwrap_or(1).max(0) as usize;
                    summons.push((id.to_string(), count));
                }
            }
        }
        if summons.is_empty() {
            return;
        }

        let mut cards = Vec::new();
        for (id, count) in summons {
            for _ in 0..count {
                cards.push(self.spawn_known(&id));
            }
        }
        debug!(summoned = cards.len(), "explore summons shuffled into deck");
        self.deck.merge_cards(cards, &mut self.rng);
        let remaining = self.deck.remaining();
        self.emit(Notification::DeckSizeChanged { remaining });
    }

    /// Draw `min(count, empty cells)` cards and place them into randomly
    /// chosen empty cells. Monsters that claim board loot take the loot's
    /// cell instead.
    fn place_batch(&mut self, count: usize) -> Vec<CellPos> {
        let mut empty = self.board.get_empty_slots();
        let n = count.min(empty.len());
        if n == 0 {
            return Vec::new();
        }

        let drawn = self.deck.draw(n);
        let remaining = self.deck.remaining();
        self.emit(Notification::DeckSizeChanged { remaining });

        self.rng.shuffle(&mut empty);
        let mut free = empty.into_iter();
        let agility_before = self.passive_agility();

        let eligible = loot_snapshot(&self.board);
        let mut claimed = Vec::new();
        let mut placed = Vec::with_capacity(drawn.len());

        for mut card in drawn {
            let claimed_cell = match card.kind() {
                CardKind::Monster => self.arm_monster(&mut card, &eligible, &mut claimed),
                CardKind::Chest => {
                    let loot = self.roll_loot();
                    card.set_loot(loot);
                    None
                }
                _ => None,
            };

            let Some(pos) = claimed_cell.or_else(|| free.next()) else {
                // n never exceeds the empty cells and claims reuse cells.
                unreachable!("no cell left for {}", card.uid);
            };
            self.place_occupant(pos, card);
            placed.push(pos);
        }

        if self.passive_agility() != agility_before {
            self.emit_stats();
        }
        placed
    }

    /// Give a newly drawn monster its loot. Returns the cell of any board
    /// loot it claimed, now vacated for the monster.
    fn arm_monster(
        &mut self,
        monster: &mut CardRecord,
        eligible: &[CellPos],
        claimed: &mut Vec<CellPos>,
    ) -> Option<CellPos> {
        if monster.data.is_boss && !self.key_awarded {
            let key_id = self.level_config().key.clone();
            let key = self.spawn_known(&key_id);
            debug!(boss = %monster.uid, key = %key.uid, "boss guards the level key");
            monster.set_loot(key);
            self.key_awarded = true;
            return None;
        }

        if let Some(pos) = find_claimable(&self.board, eligible, claimed) {
            if let Some(loot) = self.board.remove_card(pos) {
                debug!(monster = %monster.uid, loot = %loot.uid, %pos, "monster claims loot");
                monster.set_loot(loot);
                claimed.push(pos);
                self.emit(Notification::CellChanged { pos, card: None });
                return Some(pos);
            }
        }

        let loot = self.roll_loot();
        monster.set_loot(loot);
        None
    }

    /// A fresh card from the loot pool.
    fn roll_loot(&mut self) -> CardRecord {
        let id = pick_loot(&self.dungeon.loot_pool, &mut self.rng)
            .unwrap_or_else(|| panic!("validated loot pool is empty"))
            .to_string();
        self.spawn_known(&id)
    }

    /// Put a card face-up into an empty cell and fire its reveal abilities.
    pub(super) fn place_occupant(&mut self, pos: CellPos, card: CardRecord) {
        trace!(card = %card.uid, id = %card.id(), %pos, "placed");
        let effects = self.effects_of(&card, AbilityTrigger::OnReveal);
        let uid = card.uid;
        self.board.place_card(pos, card);
        self.emit(Notification::CellChanged {
            pos,
            card: Some(uid),
        });
        for (effect, amount) in effects {
            self.apply_to_player(effect, amount);
        }
    }
}
